//! Declarative, composable serializers which turn graphs of domain objects
//! into plain JSON values.
//!
//! A [`Serializer`] is built once from an ordered list of output keys, each
//! paired with a field strategy:
//!
//! * [`Field`] outputs one attribute as it is.
//! * [`From`] reads a related object (or collection) and serializes it with a
//!   nested strategy.
//! * [`Many`] maps a serializer over a collection.
//! * [`PlainFields`] is shorthand for a batch of [`Field`]s.
//! * [`Computed`] wraps an arbitrary function.
//!
//! Objects expose their attributes by name through the [`Object`] trait,
//! usually derived.
//!
//! ```
//! use o_serializer::{self as o, serializer, Object};
//! use serde_json::json;
//!
//! #[derive(Object)]
//! struct Tag {
//! 	name: String,
//! }
//!
//! #[derive(Object)]
//! #[object(method = "display_name")]
//! struct User {
//! 	email: String,
//! 	tags: Vec<Tag>,
//! }
//!
//! impl User {
//! 	fn display_name(&self) -> &str {
//! 		self.email.split('@').next().unwrap_or_default()
//! 	}
//! }
//!
//! let tag_serializer = serializer! {
//! 	"name" => o::Field::new("name"),
//! };
//! let user_serializer = serializer! {
//! 	..o::PlainFields::new(["email", "display_name"]),
//! 	"tags" => o::From::new("tags", o::Many::new(tag_serializer)),
//! };
//!
//! let user = User {
//! 	email: "ada@example.com".to_string(),
//! 	tags: vec![Tag { name: "math".to_string() }],
//! };
//! assert_eq!(
//! 	user_serializer.serialize(&user).unwrap(),
//! 	json!({
//! 		"email": "ada@example.com",
//! 		"display_name": "ada",
//! 		"tags": [{"name": "math"}],
//! 	})
//! );
//! ```

// Allows derive output (which refers to `::o_serializer`) to be used in this crate's own tests
extern crate self as o_serializer;

#[cfg(feature = "derive")]
pub use o_serializer_derive::Object;

mod attribute;
pub use attribute::{Attribute, IntoAttribute};

mod error;
pub use error::{Error, Result};

mod read;
pub use read::{read, Object, ReadForSerialization};

mod strategy;
pub use strategy::Strategy;

mod field;
pub use field::Field;

mod from;
pub use from::From;

mod many;
pub use many::Many;

mod plain_fields;
pub use plain_fields::{PlainFields, PlainFieldsIter};

mod computed;
pub use computed::Computed;

mod serializer;
pub use serializer::{Serializer, SerializerBuilder};

mod impls;
mod macros;
