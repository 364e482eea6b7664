use std::fmt;

use serde_json::Value;

use crate::{Error, Object, Result};

/// What strategies operate on, and what reading an attribute produces.
///
/// An `Attribute` is either nothing (`Null`), a value which is already plain
/// (`Value`), a domain object which can be read by name (`Object`), or an
/// ordered sequence of any of these (`Seq`).
///
/// Attributes borrow from the object graph being serialized and never outlive
/// a single serializer call.
#[derive(Clone)]
pub enum Attribute<'a> {
	Null,
	Value(Value),
	Object(&'a dyn Object),
	Seq(Vec<Attribute<'a>>),
}

impl<'a> Attribute<'a> {
	/// Wrap anything convertible to a JSON value.
	pub fn value<V: Into<Value>>(value: V) -> Self {
		Self::Value(value.into())
	}

	/// Build a sequence from an iterator of convertible items.
	pub fn seq<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: IntoAttribute<'a>,
	{
		Self::Seq(items.into_iter().map(IntoAttribute::into_attribute).collect())
	}

	#[inline]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null | Self::Value(Value::Null))
	}

	/// Short description of the variant, used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Value(_) => "plain value",
			Self::Object(_) => "object",
			Self::Seq(_) => "sequence",
		}
	}

	/// Name of the type this attribute reads from.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Object(object) => object.type_name(),
			_ => self.kind(),
		}
	}

	/// Convert into a plain JSON value.
	///
	/// Fails if this attribute is, or contains, a domain object. `key` is the
	/// attribute name the value was read from, and is only used in the error.
	pub fn into_value(self, key: &str) -> Result<Value> {
		match self {
			Self::Null => Ok(Value::Null),
			Self::Value(value) => Ok(value),
			Self::Object(_) => Err(Error::NotPlainValue {
				key: key.to_string(),
			}),
			Self::Seq(items) => items
				.into_iter()
				.map(|item| item.into_value(key))
				.collect::<Result<Vec<_>>>()
				.map(Value::Array),
		}
	}
}

impl fmt::Debug for Attribute<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("Null"),
			Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
			Self::Object(object) => f.debug_tuple("Object").field(&object.type_name()).finish(),
			Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
		}
	}
}

/// Conversion into an [`Attribute`].
///
/// Implemented for owned primitives, strings and JSON values (which become
/// `Attribute::Value`), for references to them, and for references to
/// containers (`Vec<T>`, `[T]`, `Option<T>`, `Box<T>`).
///
/// `#[derive(Object)]` implements it for `&'a YourType`, producing
/// `Attribute::Object`.
pub trait IntoAttribute<'a> {
	fn into_attribute(self) -> Attribute<'a>;
}

impl<'a> IntoAttribute<'a> for Attribute<'a> {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		self
	}
}

impl<'a> IntoAttribute<'a> for &'a dyn Object {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Object(self)
	}
}
