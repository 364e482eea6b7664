use std::borrow::Cow;

use serde_json::Value;

use crate::{read, Attribute, Result, Strategy};

/// Strategy which outputs the value of a single attribute.
///
/// Calling a `Field` on `Null` yields `Null` without reading anything.
/// Whether the attribute exists is only checked at call time.
///
/// ```
/// use o_serializer::{Attribute, Field, Strategy};
/// use serde_json::Value;
///
/// let field = Field::new("name");
/// assert_eq!(field.call(&Attribute::Null), Ok(Value::Null));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
	key: Cow<'static, str>,
}

impl Field {
	pub fn new<K: Into<Cow<'static, str>>>(key: K) -> Self {
		Self { key: key.into() }
	}

	/// Name of the attribute this field reads.
	#[inline]
	pub fn key(&self) -> &str {
		&self.key
	}
}

impl Strategy for Field {
	fn call(&self, object: &Attribute<'_>) -> Result<Value> {
		if object.is_null() {
			return Ok(Value::Null);
		}
		read(object, &self.key)?.into_value(&self.key)
	}
}
