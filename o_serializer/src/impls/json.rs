use serde_json::{Map, Value};

use crate::{Attribute, IntoAttribute};

// JSON values are already plain, so are passed through as they are.
// Note that a JSON array is still iterable by `Many`.

impl<'a> IntoAttribute<'a> for Value {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Value(self)
	}
}

impl<'a> IntoAttribute<'a> for &Value {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Value(self.clone())
	}
}

impl<'a> IntoAttribute<'a> for Map<String, Value> {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Value(Value::Object(self))
	}
}

impl<'a> IntoAttribute<'a> for &Map<String, Value> {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Value(Value::Object(self.clone()))
	}
}
