use std::borrow::Cow;

use serde_json::Value;

use crate::{Attribute, IntoAttribute};

impl<'a> IntoAttribute<'a> for String {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Value(Value::String(self))
	}
}

impl<'a> IntoAttribute<'a> for &'a String {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		self.as_str().into_attribute()
	}
}

impl<'a> IntoAttribute<'a> for &str {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Value(Value::String(self.to_string()))
	}
}

impl<'a> IntoAttribute<'a> for &&str {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		(*self).into_attribute()
	}
}

impl<'a> IntoAttribute<'a> for Cow<'_, str> {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Value(Value::String(self.into_owned()))
	}
}

impl<'a> IntoAttribute<'a> for &Cow<'_, str> {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		IntoAttribute::into_attribute(&**self)
	}
}
