use num_bigint::{BigInt, BigUint};
use serde_json::Value;

use crate::{Attribute, IntoAttribute};

// Big integers which fit in 64 bits are output as JSON numbers,
// anything larger as a decimal string.

impl<'a> IntoAttribute<'a> for &BigInt {
	fn into_attribute(self) -> Attribute<'a> {
		let value = match i64::try_from(self) {
			Ok(small) => Value::from(small),
			Err(_) => Value::String(self.to_string()),
		};
		Attribute::Value(value)
	}
}

impl<'a> IntoAttribute<'a> for &BigUint {
	fn into_attribute(self) -> Attribute<'a> {
		let value = match u64::try_from(self) {
			Ok(small) => Value::from(small),
			Err(_) => Value::String(self.to_string()),
		};
		Attribute::Value(value)
	}
}

impl<'a> IntoAttribute<'a> for BigInt {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		(&self).into_attribute()
	}
}

impl<'a> IntoAttribute<'a> for BigUint {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		(&self).into_attribute()
	}
}
