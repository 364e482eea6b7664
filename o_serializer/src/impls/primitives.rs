use std::num;

use serde_json::Value;

use crate::{Attribute, IntoAttribute};

macro_rules! impl_primitive {
	($ty:ty) => {
		impl<'a> IntoAttribute<'a> for $ty {
			#[inline]
			fn into_attribute(self) -> Attribute<'a> {
				Attribute::Value(Value::from(self))
			}
		}

		impl_by_ref!($ty);
	};
}

// JSON numbers only hold 64 bits. Wider integers which don't fit are output
// as decimal strings.
macro_rules! impl_wide_int {
	($ty:ty, $narrow:ty) => {
		impl<'a> IntoAttribute<'a> for $ty {
			fn into_attribute(self) -> Attribute<'a> {
				let value = match <$narrow>::try_from(self) {
					Ok(narrow) => Value::from(narrow),
					Err(_) => Value::String(self.to_string()),
				};
				Attribute::Value(value)
			}
		}

		impl_by_ref!($ty);
	};
}

macro_rules! impl_non_zero {
	($ty:ty) => {
		impl<'a> IntoAttribute<'a> for $ty {
			#[inline]
			fn into_attribute(self) -> Attribute<'a> {
				self.get().into_attribute()
			}
		}

		impl_by_ref!($ty);
	};
}

macro_rules! impl_by_ref {
	($ty:ty) => {
		impl<'a> IntoAttribute<'a> for &'a $ty {
			#[inline]
			fn into_attribute(self) -> Attribute<'a> {
				(*self).into_attribute()
			}
		}
	};
}

impl_primitive!(u8);
impl_primitive!(u16);
impl_primitive!(u32);
impl_primitive!(u64);
impl_wide_int!(u128, u64);
impl_primitive!(usize);

impl_primitive!(i8);
impl_primitive!(i16);
impl_primitive!(i32);
impl_primitive!(i64);
impl_wide_int!(i128, i64);
impl_primitive!(isize);

impl_non_zero!(num::NonZeroU8);
impl_non_zero!(num::NonZeroU16);
impl_non_zero!(num::NonZeroU32);
impl_non_zero!(num::NonZeroU64);
impl_non_zero!(num::NonZeroU128);
impl_non_zero!(num::NonZeroUsize);

impl_non_zero!(num::NonZeroI8);
impl_non_zero!(num::NonZeroI16);
impl_non_zero!(num::NonZeroI32);
impl_non_zero!(num::NonZeroI64);
impl_non_zero!(num::NonZeroI128);
impl_non_zero!(num::NonZeroIsize);

// Non-finite floats become `null`
impl_primitive!(f32);
impl_primitive!(f64);

impl_primitive!(bool);

impl<'a> IntoAttribute<'a> for char {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Value(Value::String(self.to_string()))
	}
}

impl_by_ref!(char);
