use crate::{Attribute, IntoAttribute};

impl<'a> IntoAttribute<'a> for () {
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::Null
	}
}

impl<'a, T> IntoAttribute<'a> for Option<T>
where T: IntoAttribute<'a>
{
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		match self {
			Some(value) => value.into_attribute(),
			None => Attribute::Null,
		}
	}
}

impl<'a, T> IntoAttribute<'a> for &'a Option<T>
where &'a T: IntoAttribute<'a>
{
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		self.as_ref().into_attribute()
	}
}
