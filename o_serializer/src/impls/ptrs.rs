use std::{collections::VecDeque, rc::Rc, sync::Arc};

use crate::{Attribute, IntoAttribute};

impl<'a, T> IntoAttribute<'a> for Box<T>
where T: IntoAttribute<'a>
{
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		(*self).into_attribute()
	}
}

macro_rules! impl_deref {
	($ptr:ident) => {
		impl<'a, T> IntoAttribute<'a> for &'a $ptr<T>
		where &'a T: IntoAttribute<'a>
		{
			#[inline]
			fn into_attribute(self) -> Attribute<'a> {
				IntoAttribute::into_attribute(&**self)
			}
		}
	};
}

impl_deref!(Box);
impl_deref!(Rc);
impl_deref!(Arc);

impl<'a, T> IntoAttribute<'a> for Vec<T>
where T: IntoAttribute<'a>
{
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::seq(self)
	}
}

macro_rules! impl_seq_by_ref {
	($($ty:tt)*) => {
		impl<'a, T> IntoAttribute<'a> for &'a $($ty)*
		where &'a T: IntoAttribute<'a>
		{
			#[inline]
			fn into_attribute(self) -> Attribute<'a> {
				Attribute::seq(self.iter())
			}
		}
	};
}

impl_seq_by_ref!(Vec<T>);
impl_seq_by_ref!([T]);
impl_seq_by_ref!(VecDeque<T>);

impl<'a, T, const N: usize> IntoAttribute<'a> for &'a [T; N]
where &'a T: IntoAttribute<'a>
{
	#[inline]
	fn into_attribute(self) -> Attribute<'a> {
		Attribute::seq(self.iter())
	}
}
