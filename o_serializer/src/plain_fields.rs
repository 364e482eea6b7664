use std::{borrow::Cow, vec};

use crate::Field;

/// Shorthand for a batch of pass-through attributes.
///
/// Expands to one `key => Field::new(key)` entry per key, in the order given.
///
/// ```
/// use std::borrow::Cow;
///
/// use o_serializer::{Field, PlainFields};
///
/// let fields: Vec<_> = PlainFields::new(["first_name", "last_name"]).into_iter().collect();
/// assert_eq!(
/// 	fields,
/// 	vec![
/// 		(Cow::from("first_name"), Field::new("first_name")),
/// 		(Cow::from("last_name"), Field::new("last_name")),
/// 	]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainFields {
	keys: Vec<Cow<'static, str>>,
}

impl PlainFields {
	pub fn new<I, K>(keys: I) -> Self
	where
		I: IntoIterator<Item = K>,
		K: Into<Cow<'static, str>>,
	{
		Self {
			keys: keys.into_iter().map(Into::into).collect(),
		}
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().map(|key| &**key)
	}

	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

impl IntoIterator for PlainFields {
	type Item = (Cow<'static, str>, Field);
	type IntoIter = PlainFieldsIter;

	fn into_iter(self) -> PlainFieldsIter {
		PlainFieldsIter {
			keys: self.keys.into_iter(),
		}
	}
}

/// Iterator over `(key, Field)` pairs produced by [`PlainFields`].
pub struct PlainFieldsIter {
	keys: vec::IntoIter<Cow<'static, str>>,
}

impl Iterator for PlainFieldsIter {
	type Item = (Cow<'static, str>, Field);

	fn next(&mut self) -> Option<Self::Item> {
		let key = self.keys.next()?;
		let field = Field::new(key.clone());
		Some((key, field))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.keys.size_hint()
	}
}

impl ExactSizeIterator for PlainFieldsIter {}
