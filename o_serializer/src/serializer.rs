use std::{borrow::Cow, fmt, sync::Arc};

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{Attribute, IntoAttribute, Result, Strategy};

type Key = Cow<'static, str>;

/// Composition root: an ordered set of output keys, each with the strategy
/// which produces its value.
///
/// Calling a `Serializer` on an object evaluates every strategy in
/// declaration order and collects the results into a fresh JSON object, with
/// keys in the same order. Calling it on `Null` yields `Null`.
///
/// A `Serializer` is immutable once built. Cloning is cheap and shares the
/// strategies.
///
/// ```
/// use o_serializer::{Field, Serializer};
/// use serde_json::{json, Value};
///
/// let tag_serializer = Serializer::builder().field("name", Field::new("name")).build();
/// assert_eq!(tag_serializer.serialize(None::<&Value>), Ok(Value::Null));
/// ```
#[derive(Clone)]
pub struct Serializer {
	fields: Arc<[(Key, Arc<dyn Strategy>)]>,
}

impl Serializer {
	/// Create a `Serializer` from `(key, strategy)` pairs.
	pub fn new<I, K, S>(fields: I) -> Self
	where
		I: IntoIterator<Item = (K, S)>,
		K: Into<Key>,
		S: Strategy + 'static,
	{
		Self::builder().fields(fields).build()
	}

	pub fn builder() -> SerializerBuilder {
		SerializerBuilder::new()
	}

	/// Serialize an object (or `Null`).
	///
	/// Accepts anything convertible to an [`Attribute`], e.g. `&User` or
	/// `Option<&User>`.
	pub fn serialize<'a, T: IntoAttribute<'a>>(&self, object: T) -> Result<Value> {
		self.call(&object.into_attribute())
	}

	/// Output keys, in declaration order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(key, _)| &**key)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl Strategy for Serializer {
	fn call(&self, object: &Attribute<'_>) -> Result<Value> {
		if object.is_null() {
			return Ok(Value::Null);
		}

		trace!(
			type_name = object.type_name(),
			fields = self.fields.len(),
			"serializing object"
		);

		let mut map = Map::with_capacity(self.fields.len());
		for (key, strategy) in self.fields.iter() {
			let value = strategy.call(object).map_err(|err| {
				debug!(key = &**key, error = %err, "field evaluation failed");
				err
			})?;
			map.insert(key.to_string(), value);
		}
		Ok(Value::Object(map))
	}
}

impl fmt::Debug for Serializer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Serializer")
			.field("keys", &self.keys().collect::<Vec<_>>())
			.finish()
	}
}

/// Builder for [`Serializer`].
///
/// Declaring a key which was already declared replaces its strategy but keeps
/// its original position, so output never contains duplicate keys.
#[derive(Default)]
pub struct SerializerBuilder {
	fields: Vec<(Key, Arc<dyn Strategy>)>,
}

impl SerializerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a single field.
	pub fn field<K, S>(mut self, key: K, strategy: S) -> Self
	where
		K: Into<Key>,
		S: Strategy + 'static,
	{
		self.push(key.into(), Arc::new(strategy));
		self
	}

	/// Add many fields, e.g. from [`PlainFields`](crate::PlainFields).
	pub fn fields<I, K, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = (K, S)>,
		K: Into<Key>,
		S: Strategy + 'static,
	{
		for (key, strategy) in fields {
			self.push(key.into(), Arc::new(strategy));
		}
		self
	}

	pub fn build(self) -> Serializer {
		Serializer {
			fields: self.fields.into(),
		}
	}

	fn push(&mut self, key: Key, strategy: Arc<dyn Strategy>) {
		match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, slot)) => *slot = strategy,
			None => self.fields.push((key, strategy)),
		}
	}
}
