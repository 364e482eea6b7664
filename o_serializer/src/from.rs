use std::{borrow::Cow, fmt, sync::Arc};

use serde_json::Value;

use crate::{read, Attribute, Result, Strategy};

/// Strategy for relations: reads an attribute, then serializes it with a
/// nested strategy.
///
/// The nested strategy is usually a [`Serializer`](crate::Serializer) for a
/// single related object, or a [`Many`](crate::Many) for a related collection.
///
/// This type shadows the prelude's `From` trait when imported by name.
/// Prefer referring to it through the crate path (`o::From`).
#[derive(Clone)]
pub struct From {
	key: Cow<'static, str>,
	serializer: Arc<dyn Strategy>,
}

impl From {
	pub fn new<K, S>(key: K, serializer: S) -> Self
	where
		K: Into<Cow<'static, str>>,
		S: Strategy + 'static,
	{
		Self {
			key: key.into(),
			serializer: Arc::new(serializer),
		}
	}

	#[inline]
	pub fn key(&self) -> &str {
		&self.key
	}
}

impl Strategy for From {
	fn call(&self, object: &Attribute<'_>) -> Result<Value> {
		if object.is_null() {
			return Ok(Value::Null);
		}
		let related = read(object, &self.key)?;
		self.serializer.call(&related)
	}
}

impl fmt::Debug for From {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("From").field("key", &self.key).finish_non_exhaustive()
	}
}
