use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::{Attribute, Error, IntoAttribute, Result, Strategy};

/// Strategy which maps a serializer over an ordered sequence.
///
/// Output has one element per input element, in input order.
///
/// Unlike the other strategies, `Many` does not treat `Null` as an empty
/// collection. Anything which is not a sequence fails with
/// [`Error::NotIterable`]. A nullable collection can be wrapped in a
/// [`Computed`](crate::Computed) which checks for null first.
#[derive(Clone)]
pub struct Many {
	serializer: Arc<dyn Strategy>,
}

impl Many {
	pub fn new<S: Strategy + 'static>(serializer: S) -> Self {
		Self {
			serializer: Arc::new(serializer),
		}
	}

	/// Serialize a collection.
	///
	/// ```
	/// use o_serializer::{Many, Serializer};
	/// use serde_json::json;
	///
	/// let many = Many::new(Serializer::builder().build());
	/// assert_eq!(many.serialize(&Vec::<u8>::new()), Ok(json!([])));
	/// ```
	pub fn serialize<'a, T: IntoAttribute<'a>>(&self, collection: T) -> Result<Value> {
		self.call(&collection.into_attribute())
	}
}

impl Strategy for Many {
	fn call(&self, collection: &Attribute<'_>) -> Result<Value> {
		let items = match collection {
			Attribute::Seq(items) => items
				.iter()
				.map(|item| self.serializer.call(item))
				.collect::<Result<Vec<_>>>()?,
			Attribute::Value(Value::Array(values)) => values
				.iter()
				.map(|value| self.serializer.call(&Attribute::Value(value.clone())))
				.collect::<Result<Vec<_>>>()?,
			other => {
				return Err(Error::NotIterable {
					found: other.kind(),
				})
			}
		};
		Ok(Value::Array(items))
	}
}

impl fmt::Debug for Many {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Many").finish_non_exhaustive()
	}
}
