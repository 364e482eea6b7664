use std::{any, fmt};

use serde_json::Value;

use crate::{Attribute, Error, Object, Result, Strategy};

type ComputeFn = dyn Fn(&Attribute<'_>) -> Result<Value> + Send + Sync;

/// Strategy for values computed by a function, rather than read from a
/// named attribute.
///
/// ```
/// use o_serializer::{Attribute, Computed, Object, Strategy};
/// use serde_json::json;
///
/// struct User {
/// 	first_name: String,
/// 	last_name: String,
/// }
///
/// impl Object for User {
/// 	fn get_attribute(&self, _key: &str) -> Option<Attribute<'_>> {
/// 		None
/// 	}
/// }
///
/// let full_name = Computed::new(|user: &User| format!("{} {}", user.first_name, user.last_name));
///
/// let user = User {
/// 	first_name: "Ada".to_string(),
/// 	last_name: "Lovelace".to_string(),
/// };
/// assert_eq!(full_name.call(&Attribute::Object(&user)), Ok(json!("Ada Lovelace")));
/// ```
pub struct Computed {
	compute: Box<ComputeFn>,
}

impl Computed {
	/// Computed field over objects of type `T`.
	///
	/// Calling it on `Null` yields `Null`. Calling it on anything other than a
	/// `T` fails with [`Error::TypeMismatch`].
	pub fn new<T, V, F>(compute: F) -> Self
	where
		T: Object,
		V: Into<Value> + 'static,
		F: Fn(&T) -> V + Send + Sync + 'static,
	{
		Self::try_new(move |object: &T| Ok(compute(object)))
	}

	/// Computed field over objects of type `T`, which may fail.
	pub fn try_new<T, V, F>(compute: F) -> Self
	where
		T: Object,
		V: Into<Value> + 'static,
		F: Fn(&T) -> Result<V> + Send + Sync + 'static,
	{
		Self::raw(move |object: &Attribute<'_>| {
			if object.is_null() {
				return Ok(Value::Null);
			}
			let found = object.type_name();
			let typed = match object {
				Attribute::Object(object) => object.downcast_ref::<T>(),
				_ => None,
			};
			match typed {
				Some(typed) => compute(typed).map(Into::into),
				None => Err(Error::TypeMismatch {
					expected: any::type_name::<T>(),
					found,
				}),
			}
		})
	}

	/// Computed field over any attribute, including `Null`.
	pub fn raw<F>(compute: F) -> Self
	where F: Fn(&Attribute<'_>) -> Result<Value> + Send + Sync + 'static {
		Self {
			compute: Box::new(compute),
		}
	}
}

impl Strategy for Computed {
	#[inline]
	fn call(&self, object: &Attribute<'_>) -> Result<Value> {
		(self.compute)(object)
	}
}

impl fmt::Debug for Computed {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Computed").finish_non_exhaustive()
	}
}
