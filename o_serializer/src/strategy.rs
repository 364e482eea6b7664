use std::sync::Arc;

use serde_json::Value;

use crate::{Attribute, Result};

/// Field strategies implement this trait.
///
/// A strategy is anything which, given an object, produces an output value.
/// [`Field`](crate::Field), [`From`](crate::From), [`Many`](crate::Many),
/// [`Computed`](crate::Computed) and [`Serializer`](crate::Serializer) all
/// share this one-argument contract, which is what lets `From` nest either a
/// `Serializer` or a `Many` without knowing which it holds.
///
/// Strategies hold no per-call state, so one strategy can be shared between
/// serializers and called from many threads at once.
pub trait Strategy: Send + Sync {
	fn call(&self, object: &Attribute<'_>) -> Result<Value>;
}

impl<S: Strategy + ?Sized> Strategy for Arc<S> {
	#[inline]
	fn call(&self, object: &Attribute<'_>) -> Result<Value> {
		(**self).call(object)
	}
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
	#[inline]
	fn call(&self, object: &Attribute<'_>) -> Result<Value> {
		(**self).call(object)
	}
}
