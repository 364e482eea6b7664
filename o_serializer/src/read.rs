use std::any::{self, Any};

use crate::{Attribute, Error, Result};

/// Trait for domain objects whose members can be read by name.
///
/// Usually implemented with `#[derive(Object)]`, which maps each field name
/// (and any methods listed in `#[object(method = "...")]`) to its value.
///
/// ```
/// use o_serializer::{Attribute, IntoAttribute, Object};
///
/// struct Tag {
/// 	name: String,
/// }
///
/// impl Object for Tag {
/// 	fn get_attribute(&self, key: &str) -> Option<Attribute<'_>> {
/// 		match key {
/// 			"name" => Some(self.name.as_str().into_attribute()),
/// 			_ => None,
/// 		}
/// 	}
/// }
/// ```
pub trait Object: Any {
	/// Plain member access. Returns `None` if there is no member called `key`.
	fn get_attribute(&self, key: &str) -> Option<Attribute<'_>>;

	/// Serialization-specific accessor.
	///
	/// If this returns `Some`, the reader is used for every attribute of this
	/// object in place of [`get_attribute`](Object::get_attribute).
	#[inline]
	fn serialization_reader(&self) -> Option<&dyn ReadForSerialization> {
		None
	}

	/// Name of the concrete type, for error messages.
	fn type_name(&self) -> &'static str {
		any::type_name::<Self>()
	}
}

impl dyn Object {
	/// Returns `true` if the object is of type `T`.
	#[inline]
	pub fn is<T: Object>(&self) -> bool {
		Any::type_id(self) == any::TypeId::of::<T>()
	}

	/// Downcast to the concrete type.
	pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
		if self.is::<T>() {
			// SAFETY: Type ID of the pointee was just checked to be `T`
			Some(unsafe { &*(self as *const dyn Object as *const T) })
		} else {
			None
		}
	}
}

/// Capability for objects which customise how their attributes are exposed
/// to serializers.
///
/// Expose it from [`Object::serialization_reader`]. With `#[derive(Object)]`,
/// add `#[object(read_for_serialization)]` to the type.
pub trait ReadForSerialization {
	fn read_attribute_for_serialization(&self, key: &str) -> Result<Attribute<'_>>;
}

/// Read attribute `key` from `object`.
///
/// Prefers the object's [`ReadForSerialization`] capability, falling back to
/// plain member access. There is no guard for a missing member: if the object
/// has no attribute `key`, or `object` is not a domain object at all, this
/// fails with [`Error::UnknownAttribute`].
pub fn read<'a>(object: &Attribute<'a>, key: &str) -> Result<Attribute<'a>> {
	let Attribute::Object(object) = object else {
		return Err(Error::unknown_attribute(key, object.kind()));
	};
	let object: &'a dyn Object = *object;

	match object.serialization_reader() {
		Some(reader) => reader.read_attribute_for_serialization(key),
		None => object
			.get_attribute(key)
			.ok_or_else(|| Error::unknown_attribute(key, object.type_name())),
	}
}
