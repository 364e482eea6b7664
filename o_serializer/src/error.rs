use std::fmt::Display;

/// Errors raised while serializing an object graph.
///
/// Serialization never recovers from an error. The first failing field aborts
/// the whole call and no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// Object has neither a serialization reader nor a member called `key`.
	#[error("`{type_name}` has no attribute `{key}`")]
	UnknownAttribute { key: String, type_name: &'static str },

	/// `Many` was given something other than a sequence.
	#[error("expected a sequence, found {found}")]
	NotIterable { found: &'static str },

	/// `Field` read an attribute holding a domain object, which needs a
	/// nested serializer (`From`) to become a plain value.
	#[error("attribute `{key}` is an object, serialize it with `From`")]
	NotPlainValue { key: String },

	/// A typed computed field was called with an object of another type.
	#[error("expected `{expected}`, found `{found}`")]
	TypeMismatch {
		expected: &'static str,
		found: &'static str,
	},

	/// Raised by user code (custom readers, computed fields).
	#[error("{0}")]
	Custom(String),
}

impl Error {
	pub fn custom<T: Display>(msg: T) -> Self {
		Self::Custom(msg.to_string())
	}

	pub(crate) fn unknown_attribute(key: &str, type_name: &'static str) -> Self {
		Self::UnknownAttribute {
			key: key.to_string(),
			type_name,
		}
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
