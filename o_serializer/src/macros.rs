/// Build a [`Serializer`](crate::Serializer) from a literal field list.
///
/// Each entry is either `"key" => strategy` or `..fields`, where `fields` is
/// anything accepted by
/// [`SerializerBuilder::fields`](crate::SerializerBuilder::fields), such as
/// [`PlainFields`](crate::PlainFields). Entries are declared in the order
/// written.
///
/// ```
/// use o_serializer::{self as o, serializer};
///
/// let tag_serializer = serializer! {
/// 	"name" => o::Field::new("name"),
/// };
///
/// let user_serializer = serializer! {
/// 	"email" => o::Field::new("email"),
/// 	..o::PlainFields::new(["first_name", "last_name"]),
/// 	"tags" => o::From::new("tags", o::Many::new(tag_serializer)),
/// };
///
/// assert_eq!(
/// 	user_serializer.keys().collect::<Vec<_>>(),
/// 	["email", "first_name", "last_name", "tags"]
/// );
/// ```
#[macro_export]
macro_rules! serializer {
	// Munch entries one at a time, so `..` spreads can be mixed with keyed entries
	(@fields $builder:ident;) => {};

	(@fields $builder:ident; .. $fields:expr $(, $($rest:tt)*)?) => {
		$builder = $builder.fields($fields);
		$crate::serializer!(@fields $builder; $($($rest)*)?);
	};

	(@fields $builder:ident; $key:expr => $strategy:expr $(, $($rest:tt)*)?) => {
		$builder = $builder.field($key, $strategy);
		$crate::serializer!(@fields $builder; $($($rest)*)?);
	};

	($($fields:tt)*) => {{
		#[allow(unused_mut)]
		let mut builder = $crate::Serializer::builder();
		$crate::serializer!(@fields builder; $($fields)*);
		builder.build()
	}};
}
