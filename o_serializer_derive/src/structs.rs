use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, LitStr, Result};

use crate::fields::{check_unique_keys, exposed_fields};

pub fn derive_struct(
	data: DataStruct,
	method_keys: &[LitStr],
	method_arms: Vec<TokenStream>,
) -> Result<TokenStream> {
	let fields = exposed_fields(&data.fields)?;
	check_unique_keys(fields.iter().map(|field| &field.key).chain(method_keys))?;

	let field_arms = fields
		.into_iter()
		.map(|field| {
			let key = field.key;
			let member = field.member;
			quote! {
				#key => ::core::option::Option::Some(
					::o_serializer::IntoAttribute::into_attribute(&self.#member)
				),
			}
		})
		.collect::<Vec<_>>();

	Ok(quote! {
		match key {
			#(#field_arms)*
			#(#method_arms)*
			_ => ::core::option::Option::None,
		}
	})
}
