use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{DataEnum, Fields, LitStr, Result, Variant};

use crate::fields::{check_unique_keys, exposed_fields};

pub fn derive_enum(
	data: DataEnum,
	method_keys: &[LitStr],
	method_arms: Vec<TokenStream>,
) -> Result<TokenStream> {
	if data.variants.is_empty() {
		return Ok(quote! {
			match *self {}
		});
	}

	let variant_arms = data
		.variants
		.iter()
		.map(|variant| get_variant_arm(variant, method_keys))
		.collect::<Result<Vec<_>>>()?;

	let match_stmt = quote! {
		match self {
			#(#variant_arms)*
		}
	};

	if method_arms.is_empty() {
		return Ok(match_stmt);
	}

	// Fields of the current variant take precedence over methods
	Ok(quote! {
		let attribute = #match_stmt;
		match attribute {
			::core::option::Option::Some(attribute) => ::core::option::Option::Some(attribute),
			::core::option::Option::None => match key {
				#(#method_arms)*
				_ => ::core::option::Option::None,
			},
		}
	})
}

fn get_variant_arm(variant: &Variant, method_keys: &[LitStr]) -> Result<TokenStream> {
	let ident = &variant.ident;
	let fields = exposed_fields(&variant.fields)?;
	check_unique_keys(fields.iter().map(|field| &field.key).chain(method_keys))?;

	let pattern = match &variant.fields {
		Fields::Unit => quote! { Self::#ident },
		Fields::Named(_) => {
			let var_mappings = fields.iter().map(|field| {
				let member = &field.member;
				let binding = &field.binding;
				quote! { #member: #binding }
			});
			quote! { Self::#ident { #(#var_mappings,)* .. } }
		}
		Fields::Unnamed(unnamed) => {
			// Tuple variants are matched positionally, so skipped fields need placeholders
			let mut exposed = fields.iter().peekable();
			let bindings = (0..unnamed.unnamed.len()).map(|index| {
				match exposed.next_if(|field| field.position == index) {
					Some(field) => {
						let binding = &field.binding;
						quote! { #binding }
					}
					None => quote! { _ },
				}
			});
			quote! { Self::#ident(#(#bindings),*) }
		}
	};

	let key_arms = fields.iter().map(|field| {
		let key = &field.key;
		let binding = &field.binding;
		quote! {
			#key => ::core::option::Option::Some(
				::o_serializer::IntoAttribute::into_attribute(#binding)
			),
		}
	});

	Ok(quote_spanned! {ident.span()=>
		#pattern => match key {
			#(#key_arms)*
			_ => ::core::option::Option::None,
		},
	})
}
