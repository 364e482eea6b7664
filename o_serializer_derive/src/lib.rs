use proc_macro2::TokenStream;
use quote::quote;
use syn::{
	parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Error, GenericParam, Generics,
	Ident, Lit, LitStr, Meta, NestedMeta, Result,
};

mod structs;
use structs::derive_struct;
mod enums;
use enums::derive_enum;
mod fields;

/// Derive `o_serializer::Object`, exposing fields by name.
///
/// Container attributes:
///
/// * `#[object(method = "avatar")]` - expose zero-argument method `avatar()`
///   under key `"avatar"`.
/// * `#[object(method(key = "active?", call = "active"))]` - expose method
///   `active()` under key `"active?"`.
/// * `#[object(read_for_serialization)]` - type implements
///   `ReadForSerialization`, which takes precedence over field access.
///
/// Field attributes:
///
/// * `#[object(skip)]` - do not expose the field.
/// * `#[object(rename = "other")]` - expose the field under a different key.
#[proc_macro_derive(Object, attributes(object))]
pub fn object(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	object_impl(input)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}

fn object_impl(input: DeriveInput) -> Result<TokenStream> {
	let options = get_options(&input.attrs)?;
	let generics = get_generics(input.generics)?;

	let ident = input.ident;
	let method_keys = options
		.methods
		.iter()
		.map(|method| method.key.clone())
		.collect::<Vec<_>>();
	fields::check_unique_keys(&method_keys)?;

	let method_arms = get_method_arms(&options.methods);
	let get_attribute_body = match input.data {
		Data::Struct(data) => derive_struct(data, &method_keys, method_arms)?,
		Data::Enum(data) => derive_enum(data, &method_keys, method_arms)?,
		Data::Union(data) => {
			return Err(Error::new(
				data.union_token.span,
				"Deriving `Object` on unions is not supported",
			))
		}
	};

	let reader_fn = if options.read_for_serialization {
		quote! {
			#[inline]
			fn serialization_reader(&self) -> ::core::option::Option<&dyn ::o_serializer::ReadForSerialization> {
				::core::option::Option::Some(self)
			}
		}
	} else {
		quote! {}
	};

	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	// `IntoAttribute` is implemented for references, so needs an extra lifetime
	let mut ref_generics = generics.clone();
	ref_generics.params.insert(0, parse_quote!('__a));
	let (ref_impl_generics, _, _) = ref_generics.split_for_impl();

	Ok(quote! {
		#[automatically_derived]
		impl #impl_generics ::o_serializer::Object for #ident #type_generics #where_clause {
			fn get_attribute(&self, key: &str) -> ::core::option::Option<::o_serializer::Attribute<'_>> {
				#get_attribute_body
			}

			#reader_fn
		}

		#[automatically_derived]
		impl #ref_impl_generics ::o_serializer::IntoAttribute<'__a> for &'__a #ident #type_generics #where_clause {
			#[inline]
			fn into_attribute(self) -> ::o_serializer::Attribute<'__a> {
				::o_serializer::Attribute::Object(self)
			}
		}
	})
}

/// Amend generics so every type param can be stored in an `Object`
/// and its values read as attributes.
fn get_generics(mut generics: Generics) -> Result<Generics> {
	let mut params = Vec::new();
	for param in &generics.params {
		match param {
			GenericParam::Type(ty) => params.push(ty.ident.clone()),
			GenericParam::Lifetime(lifetime) => {
				return Err(Error::new_spanned(
					lifetime,
					"`Object` cannot be derived for types with lifetime parameters",
				))
			}
			GenericParam::Const(_) => {}
		}
	}

	let where_clause = generics.make_where_clause();
	for param in params {
		where_clause.predicates.push(parse_quote!(#param: 'static));
		where_clause.predicates.push(parse_quote!(
			for<'__x> &'__x #param: ::o_serializer::IntoAttribute<'__x>
		));
	}

	Ok(generics)
}

struct Options {
	methods: Vec<Method>,
	read_for_serialization: bool,
}

struct Method {
	key: LitStr,
	call: Ident,
}

/// Parse container attributes `#[object(...)]`.
fn get_options(attrs: &[Attribute]) -> Result<Options> {
	let mut options = Options {
		methods: Vec::new(),
		read_for_serialization: false,
	};

	for meta in fields::object_metas(attrs)? {
		match meta {
			Meta::Path(path) if path.is_ident("read_for_serialization") => {
				if options.read_for_serialization {
					return Err(Error::new_spanned(
						path,
						"Can only have one `read_for_serialization` option",
					));
				}
				options.read_for_serialization = true;
			}
			Meta::NameValue(name_value) if name_value.path.is_ident("method") => {
				let key = match name_value.lit {
					Lit::Str(key) => key,
					lit => return Err(Error::new_spanned(lit, "`method` must be a string")),
				};
				let call = key.parse::<Ident>()?;
				options.methods.push(Method { key, call });
			}
			Meta::List(list) if list.path.is_ident("method") => {
				options.methods.push(get_method(list.nested, &list.path)?);
			}
			meta => return Err(Error::new_spanned(meta, "Unknown `object` option")),
		}
	}

	Ok(options)
}

/// Parse `method(key = "...", call = "...")`.
fn get_method<I, S>(nested: I, span: &S) -> Result<Method>
where
	I: IntoIterator<Item = NestedMeta>,
	S: quote::ToTokens,
{
	let mut key: Option<LitStr> = None;
	let mut call: Option<Ident> = None;

	for nested in nested {
		match nested {
			NestedMeta::Meta(Meta::NameValue(name_value)) => {
				let lit = match name_value.lit {
					Lit::Str(lit) => lit,
					lit => return Err(Error::new_spanned(lit, "Expected a string")),
				};
				if name_value.path.is_ident("key") && key.is_none() {
					key = Some(lit);
				} else if name_value.path.is_ident("call") && call.is_none() {
					call = Some(lit.parse()?);
				} else {
					return Err(Error::new_spanned(
						name_value.path,
						"Expected one `key` and one `call`",
					));
				}
			}
			nested => return Err(Error::new_spanned(nested, "Expected `key = \"...\"`")),
		}
	}

	match (key, call) {
		(Some(key), Some(call)) => Ok(Method { key, call }),
		(Some(key), None) => {
			let call = key.parse()?;
			Ok(Method { key, call })
		}
		(None, _) => Err(Error::new_spanned(span, "`method(...)` needs a `key`")),
	}
}

fn get_method_arms(methods: &[Method]) -> Vec<TokenStream> {
	methods
		.iter()
		.map(|Method { key, call }| {
			quote! {
				#key => ::core::option::Option::Some(
					::o_serializer::IntoAttribute::into_attribute(self.#call())
				),
			}
		})
		.collect()
}
