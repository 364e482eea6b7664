use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
	ext::IdentExt, Attribute, Error, Field, Fields, Ident, Lit, LitStr, Meta, MetaList, NestedMeta,
	Result,
};

/// Collect the options inside all `#[object(...)]` attributes.
pub fn object_metas(attrs: &[Attribute]) -> Result<Vec<Meta>> {
	let mut metas = Vec::new();
	for attr in attrs {
		if !attr.path.is_ident("object") {
			continue;
		}

		match attr.parse_meta()? {
			Meta::List(MetaList { nested, .. }) => {
				for nested in nested {
					match nested {
						NestedMeta::Meta(meta) => metas.push(meta),
						NestedMeta::Lit(lit) => return Err(Error::new_spanned(lit, "Unexpected literal")),
					}
				}
			}
			meta => {
				return Err(Error::new_spanned(
					meta,
					"Expected a list of options e.g. `#[object(skip)]`",
				))
			}
		}
	}
	Ok(metas)
}

/// A field exposed as an attribute.
pub struct ExposedField {
	/// Attribute name
	pub key: LitStr,
	/// How to refer to the field in a pattern or `self.<member>` expression
	pub member: TokenStream,
	/// Binding used for the field when destructuring enum variants
	pub binding: Ident,
	/// Position of the field in its struct or variant
	pub position: usize,
}

/// Get exposed fields, in declaration order. Skipped fields are omitted.
pub fn exposed_fields(fields: &Fields) -> Result<Vec<ExposedField>> {
	let mut exposed = Vec::new();
	for (index, field) in fields.iter().enumerate() {
		let options = get_field_options(field)?;
		if options.skip {
			continue;
		}

		let (name, member) = match &field.ident {
			Some(ident) => (ident.unraw().to_string(), quote! {#ident}),
			None => {
				let index = syn::Index::from(index);
				(index.index.to_string(), quote! {#index})
			}
		};

		// Aliases are required in case of a field called `key`.
		// `Self::Foo {key: __val_key} =>` instead of just `Self::Foo {key} =>`.
		let binding = format_ident!("__val_{}", name);

		let key = match options.rename {
			Some(rename) => rename,
			None => LitStr::new(&name, field_span(field)),
		};

		exposed.push(ExposedField {
			key,
			member,
			binding,
			position: index,
		});
	}
	Ok(exposed)
}

/// Error if any two attribute keys are the same, whether from fields or methods.
pub fn check_unique_keys<'k, I>(keys: I) -> Result<()>
where I: IntoIterator<Item = &'k LitStr> {
	let mut seen = HashSet::new();
	for key in keys {
		if !seen.insert(key.value()) {
			return Err(Error::new_spanned(
				key,
				format!("Duplicate attribute key `{}`", key.value()),
			));
		}
	}
	Ok(())
}

struct FieldOptions {
	skip: bool,
	rename: Option<LitStr>,
}

fn get_field_options(field: &Field) -> Result<FieldOptions> {
	let mut options = FieldOptions {
		skip: false,
		rename: None,
	};

	for meta in object_metas(&field.attrs)? {
		match meta {
			Meta::Path(path) if path.is_ident("skip") => options.skip = true,
			Meta::NameValue(name_value) if name_value.path.is_ident("rename") => {
				if options.rename.is_some() {
					return Err(Error::new_spanned(
						name_value,
						"Cannot have more than 1 `rename` option on a field",
					));
				}
				match name_value.lit {
					Lit::Str(rename) => options.rename = Some(rename),
					lit => return Err(Error::new_spanned(lit, "`rename` must be a string")),
				}
			}
			meta => return Err(Error::new_spanned(meta, "Unknown `object` option on field")),
		}
	}

	if options.skip && options.rename.is_some() {
		return Err(Error::new_spanned(
			field,
			"Cannot use `skip` and `rename` options together",
		));
	}

	Ok(options)
}

fn field_span(field: &Field) -> proc_macro2::Span {
	match &field.ident {
		Some(ident) => ident.span(),
		None => syn::spanned::Spanned::span(&field.ty),
	}
}
