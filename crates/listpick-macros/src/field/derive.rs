//! Implementation of the `#[derive(FieldAccessible)]` macro.
//!
//! This macro generates the `FieldAccessible` and `Selectable` impls and
//! field name constants for a struct with named fields.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_pick_attrs, PickType};

/// Main implementation of the FieldAccessible derive macro.
pub fn field_accessible_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "FieldAccessible can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "FieldAccessible can only be derived for structs",
            ))
        }
    };

    let mut descriptors: Vec<TokenStream> = Vec::new();
    let mut value_arms: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    let mut seen_constants: Vec<String> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let pick_attrs = parse_pick_attrs(&field.attrs)?;
        if pick_attrs.skip {
            continue;
        }

        // Fields of types we cannot infer are left out unless typed explicitly
        let pick_type = match pick_attrs.pick_type.or_else(|| PickType::infer(&field.ty)) {
            Some(t) => t,
            None => continue,
        };

        let query_name = pick_attrs
            .rename
            .unwrap_or_else(|| field_name.unraw().to_string());

        if seen.contains(&query_name) {
            return Err(Error::new(
                field.span(),
                format!("duplicate pick field name '{}'", query_name),
            ));
        }
        seen.push(query_name.clone());

        // Names differing only in case share a constant; the first one keeps it
        let constant = to_screaming_snake_case(&query_name);
        if !seen_constants.contains(&constant) {
            let const_name = format_ident!("{}", constant);
            field_constants.push(quote! {
                /// Field name constant for queries.
                pub const #const_name: &'static str = #query_name;
            });
            seen_constants.push(constant);
        }

        let variant = format_ident!("{}", pick_type.variant());
        descriptors.push(quote! {
            ::listpick::FieldDescriptor::new(#query_name, ::listpick::FieldType::#variant),
        });

        let value_expr = match pick_type {
            PickType::Opaque => quote! {
                ::listpick::Value::Opaque(::std::borrow::Cow::Owned(
                    ::std::string::ToString::to_string(&self.#field_name)
                ))
            },
            _ => quote! { ::listpick::AsValue::as_value(&self.#field_name) },
        };
        value_arms.push(quote! {
            #query_name => #value_expr,
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::listpick::FieldAccessible for #struct_name #ty_generics #where_clause {
            fn field_descriptors(&self) -> &'static [::listpick::FieldDescriptor] {
                const FIELDS: &[::listpick::FieldDescriptor] = &[
                    #(#descriptors)*
                ];
                FIELDS
            }

            fn field_value(&self, name: &str) -> ::listpick::Value<'_> {
                match name {
                    #(#value_arms)*
                    _ => ::listpick::Value::None,
                }
            }
        }

        impl #impl_generics ::listpick::Selectable for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> ::listpick::Shape<'_> {
                ::listpick::Shape::Record(self)
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
