//! Implementation of the `#[derive(Seekable)]` macro.
//!
//! Generates an implementation of the `Seekable` trait plus field name
//! constants usable in column, tab and filter descriptors.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_seek_attrs, SeekType};

/// Main implementation of the Seekable derive macro.
pub fn seekable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Seekable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Seekable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let seek_attrs = parse_seek_attrs(&field.attrs)?;
        if seek_attrs.skip {
            continue;
        }
        let seek_type = match seek_attrs.seek_type {
            Some(t) => t,
            None => continue,
        };

        let field_key = seek_attrs
            .rename
            .clone()
            .unwrap_or_else(|| field_name.to_string());
        let const_name = format_ident!("{}", to_screaming_snake_case(&field_key));

        field_constants.push(quote! {
            /// Field name constant for column, tab and filter descriptors.
            pub const #const_name: &'static str = #field_key;
        });

        // `value` is a `&FieldType` in every generated arm.
        let value_expr = value_tokens(seek_type);
        let arm = if seek_attrs.optional {
            quote! {
                #field_key => match &self.#field_name {
                    ::core::option::Option::Some(value) => #value_expr,
                    ::core::option::Option::None => ::tabledata_seeker::Value::None,
                },
            }
        } else {
            quote! {
                #field_key => {
                    let value = &self.#field_name;
                    #value_expr
                }
            }
        };
        field_matches.push(arm);
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::tabledata_seeker::Seekable for #struct_name #ty_generics #where_clause {
            fn seeker_field_value(&self, field: &str) -> ::tabledata_seeker::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::tabledata_seeker::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

fn value_tokens(seek_type: SeekType) -> TokenStream {
    match seek_type {
        SeekType::String => quote! {
            ::tabledata_seeker::Value::String(::core::convert::AsRef::<str>::as_ref(value))
        },
        SeekType::Number => quote! {
            ::tabledata_seeker::Value::Number(::tabledata_seeker::Number::from(*value))
        },
        SeekType::Timestamp => quote! {
            ::tabledata_seeker::Value::Timestamp(
                ::tabledata_seeker::SeekerTimestamp::seeker_timestamp(value)
            )
        },
        SeekType::Enum => quote! {
            ::tabledata_seeker::Value::Enum(
                ::tabledata_seeker::SeekerEnum::seeker_discriminant(value),
                ::tabledata_seeker::SeekerEnum::seeker_label(value),
            )
        },
        SeekType::Bool => quote! {
            ::tabledata_seeker::Value::Bool(*value)
        },
    }
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
        } else if c == '_' || c == '-' || c == '.' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
