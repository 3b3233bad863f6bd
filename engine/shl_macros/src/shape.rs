//! Shape derive macro implementation.
//!
//! Generates `::shl_core::Shape` implementations. The identity is computed by
//! the compiler from the type's module path and definition site, so two types
//! with the same name stay distinct, even when both are local to functions in
//! one module.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::parse_macro_input;

use crate::utils::validate_plain_type;

/// Main entry point for the Shape derive macro.
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match derive_shape_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_shape_impl(input: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    validate_plain_type(input, "Shape")?;

    let name = &input.ident;
    let name_str = name.to_string();

    // `line!` and `column!` resolve at the type name, not at the derive.
    let site = quote_spanned! {name.span()=>
        ::core::concat!(
            ::core::module_path!(),
            "::",
            ::core::file!(),
            ":",
            ::core::line!(),
            ":",
            ::core::column!(),
            "::",
            #name_str
        )
    };

    Ok(quote! {
        impl ::shl_core::Shape for #name {
            const ID: ::shl_core::ShapeId = ::shl_core::ShapeId::of(#site);
            const NAME: &'static str = #name_str;
        }
    })
}
