//! Constant derive macro implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse_macro_input;

use crate::utils::{find_unique_attr, validate_plain_type};

/// Main entry point for the Constant derive macro.
pub fn derive_constant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match derive_constant_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_constant_impl(input: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    validate_plain_type(input, "Constant")?;

    let name = &input.ident;

    // Parse #[constant(expr)]
    let Some(attr) = find_unique_attr(&input.attrs, "constant")? else {
        return Err(syn::Error::new_spanned(
            name,
            "Constant derive requires a #[constant(value)] attribute",
        ));
    };
    let value: syn::Expr = attr.parse_args()?;

    Ok(quote! {
        impl ::shl_core::Constant for #name {
            const VALUE: usize = #value;
        }
    })
}
