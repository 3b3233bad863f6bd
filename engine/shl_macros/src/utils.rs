//! Shared utilities for the derive macros.

use syn::{Attribute, Data, DeriveInput};

/// Reject unions and generic types, which cannot carry a single identity.
pub fn validate_plain_type(input: &DeriveInput, macro_name: &str) -> syn::Result<()> {
    if let Data::Union(_) = &input.data {
        return Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs and enums"),
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            format!("{macro_name} derive does not support generic parameters"),
        ));
    }

    Ok(())
}

/// Find a single attribute by name, rejecting duplicates.
pub fn find_unique_attr<'a>(
    attrs: &'a [Attribute],
    name: &str,
) -> syn::Result<Option<&'a Attribute>> {
    let mut matching = attrs.iter().filter(|attr| attr.path().is_ident(name));
    let first = matching.next();

    if let Some(duplicate) = matching.next() {
        return Err(syn::Error::new_spanned(
            duplicate,
            format!("duplicate #[{name}(...)] attribute"),
        ));
    }

    Ok(first)
}
