//! Common helper functions for security macros.

use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;
use syn::{FnArg, ItemFn, Pat, Type};

/// Path of the facade crate that re-exports the core types.
pub fn core_crate_path() -> TokenStream2 {
    quote! { ::actix_authz }
}

/// Finds the name of the Principals parameter in the function signature.
pub fn find_principals_param(item_fn: &ItemFn) -> Option<Ident> {
    for arg in &item_fn.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            if let Type::Path(type_path) = pat_type.ty.as_ref() {
                let type_name = type_path.path.segments.last().map(|s| s.ident.to_string());

                if type_name.as_deref() == Some("Principals") {
                    if let Pat::Ident(pat_ident) = pat_type.pat.as_ref() {
                        return Some(pat_ident.ident.clone());
                    }
                }
            }
        }
    }
    None
}

/// Returns true if the function has a parameter bound to `name`.
pub fn has_param(item_fn: &ItemFn, name: &Ident) -> bool {
    item_fn.sig.inputs.iter().any(|arg| match arg {
        FnArg::Typed(pat_type) => match pat_type.pat.as_ref() {
            Pat::Ident(pat_ident) => &pat_ident.ident == name,
            _ => false,
        },
        FnArg::Receiver(_) => false,
    })
}

/// Generates a compile error for missing Principals parameter.
pub fn missing_principals_param_error(item_fn: &ItemFn, macro_name: &str) -> TokenStream {
    syn::Error::new_spanned(
        &item_fn.sig,
        format!(
            "{} requires a Principals parameter. Add `principals: Principals` to your function parameters.",
            macro_name
        ),
    )
    .to_compile_error()
    .into()
}
