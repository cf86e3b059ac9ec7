//! The `#[authorize]` macro for role and ownership based method security.
//!
//! # Spring Security Equivalent
//! `@PreAuthorize("hasAnyRole(...) and (... or #id == principal.id)")`

use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, ExprLit, ItemFn, Lit, ReturnType, Token};

use crate::helpers::{
    core_crate_path, find_principals_param, has_param, missing_principals_param_error,
};

/// Parsed arguments for #[authorize(...)]
#[derive(Default)]
pub struct AuthorizeArgs {
    /// allowed_roles = ["customer", "admin"]
    allowed_roles: Option<Vec<String>>,
    /// scopes = ["orders:read"]
    scopes: Option<Vec<String>>,
    /// resource = "orders"
    resource: Option<String>,
    /// action = "read"
    action: Option<String>,
    /// owner = user_id
    owner: Option<Ident>,
}

impl Parse for AuthorizeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = AuthorizeArgs::default();

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "allowed_roles" => {
                    let roles = parse_string_or_array(input)?;
                    set_once(&mut args.allowed_roles, roles, &key)?;
                }
                "scopes" => {
                    let scopes = parse_string_or_array(input)?;
                    set_once(&mut args.scopes, scopes, &key)?;
                }
                "resource" => {
                    let lit: syn::LitStr = input.parse()?;
                    set_once(&mut args.resource, lit.value(), &key)?;
                }
                "action" => {
                    let lit: syn::LitStr = input.parse()?;
                    set_once(&mut args.action, lit.value(), &key)?;
                }
                "owner" => {
                    let param: Ident = input.parse()?;
                    set_once(&mut args.owner, param, &key)?;
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        key,
                        "expected one of: allowed_roles, scopes, resource, action, owner",
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(
            key,
            format!("duplicate `{}` argument", key),
        ));
    }
    *slot = Some(value);
    Ok(())
}

/// Parses either a single string "value" or an array ["a", "b"]
fn parse_string_or_array(input: ParseStream) -> syn::Result<Vec<String>> {
    if input.peek(syn::token::Bracket) {
        let content;
        syn::bracketed!(content in input);
        let args: Punctuated<Expr, Token![,]> = Punctuated::parse_terminated(&content)?;

        let mut values = Vec::new();
        for arg in args {
            if let Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) = arg
            {
                values.push(lit_str.value());
            } else {
                return Err(syn::Error::new_spanned(arg, "expected string literal"));
            }
        }
        Ok(values)
    } else {
        let lit: syn::LitStr = input.parse()?;
        Ok(vec![lit.value()])
    }
}

pub fn authorize_impl(attrs: TokenStream, input: TokenStream) -> TokenStream {
    let item_fn = parse_macro_input!(input as ItemFn);
    let args = parse_macro_input!(attrs as AuthorizeArgs);

    let principals_param = match find_principals_param(&item_fn) {
        Some(param) => param,
        None => return missing_principals_param_error(&item_fn, "authorize"),
    };

    if let Some(owner) = &args.owner {
        if !has_param(&item_fn, owner) {
            return syn::Error::new_spanned(
                owner,
                format!("`owner = {}` does not name a parameter of this function", owner),
            )
            .to_compile_error()
            .into();
        }
    }

    let attrs = &item_fn.attrs;
    let vis = &item_fn.vis;
    let sig = &item_fn.sig;
    let block = &item_fn.block;
    let fn_name = &sig.ident;
    let inputs = &sig.inputs;
    let asyncness = &sig.asyncness;
    let generics = &sig.generics;
    let where_clause = &sig.generics.where_clause;

    let original_return = match &sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) => quote! { #ty },
    };

    let core_path = core_crate_path();

    let rule_roles = args
        .allowed_roles
        .map(|roles| quote! { .allowed_roles(&[#(#roles),*]) });
    let rule_scopes = args
        .scopes
        .map(|scopes| quote! { .scopes(&[#(#scopes),*]) });
    let rule_resource = args
        .resource
        .map(|resource| quote! { .resource(#resource) });
    let ctx_action = args
        .action
        .map(|action| quote! { .action_fallback(#action) });
    let ctx_owner = args
        .owner
        .map(|owner| quote! { .owner(::std::string::ToString::to_string(&#owner)) });

    let expanded = quote! {
        #(#attrs)*
        #vis #asyncness fn #fn_name #generics(#inputs) -> ::std::result::Result<#original_return, #core_path::http::error::AuthError> #where_clause {
            {
                let __rule = #core_path::http::security::RuleDescriptor::new()
                    #rule_roles
                    #rule_scopes
                    #rule_resource;
                let __ctx = #core_path::http::security::InvocationContext::new(
                    ::std::concat!(::std::module_path!(), "::", ::std::stringify!(#fn_name))
                )
                    #ctx_action
                    #ctx_owner;
                #core_path::http::security::Authorizer::evaluate_for(
                    #core_path::http::security::global_authorizer(),
                    &#principals_param,
                    &__rule,
                    &__ctx,
                )
                .into_result()?;
            }

            ::std::result::Result::Ok(#block)
        }
    };

    expanded.into()
}
