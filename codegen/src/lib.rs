//! Procedural macros for role and ownership based method security.
//!
//! # Spring Security Equivalents
//!
//! | Spring Security | actix-authz-codegen |
//! |-----------------|---------------------|
//! | `@PreAuthorize("isAuthenticated()")` | `#[authorize]` |
//! | `@PreAuthorize("hasAnyRole('A','B')")` + owner check | `#[authorize(allowed_roles = ["A", "B"], owner = id)]` |
//!
//! # Usage
//!
//! ```ignore
//! use actix_authz::authorize;
//! use actix_authz::http::security::Principals;
//! use actix_web::{get, web, HttpResponse, Responder};
//!
//! #[authorize(allowed_roles = ["customer", "admin", "support"], owner = user_id)]
//! #[get("/users/{user_id}")]
//! async fn find_user(principals: Principals, user_id: web::Path<String>) -> impl Responder {
//!     HttpResponse::Ok().body(format!("User {}", user_id))
//! }
//! ```

use proc_macro::TokenStream;

// Internal modules
mod authorize;
mod helpers;

/// Guards a handler with the installed authorizer.
///
/// # Arguments
///
/// All arguments are optional and given as `key = value`:
///
/// | Argument | Meaning |
/// |----------|---------|
/// | `allowed_roles = ["a", "b"]` | Any-of role restriction. Omit for an open rule. |
/// | `scopes = ["orders:read"]` | Declared scopes. The first one names the action. |
/// | `resource = "orders"` | Resource override. Defaults to `module_path::fn_name`. |
/// | `action = "read"` | Action used when no scope is declared. Defaults to `"execute"`. |
/// | `owner = param` | Handler parameter holding the id of the record acted on. |
///
/// The handler must take a `Principals` parameter. On DENY the handler body
/// is skipped and an `AuthError` is returned: `401 Unauthorized` when no
/// principal is attached, `403 Forbidden` otherwise.
///
/// # Usage
/// ```ignore
/// // Any authenticated caller
/// #[authorize]
/// #[get("/catalog")]
/// async fn catalog(principals: Principals) -> impl Responder {
///     HttpResponse::Ok().body("Catalog")
/// }
///
/// // Owners, or staff with a privileged role
/// #[authorize(allowed_roles = ["customer", "admin"], scopes = ["orders:read"], owner = user_id)]
/// #[get("/users/{user_id}/orders")]
/// async fn orders(principals: Principals, user_id: web::Path<String>) -> impl Responder {
///     HttpResponse::Ok().body("Orders")
/// }
/// ```
#[proc_macro_attribute]
pub fn authorize(attrs: TokenStream, input: TokenStream) -> TokenStream {
    authorize::authorize_impl(attrs, input)
}
