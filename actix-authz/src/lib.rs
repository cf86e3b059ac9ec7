//! # Actix Authz
//!
//! Role and ownership based authorization for Actix Web handlers.
//!
//! This crate provides a unified API combining:
//! - `actix-authz-core`: Identities, rules, the decision chain, audit and extractors
//! - `actix-authz-codegen`: The `#[authorize]` procedural macro
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! actix-web = "4"
//! actix-authz = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use actix_web::{get, web, HttpResponse, Responder};
//! use actix_authz::authorize;
//! use actix_authz::http::security::Principals;
//!
//! #[authorize(allowed_roles = ["customer", "admin", "support"], owner = user_id)]
//! #[get("/users/{user_id}")]
//! async fn find_user(principals: Principals, user_id: web::Path<String>) -> impl Responder {
//!     HttpResponse::Ok().body(format!("User {}", user_id))
//! }
//! ```
//!
//! ## Decision Chain
//!
//! 1. No principal attached: DENY
//! 2. No `allowed_roles` declared: ALLOW
//! 3. No role in common with `allowed_roles`: DENY
//! 4. Privileged role (`admin`, `support`): ALLOW
//! 5. Principal id equals the owner: ALLOW, otherwise DENY
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `macros` | Yes | The `#[authorize]` procedural macro |

// Re-export everything from actix-authz-core
pub use actix_authz_core::*;

// Re-export procedural macros when the "macros" feature is enabled
#[cfg(feature = "macros")]
pub use actix_authz_codegen::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use actix_authz_core::http::error::AuthError;
    pub use actix_authz_core::http::security::{
        AuthorizationManager, Authorizer, BasicAuthorizer, Decision, Identity,
        InvocationContext, Principals, RuleDescriptor, SecurityExt,
    };

    #[cfg(feature = "macros")]
    pub use actix_authz_codegen::authorize;
}
