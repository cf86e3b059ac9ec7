//! # Actix Authz Core
//!
//! Role and ownership based authorization decisions for Actix Web handlers.
//!
//! The heart of the crate is [`http::security::Authorizer`]: a pure decision
//! function that takes the acting identity, the rule metadata declared on the
//! guarded operation and the invocation context, and answers ALLOW or DENY.
//!
//! ## Modules
//!
//! - [`http::security`] - Identities, rules, the decider, audit and extractors
//! - [`http::error`] - Error types

pub mod http {
    pub mod error;
    pub mod security;
}
