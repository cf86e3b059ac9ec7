//! Error types for the HTTP edge and for configuration loading.
//!
//! The decider itself never fails; these types only exist where a DENY
//! has to become a response or where settings are parsed.

mod auth_error;
mod config_error;

pub use auth_error::AuthError;
pub use config_error::ConfigError;
