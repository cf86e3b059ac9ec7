//! Factory methods and the process-wide authorizer used by `#[authorize]`.

use std::sync::OnceLock;

use crate::http::security::authorizer::BasicAuthorizer;
use crate::http::security::config::Authorizer;

static GLOBAL_AUTHORIZER: OnceLock<Box<dyn Authorizer>> = OnceLock::new();

pub struct AuthorizationManager {}

impl AuthorizationManager {
    /// Creates a role and ownership authorizer with default settings.
    pub fn basic() -> BasicAuthorizer {
        BasicAuthorizer::new()
    }

    /// Installs the authorizer consulted by `#[authorize]` handlers.
    ///
    /// Only the first call wins. Returns `false` when an authorizer was
    /// already installed (or the default was already used).
    pub fn install<A: Authorizer + 'static>(authorizer: A) -> bool {
        GLOBAL_AUTHORIZER.set(Box::new(authorizer)).is_ok()
    }
}

/// Returns the installed authorizer, or a default [`BasicAuthorizer`].
pub fn global_authorizer() -> &'static dyn Authorizer {
    &**GLOBAL_AUTHORIZER.get_or_init(|| Box::new(BasicAuthorizer::new()))
}
