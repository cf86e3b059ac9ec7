//! Invocation context handed to the authorizer.
//!
//! The framework resolves everything here before the decision runs. The
//! authorizer never looks at request state on its own.

use serde::{Deserialize, Serialize};

/// Action used when the rule declares no scope.
pub const DEFAULT_ACTION: &str = "execute";

/// What is being invoked, and on whose record.
///
/// # Example
/// ```
/// use actix_authz_core::http::security::InvocationContext;
///
/// let ctx = InvocationContext::new("orders::get_order").owner("u1");
///
/// assert_eq!(ctx.get_resource(), "orders::get_order");
/// assert_eq!(ctx.get_action_fallback(), "execute");
/// assert_eq!(ctx.get_owner(), Some("u1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationContext {
    resource: String,
    #[serde(default = "default_action")]
    action_fallback: String,
    #[serde(default)]
    owner: Option<String>,
}

fn default_action() -> String {
    DEFAULT_ACTION.to_string()
}

impl InvocationContext {
    /// Creates a context for the resolved resource, without owner.
    pub fn new(resource: impl Into<String>) -> Self {
        InvocationContext {
            resource: resource.into(),
            action_fallback: default_action(),
            owner: None,
        }
    }

    /// Sets the identifier of the entity being acted on.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Replaces the default `"execute"` action.
    pub fn action_fallback(mut self, action: impl Into<String>) -> Self {
        self.action_fallback = action.into();
        self
    }

    pub fn get_resource(&self) -> &str {
        &self.resource
    }

    pub fn get_action_fallback(&self) -> &str {
        &self.action_fallback
    }

    pub fn get_owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}
