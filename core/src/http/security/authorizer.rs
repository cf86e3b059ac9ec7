//! Role and ownership based authorization.
//!
//! # Spring Security Equivalent
//! A `@PreAuthorize("hasAnyRole(...) and (hasAnyRole('ADMIN','SUPPORT') or #id == principal.id)")`
//! expression, fixed into an ordered decision chain.
//!
//! # Decision Chain
//! 1. No principal: DENY
//! 2. Rule without `allowed_roles`: ALLOW
//! 3. No role in common with `allowed_roles`: DENY
//! 4. Privileged role (`admin`, `support` by default): ALLOW
//! 5. ALLOW only if the identity owns the target record

use serde::{Deserialize, Serialize};

use crate::http::error::ConfigError;
use crate::http::security::config::Authorizer;
use crate::http::security::context::InvocationContext;
use crate::http::security::decision::{AccessRequest, Gate, Verdict};
use crate::http::security::identity::Identity;
use crate::http::security::rule::RuleDescriptor;

/// Roles that skip the ownership check unless configured otherwise.
pub const DEFAULT_PRIVILEGED_ROLES: [&str; 2] = ["admin", "support"];

/// Deny-by-default role and ownership authorizer.
///
/// # Example
/// ```
/// use actix_authz_core::http::security::{
///     Authorizer, BasicAuthorizer, Decision, Identity, InvocationContext, RuleDescriptor,
/// };
///
/// let authorizer = BasicAuthorizer::new();
/// let alice = Identity::new("u1", "Alice").roles(&["user"]);
/// let rule = RuleDescriptor::new().allowed_roles(&["user"]);
///
/// let own = InvocationContext::new("users::find").owner("u1");
/// assert_eq!(authorizer.decide(Some(&alice), &rule, &own), Decision::Allow);
///
/// let other = InvocationContext::new("users::find").owner("u2");
/// assert_eq!(authorizer.decide(Some(&alice), &rule, &other), Decision::Deny);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicAuthorizer {
    privileged_roles: Vec<String>,
}

impl BasicAuthorizer {
    /// Creates an authorizer with the default privileged roles.
    pub fn new() -> Self {
        BasicAuthorizer {
            privileged_roles: DEFAULT_PRIVILEGED_ROLES
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }

    /// Replaces the roles that skip the ownership check.
    pub fn privileged_roles(mut self, roles: &[&str]) -> Self {
        self.privileged_roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn get_privileged_roles(&self) -> &[String] {
        &self.privileged_roles
    }

    /// Builds an authorizer from settings.
    pub fn with_settings(settings: AuthorizerSettings) -> Self {
        BasicAuthorizer {
            privileged_roles: settings.privileged_roles,
        }
    }

    /// Builds an authorizer from a JSON settings document.
    ///
    /// ```
    /// use actix_authz_core::http::security::BasicAuthorizer;
    ///
    /// let authorizer = BasicAuthorizer::from_json(r#"{"privileged_roles": ["root"]}"#).unwrap();
    /// assert_eq!(authorizer.get_privileged_roles(), &["root".to_string()]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: AuthorizerSettings = serde_json::from_str(json)?;
        Ok(Self::with_settings(settings))
    }

    fn is_privileged(&self, identity: &Identity) -> bool {
        identity.has_any_role(&self.privileged_roles)
    }
}

impl Default for BasicAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Authorizer for BasicAuthorizer {
    fn evaluate(
        &self,
        identity: Option<&Identity>,
        rule: &RuleDescriptor,
        ctx: &InvocationContext,
    ) -> Verdict {
        let identity = match identity {
            Some(identity) => identity,
            None => return Verdict::deny(Gate::IdentityPresence, None),
        };

        let allowed_roles = match rule.get_allowed_roles() {
            Some(roles) => roles,
            None => return Verdict::allow(Gate::OpenRule, None),
        };

        let request = AccessRequest {
            subject: identity.get_id().to_string(),
            object: rule.object_or(ctx.get_resource()).to_string(),
            action: rule.action_or(ctx.get_action_fallback()).to_string(),
        };

        if !identity.has_any_role(allowed_roles) {
            return Verdict::deny(Gate::RoleMembership, Some(request));
        }

        if self.is_privileged(identity) {
            return Verdict::allow(Gate::PrivilegedRole, Some(request));
        }

        match ctx.get_owner() {
            Some(owner) if owner == identity.get_id() => {
                Verdict::allow(Gate::Ownership, Some(request))
            }
            _ => Verdict::deny(Gate::Ownership, Some(request)),
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Serializable settings for [`BasicAuthorizer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorizerSettings {
    #[serde(default = "default_privileged_roles")]
    pub privileged_roles: Vec<String>,
}

fn default_privileged_roles() -> Vec<String> {
    DEFAULT_PRIVILEGED_ROLES
        .iter()
        .map(|r| r.to_string())
        .collect()
}

impl Default for AuthorizerSettings {
    fn default() -> Self {
        AuthorizerSettings {
            privileged_roles: default_privileged_roles(),
        }
    }
}
