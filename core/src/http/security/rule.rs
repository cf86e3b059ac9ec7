//! Per-operation rule metadata.

use serde::{Deserialize, Serialize};

/// Access rule declared on a guarded operation.
///
/// Every field is optional and presence is significant:
/// - `allowed_roles: None` makes the operation open to any authenticated
///   identity, while `Some(vec![])` admits nobody.
/// - `scopes` only shapes the informational action of the access request.
/// - `resource` overrides the resource name resolved by the framework.
///
/// # Example
/// ```
/// use actix_authz_core::http::security::RuleDescriptor;
///
/// // Open to any authenticated caller
/// let open = RuleDescriptor::new();
/// assert!(open.is_open());
///
/// // Customers and staff, acting on orders
/// let rule = RuleDescriptor::new()
///     .allowed_roles(&["customer", "admin"])
///     .scopes(&["orders:read"])
///     .resource("orders");
/// assert!(!rule.is_open());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDescriptor {
    #[serde(default)]
    pub(crate) allowed_roles: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) scopes: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) resource: Option<String>,
}

impl RuleDescriptor {
    /// Creates an open rule: no role restriction, no scopes, no override.
    pub fn new() -> Self {
        RuleDescriptor::default()
    }

    /// Restricts the operation to identities holding any of these roles.
    ///
    /// Calling it with an empty slice still marks the restriction as present.
    pub fn allowed_roles(mut self, roles: &[&str]) -> Self {
        let allowed = self.allowed_roles.get_or_insert_with(Vec::new);
        for role in roles {
            if !allowed.iter().any(|r| r == role) {
                allowed.push((*role).to_string());
            }
        }
        self
    }

    /// Declares the scopes of the operation. Only the first one is used.
    pub fn scopes(mut self, scopes: &[&str]) -> Self {
        let declared = self.scopes.get_or_insert_with(Vec::new);
        declared.extend(scopes.iter().map(|s| (*s).to_string()));
        self
    }

    /// Overrides the resource name resolved by the framework.
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn get_allowed_roles(&self) -> Option<&[String]> {
        self.allowed_roles.as_deref()
    }

    pub fn get_scopes(&self) -> Option<&[String]> {
        self.scopes.as_deref()
    }

    pub fn get_resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Returns true when no role restriction is declared.
    pub fn is_open(&self) -> bool {
        self.allowed_roles.is_none()
    }

    /// First declared scope, or `fallback` when there is none.
    ///
    /// An empty first scope counts as missing.
    pub fn action_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.scopes.as_deref().and_then(|s| s.first()) {
            Some(scope) if !scope.is_empty() => scope.as_str(),
            _ => fallback,
        }
    }

    /// Resource override, or `resolved` when none is declared.
    pub fn object_or<'a>(&'a self, resolved: &'a str) -> &'a str {
        self.resource.as_deref().unwrap_or(resolved)
    }
}
