//! Identity model for authorization decisions.
//!
//! An [`Identity`] is produced by whatever authentication layer sits in
//! front of the application. This crate only reads it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated principal with its role set.
///
/// # Example
/// ```
/// use actix_authz_core::http::security::Identity;
///
/// let identity = Identity::new("u1", "Alice").roles(&["user", "admin"]);
///
/// assert_eq!(identity.get_id(), "u1");
/// assert!(identity.has_role("admin"));
/// assert!(!identity.has_role("Admin"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    roles: Vec<String>,
}

impl Identity {
    /// Creates an identity without roles.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Identity {
            id: id.into(),
            name: name.into(),
            roles: Vec::new(),
        }
    }

    /// Returns the stable identifier compared by the ownership gate.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the identity's roles.
    pub fn get_roles(&self) -> &[String] {
        &self.roles
    }

    /// Adds roles to the identity (builder pattern). Duplicates are skipped.
    pub fn roles(mut self, roles: &[&str]) -> Self {
        for role in roles {
            if !self.has_role(role) {
                self.roles.push((*role).to_string());
            }
        }
        self
    }

    /// Checks if the identity has a specific role. Case sensitive.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Checks if the identity has ANY of the specified roles (OR logic).
    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().any(|role| self.has_role(role.as_ref()))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Identity {{ id: {}, name: {}, roles: {:?} }}",
            self.id, self.name, self.roles
        )
    }
}
