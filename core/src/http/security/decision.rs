//! Decision values produced by an [`Authorizer`](super::Authorizer).

use std::fmt;

use serde::Serialize;

use crate::http::error::AuthError;

/// Binary outcome of an authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Deny)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "ALLOW"),
            Decision::Deny => write!(f, "DENY"),
        }
    }
}

/// The ordered checks of the decision chain.
///
/// Declaration order is evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    /// No principal was attached to the call.
    IdentityPresence,
    /// The rule declares no role restriction.
    OpenRule,
    /// None of the identity's roles is allowed.
    RoleMembership,
    /// The identity holds a role that skips the ownership check.
    PrivilegedRole,
    /// The identity does or does not own the target record.
    Ownership,
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gate::IdentityPresence => "identity_presence",
            Gate::OpenRule => "open_rule",
            Gate::RoleMembership => "role_membership",
            Gate::PrivilegedRole => "privileged_role",
            Gate::Ownership => "ownership",
        };
        f.write_str(name)
    }
}

/// Subject, object and action of a role-restricted call.
///
/// Informational only; no gate evaluates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessRequest {
    pub subject: String,
    pub object: String,
    pub action: String,
}

impl fmt::Display for AccessRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "subject={} object={} action={}",
            self.subject, self.object, self.action
        )
    }
}

/// A decision together with the gate that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub decision: Decision,
    pub gate: Gate,
    /// Present once the chain got past the open-rule gate.
    pub request: Option<AccessRequest>,
}

impl Verdict {
    pub(crate) fn allow(gate: Gate, request: Option<AccessRequest>) -> Self {
        Verdict {
            decision: Decision::Allow,
            gate,
            request,
        }
    }

    pub(crate) fn deny(gate: Gate, request: Option<AccessRequest>) -> Self {
        Verdict {
            decision: Decision::Deny,
            gate,
            request,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.decision.is_allowed()
    }

    /// Maps the verdict onto the HTTP edge.
    ///
    /// A denial at the identity gate means nobody is logged in
    /// (`Unauthorized`); every other denial is `Forbidden`.
    pub fn into_result(self) -> Result<(), AuthError> {
        match (self.decision, self.gate) {
            (Decision::Allow, _) => Ok(()),
            (Decision::Deny, Gate::IdentityPresence) => Err(AuthError::Unauthorized),
            (Decision::Deny, _) => Err(AuthError::Forbidden),
        }
    }
}
