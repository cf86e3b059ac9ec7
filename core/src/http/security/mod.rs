//! Security module providing role and ownership based authorization.
//!
//! # Spring Equivalent
//! `org.springframework.security.access` package
//!
//! # Module Structure
//!
//! - `identity` - Authenticated principal model (Identity)
//! - `rule` - Per-operation rule metadata (RuleDescriptor)
//! - `context` - Invocation context resolved by the framework
//! - `decision` - Decision, Gate, AccessRequest and Verdict
//! - `config` - Core trait (Authorizer)
//! - `authorizer` - Role and ownership decision chain (BasicAuthorizer)
//! - `audit` - Security audit logging around an authorizer
//! - `extractor` - Actix Web extractor (Principals)
//! - `manager` - Factory methods and the process-wide authorizer

// Re-exports for convenience
pub use authorizer::{AuthorizerSettings, BasicAuthorizer, DEFAULT_PRIVILEGED_ROLES};
pub use config::Authorizer;
pub use context::{InvocationContext, DEFAULT_ACTION};
pub use decision::{AccessRequest, Decision, Gate, Verdict};
pub use extractor::{Principals, SecurityExt};
pub use identity::Identity;
pub use manager::{global_authorizer, AuthorizationManager};
pub use rule::RuleDescriptor;
pub use audit::{
    AuditLogger, AuditingAuthorizer, InMemoryEventStore, LogHandler, SecurityEvent,
    SecurityEventHandler, SecurityEventSeverity, SecurityEventType,
};

// Internal modules (private implementation details)
mod config;
mod extractor;
mod identity;

// Public modules
pub mod audit;
pub mod authorizer;
pub mod context;
pub mod decision;
pub mod manager;
pub mod rule;
