//! Security audit logging for authorization decisions.
//!
//! Authorizers are pure and never log. Wrap one in an
//! [`AuditingAuthorizer`] to emit a [`SecurityEvent`] per decision.
//!
//! # Spring Security Equivalent
//! `AuthorizationEventPublisher` publishing `AuthorizationGrantedEvent` /
//! `AuthorizationDeniedEvent`.
//!
//! # Example
//!
//! ```
//! use actix_authz_core::http::security::audit::{AuditLogger, AuditingAuthorizer, LogHandler};
//! use actix_authz_core::http::security::BasicAuthorizer;
//!
//! let authorizer = AuditingAuthorizer::new(
//!     BasicAuthorizer::new(),
//!     AuditLogger::new().add_handler(LogHandler::new()),
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::http::security::config::Authorizer;
use crate::http::security::context::InvocationContext;
use crate::http::security::decision::{Decision, Gate, Verdict};
use crate::http::security::identity::Identity;
use crate::http::security::rule::RuleDescriptor;

/// Security event types for audit logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityEventType {
    /// Access granted to resource
    AccessGranted,
    /// Access denied to resource
    AccessDenied,
}

impl fmt::Display for SecurityEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityEventType::AccessGranted => write!(f, "ACCESS_GRANTED"),
            SecurityEventType::AccessDenied => write!(f, "ACCESS_DENIED"),
        }
    }
}

/// Severity level of security events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SecurityEventSeverity {
    /// Informational (successful operations)
    #[default]
    Info,
    /// Error (failed operations)
    Error,
}

impl fmt::Display for SecurityEventSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityEventSeverity::Info => write!(f, "INFO"),
            SecurityEventSeverity::Error => write!(f, "ERROR"),
        }
    }
}

impl SecurityEventSeverity {
    fn log_level(&self) -> log::Level {
        match self {
            SecurityEventSeverity::Info => log::Level::Info,
            SecurityEventSeverity::Error => log::Level::Error,
        }
    }
}

impl SecurityEventType {
    /// Get the default severity for this event type.
    pub fn default_severity(&self) -> SecurityEventSeverity {
        match self {
            SecurityEventType::AccessGranted => SecurityEventSeverity::Info,
            SecurityEventType::AccessDenied => SecurityEventSeverity::Error,
        }
    }
}

/// A security audit event.
#[derive(Debug, Clone)]
pub struct SecurityEvent {
    /// Unique event ID
    pub id: String,
    /// Event timestamp (Unix epoch milliseconds)
    pub timestamp: u64,
    pub event_type: SecurityEventType,
    pub severity: SecurityEventSeverity,
    /// Acting identity id (if any)
    pub subject: Option<String>,
    /// Resource being invoked
    pub object: Option<String>,
    /// Informational action
    pub action: Option<String>,
    /// Gate that settled the decision
    pub gate: Option<Gate>,
    /// Additional details
    pub details: HashMap<String, String>,
}

impl SecurityEvent {
    /// Create a new security event.
    pub fn new(event_type: SecurityEventType) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        Self {
            id: generate_event_id(),
            timestamp: now,
            severity: event_type.default_severity(),
            event_type,
            subject: None,
            object: None,
            action: None,
            gate: None,
            details: HashMap::new(),
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn gate(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Add a detail.
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Builds the event describing an authorization verdict.
    ///
    /// Subject, object and action come from the access request when the
    /// chain computed one, otherwise from the identity and context.
    pub fn from_verdict(
        verdict: &Verdict,
        identity: Option<&Identity>,
        ctx: &InvocationContext,
    ) -> Self {
        let event_type = match verdict.decision {
            Decision::Allow => SecurityEventType::AccessGranted,
            Decision::Deny => SecurityEventType::AccessDenied,
        };
        let mut event = Self::new(event_type).gate(verdict.gate);

        match &verdict.request {
            Some(request) => {
                event = event
                    .subject(request.subject.as_str())
                    .object(request.object.as_str())
                    .action(request.action.as_str());
            }
            None => {
                if let Some(identity) = identity {
                    event = event.subject(identity.get_id());
                }
                event = event.object(ctx.get_resource());
            }
        }

        if let Some(owner) = ctx.get_owner() {
            event = event.detail("owner", owner);
        }
        event
    }

    /// Format the event as a log line.
    pub fn to_log_line(&self) -> String {
        let mut parts = vec![
            format!("[{}]", self.severity),
            format!("[{}]", self.event_type),
        ];

        if let Some(ref subject) = self.subject {
            parts.push(format!("subject={}", subject));
        }
        if let Some(ref object) = self.object {
            parts.push(format!("object={}", object));
        }
        if let Some(ref action) = self.action {
            parts.push(format!("action={}", action));
        }
        if let Some(gate) = self.gate {
            parts.push(format!("gate={}", gate));
        }
        let mut details: Vec<_> = self.details.iter().collect();
        details.sort();
        for (k, v) in details {
            parts.push(format!("{}={}", k, v));
        }

        parts.join(" ")
    }

    /// Format the event as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_log_line())
    }
}

impl serde::Serialize for SecurityEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SecurityEvent", 9)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.serialize_field("event_type", &self.event_type.to_string())?;
        state.serialize_field("severity", &self.severity.to_string())?;
        state.serialize_field("subject", &self.subject)?;
        state.serialize_field("object", &self.object)?;
        state.serialize_field("action", &self.action)?;
        state.serialize_field("gate", &self.gate)?;
        state.serialize_field("details", &self.details)?;
        state.end()
    }
}

/// Generate a unique event ID.
fn generate_event_id() -> String {
    use rand::Rng;
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    let random: u32 = rand::thread_rng().gen();
    format!("{:x}-{:08x}", timestamp, random)
}

// =============================================================================
// Handlers
// =============================================================================

/// Trait for handling security events.
pub trait SecurityEventHandler: Send + Sync {
    /// Handle a security event.
    fn handle(&self, event: &SecurityEvent);
}

/// Handler writing through the `log` facade.
///
/// The log level follows the event severity; filter with the `actix_authz::audit` target.
#[derive(Default)]
pub struct LogHandler;

impl LogHandler {
    pub fn new() -> Self {
        Self
    }
}

impl SecurityEventHandler for LogHandler {
    fn handle(&self, event: &SecurityEvent) {
        log::log!(
            target: "actix_authz::audit",
            event.severity.log_level(),
            "{}",
            event.to_log_line()
        );
    }
}

/// Handler that calls a closure.
pub struct ClosureHandler<F>
where
    F: Fn(&SecurityEvent) + Send + Sync,
{
    handler: F,
}

impl<F> ClosureHandler<F>
where
    F: Fn(&SecurityEvent) + Send + Sync,
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> SecurityEventHandler for ClosureHandler<F>
where
    F: Fn(&SecurityEvent) + Send + Sync,
{
    fn handle(&self, event: &SecurityEvent) {
        (self.handler)(event);
    }
}

/// Bounded in-memory event store for testing and debugging.
#[derive(Clone)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<Vec<SecurityEvent>>>,
    max_events: usize,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            max_events: 10000,
        }
    }

    /// Set maximum events to keep. Oldest events are dropped first.
    pub fn max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Get all stored events.
    pub fn get_events(&self) -> Vec<SecurityEvent> {
        match self.events.read() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Get events filtered by type.
    pub fn get_events_by_type(&self, event_type: &SecurityEventType) -> Vec<SecurityEvent> {
        self.get_events()
            .into_iter()
            .filter(|e| &e.event_type == event_type)
            .collect()
    }

    /// Get events for a specific subject.
    pub fn get_events_by_subject(&self, subject: &str) -> Vec<SecurityEvent> {
        self.get_events()
            .into_iter()
            .filter(|e| e.subject.as_deref() == Some(subject))
            .collect()
    }

    /// Clear all events.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.write() {
            events.clear();
        }
    }
}

impl SecurityEventHandler for InMemoryEventStore {
    fn handle(&self, event: &SecurityEvent) {
        if let Ok(mut events) = self.events.write() {
            events.push(event.clone());
            if events.len() > self.max_events {
                let overflow = events.len() - self.max_events;
                events.drain(..overflow);
            }
        }
    }
}

// =============================================================================
// Audit Logger
// =============================================================================

/// Dispatches security events to registered handlers.
#[derive(Clone)]
pub struct AuditLogger {
    handlers: Arc<Vec<Arc<dyn SecurityEventHandler>>>,
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLogger {
    /// Create a new audit logger with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Vec::new()),
        }
    }

    /// Create an audit logger writing through the `log` facade.
    pub fn with_log() -> Self {
        Self::new().add_handler(LogHandler::new())
    }

    /// Add an event handler.
    pub fn add_handler<H: SecurityEventHandler + 'static>(mut self, handler: H) -> Self {
        let handlers = Arc::make_mut(&mut self.handlers);
        handlers.push(Arc::new(handler));
        self
    }

    /// Add a closure as event handler.
    pub fn with_handler<F>(self, handler: F) -> Self
    where
        F: Fn(&SecurityEvent) + Send + Sync + 'static,
    {
        self.add_handler(ClosureHandler::new(handler))
    }

    /// Log a security event.
    pub fn log(&self, event: SecurityEvent) {
        for handler in self.handlers.iter() {
            handler.handle(&event);
        }
    }
}

// =============================================================================
// Auditing Decorator
// =============================================================================

/// Authorizer decorator that records every verdict.
///
/// The verdict of the inner authorizer is returned unchanged.
pub struct AuditingAuthorizer<A> {
    inner: A,
    logger: AuditLogger,
}

impl<A: Authorizer> AuditingAuthorizer<A> {
    pub fn new(inner: A, logger: AuditLogger) -> Self {
        AuditingAuthorizer { inner, logger }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Authorizer> Authorizer for AuditingAuthorizer<A> {
    fn evaluate(
        &self,
        identity: Option<&Identity>,
        rule: &RuleDescriptor,
        ctx: &InvocationContext,
    ) -> Verdict {
        let verdict = self.inner.evaluate(identity, rule, ctx);
        self.logger
            .log(SecurityEvent::from_verdict(&verdict, identity, ctx));
        verdict
    }
}
