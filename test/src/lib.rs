//! Shopping demo for actix-authz.
//!
//! Shared by the demo binary and the integration tests.

pub mod handlers;
