//! Core authorization trait.
//!
//! # Spring Equivalent
//! `AccessDecisionManager` / `AuthorizationManager`

use crate::http::security::context::InvocationContext;
use crate::http::security::decision::{Decision, Verdict};
use crate::http::security::identity::Identity;
use crate::http::security::rule::RuleDescriptor;

/// Decides whether an identity may invoke a guarded operation.
///
/// Implementations must be pure: the verdict depends only on the
/// arguments and on immutable settings of the implementation.
pub trait Authorizer: Send + Sync {
    /// Runs the decision chain and reports the gate that settled it.
    ///
    /// # Arguments
    /// * `identity` - The acting principal, `None` when nobody is authenticated
    /// * `rule` - Metadata declared on the guarded operation
    /// * `ctx` - Resource and owner resolved by the framework
    fn evaluate(
        &self,
        identity: Option<&Identity>,
        rule: &RuleDescriptor,
        ctx: &InvocationContext,
    ) -> Verdict;

    /// Returns only the decision of [`evaluate`](Authorizer::evaluate).
    fn decide(
        &self,
        identity: Option<&Identity>,
        rule: &RuleDescriptor,
        ctx: &InvocationContext,
    ) -> Decision {
        self.evaluate(identity, rule, ctx).decision
    }

    /// Evaluates on behalf of the first principal of the call.
    fn evaluate_for(
        &self,
        principals: &[Identity],
        rule: &RuleDescriptor,
        ctx: &InvocationContext,
    ) -> Verdict {
        self.evaluate(principals.first(), rule, ctx)
    }

    /// Decides on behalf of the first principal of the call.
    fn decide_for(
        &self,
        principals: &[Identity],
        rule: &RuleDescriptor,
        ctx: &InvocationContext,
    ) -> Decision {
        self.evaluate_for(principals, rule, ctx).decision
    }
}
