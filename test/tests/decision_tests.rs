//! Decision chain tests through the public API.
//!
//! Mirrors the shopping scenarios served by the demo application.

use actix_authz::http::security::{
    Authorizer, BasicAuthorizer, Decision, Gate, Identity, InvocationContext, RuleDescriptor,
};

fn customer(id: &str) -> Identity {
    Identity::new(id, id).roles(&["customer"])
}

fn profile_rule() -> RuleDescriptor {
    RuleDescriptor::new().allowed_roles(&["customer", "admin", "support"])
}

fn profile_of(owner: &str) -> InvocationContext {
    InvocationContext::new("UsersService::find_user").owner(owner)
}

#[test]
fn test_customer_reads_own_profile() {
    let authorizer = BasicAuthorizer::new();
    let verdict = authorizer.evaluate(Some(&customer("u1")), &profile_rule(), &profile_of("u1"));

    assert_eq!(verdict.decision, Decision::Allow);
    assert_eq!(verdict.gate, Gate::Ownership);
}

#[test]
fn test_customer_reads_foreign_profile() {
    let authorizer = BasicAuthorizer::new();
    let verdict = authorizer.evaluate(Some(&customer("u1")), &profile_rule(), &profile_of("u2"));

    assert_eq!(verdict.decision, Decision::Deny);
    assert_eq!(verdict.gate, Gate::Ownership);
}

#[test]
fn test_support_reads_any_profile() {
    let authorizer = BasicAuthorizer::new();
    let support = Identity::new("s1", "Sam").roles(&["support"]);
    let verdict = authorizer.evaluate(Some(&support), &profile_rule(), &profile_of("u2"));

    assert_eq!(verdict.decision, Decision::Allow);
    assert_eq!(verdict.gate, Gate::PrivilegedRole);
}

#[test]
fn test_admin_outside_allowed_roles() {
    let authorizer = BasicAuthorizer::new();
    let admin = Identity::new("a1", "Ada").roles(&["admin"]);
    let rule = RuleDescriptor::new().allowed_roles(&["manager"]);

    let verdict = authorizer.evaluate(Some(&admin), &rule, &profile_of("u2"));
    assert_eq!(verdict.decision, Decision::Deny);
    assert_eq!(verdict.gate, Gate::RoleMembership);

    let rule = RuleDescriptor::new().allowed_roles(&["manager", "admin"]);
    let verdict = authorizer.evaluate(Some(&admin), &rule, &profile_of("u2"));
    assert_eq!(verdict.decision, Decision::Allow);
    assert_eq!(verdict.gate, Gate::PrivilegedRole);
}

#[test]
fn test_open_rule_allows_any_identity() {
    let authorizer = BasicAuthorizer::new();
    let nobody = Identity::new("n1", "No Roles");
    let verdict = authorizer.evaluate(
        Some(&nobody),
        &RuleDescriptor::new(),
        &InvocationContext::new("CatalogService::list"),
    );

    assert_eq!(verdict.decision, Decision::Allow);
    assert_eq!(verdict.gate, Gate::OpenRule);
    assert!(verdict.request.is_none());
}

#[test]
fn test_missing_identity_denied() {
    let authorizer = BasicAuthorizer::new();

    for rule in [RuleDescriptor::new(), profile_rule()] {
        let verdict = authorizer.evaluate(None, &rule, &profile_of("u1"));
        assert_eq!(verdict.decision, Decision::Deny);
        assert_eq!(verdict.gate, Gate::IdentityPresence);
    }
}

#[test]
fn test_access_request_for_scoped_rule() {
    let authorizer = BasicAuthorizer::new();
    let rule = RuleDescriptor::new()
        .allowed_roles(&["customer"])
        .scopes(&["orders:read", "orders:list"])
        .resource("orders");
    let ctx = InvocationContext::new("OrdersService::list").owner("u1");

    let verdict = authorizer.evaluate(Some(&customer("u1")), &rule, &ctx);
    let request = verdict.request.expect("role gate passed");

    assert_eq!(request.subject, "u1");
    assert_eq!(request.object, "orders");
    assert_eq!(request.action, "orders:read");
}

#[test]
fn test_decide_for_uses_first_principal() {
    let authorizer = BasicAuthorizer::new();
    let principals = vec![customer("u1"), customer("u2")];

    assert_eq!(
        authorizer.decide_for(&principals, &profile_rule(), &profile_of("u1")),
        Decision::Allow
    );
    assert_eq!(
        authorizer.decide_for(&principals, &profile_rule(), &profile_of("u2")),
        Decision::Deny
    );
    assert_eq!(
        authorizer.decide_for(&[], &profile_rule(), &profile_of("u1")),
        Decision::Deny
    );
}

#[test]
fn test_configured_privileged_roles() {
    let authorizer =
        BasicAuthorizer::from_json(r#"{ "privileged_roles": ["auditor"] }"#).expect("valid settings");
    let auditor = Identity::new("x1", "Aud").roles(&["auditor"]);
    let support = Identity::new("s1", "Sam").roles(&["support"]);
    let rule = RuleDescriptor::new().allowed_roles(&["auditor", "support"]);

    assert!(authorizer.decide(Some(&auditor), &rule, &profile_of("u1")).is_allowed());
    assert!(authorizer.decide(Some(&support), &rule, &profile_of("u1")).is_denied());
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let authorizer = BasicAuthorizer::new();
    let identity = customer("u1");
    let rule = profile_rule();
    let ctx = profile_of("u2");

    let first = authorizer.evaluate(Some(&identity), &rule, &ctx);
    for _ in 0..10 {
        assert_eq!(authorizer.evaluate(Some(&identity), &rule, &ctx), first);
    }
}
