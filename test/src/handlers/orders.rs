//! Order routes.

use actix_web::{delete, get, web, HttpResponse, Responder};

use actix_authz::authorize;
use actix_authz::http::security::Principals;

/// Lists the orders of a user.
#[authorize(
    allowed_roles = ["customer", "admin", "support"],
    scopes = ["orders:read"],
    resource = "orders",
    owner = user_id
)]
#[get("/users/{user_id}/orders")]
pub async fn list_orders(principals: Principals, user_id: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "owner": user_id.as_str(),
        "orders": [],
    }))
}

/// Deletes an order. Only admins pass the role gate, and they skip the
/// ownership check; there is no owner to compare against.
#[authorize(allowed_roles = ["admin"], action = "delete", resource = "orders")]
#[delete("/orders/{order_id}")]
pub async fn delete_order(principals: Principals, order_id: web::Path<u64>) -> impl Responder {
    HttpResponse::Ok().body(format!("Order {} deleted", order_id))
}
