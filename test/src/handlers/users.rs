//! User profile routes: owners, or staff holding a privileged role.

use actix_web::{get, patch, web, HttpResponse, Responder};
use serde::Deserialize;

use actix_authz::authorize;
use actix_authz::http::security::Principals;

#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
}

/// Reads a profile.
#[authorize(allowed_roles = ["customer", "admin", "support"], owner = user_id)]
#[get("/users/{user_id}")]
pub async fn find_user(principals: Principals, user_id: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "id": user_id.as_str(),
        "requested_by": principals.first().map(|p| p.get_id()),
    }))
}

/// Updates a profile. Support staff may read but not write.
#[authorize(allowed_roles = ["customer", "admin"], scopes = ["users:write"], owner = user_id)]
#[patch("/users/{user_id}")]
pub async fn update_user(
    principals: Principals,
    user_id: web::Path<String>,
    body: web::Json<UpdateProfile>,
) -> impl Responder {
    log::info!(
        "profile {} renamed to {:?} by {:?}",
        user_id,
        body.name,
        principals.first().map(|p| p.get_id())
    );
    HttpResponse::Ok().json(serde_json::json!({
        "id": user_id.as_str(),
        "name": body.name,
    }))
}

/// Manager-only reports about a user.
///
/// Privileged roles do not widen `allowed_roles`: an admin without the
/// manager role is refused here.
#[authorize(allowed_roles = "manager", resource = "reports", owner = user_id)]
#[get("/users/{user_id}/reports")]
pub async fn user_reports(principals: Principals, user_id: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().body(format!("Reports for {}", user_id))
}
