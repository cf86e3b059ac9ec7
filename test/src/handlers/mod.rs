//! Route handlers organized by resource.

use actix_web::web;

pub mod orders;
pub mod users;

/// Registers every demo route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public::health)
        .service(catalog::catalog)
        .service(users::find_user)
        .service(users::update_user)
        .service(users::user_reports)
        .service(orders::list_orders)
        .service(orders::delete_order);
}
