//! Actix Authz Demo Application
//!
//! A small shopping API guarded by `#[authorize]`.

use actix_web::dev::Service;
use actix_web::{App, HttpServer};

use actix_authz::http::security::audit::{AuditLogger, AuditingAuthorizer};
use actix_authz::http::security::{AuthorizationManager, BasicAuthorizer};
use actix_authz_test::{demo_auth, handlers};

/// Environment variable pointing at a JSON authorizer settings file.
const SETTINGS_ENV: &str = "AUTHZ_SETTINGS";

/// Builds the authorizer, optionally from a settings file.
///
/// ```json
/// { "privileged_roles": ["admin", "support"] }
/// ```
fn authorizer() -> std::io::Result<BasicAuthorizer> {
    match std::env::var(SETTINGS_ENV) {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)?;
            let authorizer = BasicAuthorizer::from_json(&json)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            log::info!("authorizer settings loaded from {}", path);
            Ok(authorizer)
        }
        Err(_) => Ok(AuthorizationManager::basic()),
    }
}

fn print_startup_info() {
    println!("=== Actix Authz Demo ===");
    println!();
    println!("Server: http://127.0.0.1:8080");
    println!();
    println!("Principals are read from the {} header:", demo_auth::DEMO_USER_HEADER);
    println!("  <id>:<role>,<role>   e.g. u1:customer");
    println!();
    println!("Routes:");
    println!("  GET    /health                - public");
    println!("  GET    /catalog               - any principal");
    println!("  GET    /users/{{id}}            - customer (owner), admin, support");
    println!("  PATCH  /users/{{id}}            - customer (owner), admin");
    println!("  GET    /users/{{id}}/orders     - customer (owner), admin, support");
    println!("  GET    /users/{{id}}/reports    - manager (owner)");
    println!("  DELETE /orders/{{id}}           - admin");
    println!();
    println!("Examples:");
    println!("  curl -H 'X-Demo-User: u1:customer' http://127.0.0.1:8080/users/u1          # 200");
    println!("  curl -H 'X-Demo-User: u1:customer' http://127.0.0.1:8080/users/u2          # 403");
    println!("  curl -H 'X-Demo-User: s1:support'  http://127.0.0.1:8080/users/u2/orders   # 200");
    println!("  curl http://127.0.0.1:8080/catalog                                         # 401");
    println!();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let authorizer = AuditingAuthorizer::new(authorizer()?, AuditLogger::with_log());
    AuthorizationManager::install(authorizer);

    print_startup_info();

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                demo_auth::attach_identity(&req);
                srv.call(req)
            })
            .configure(handlers::configure)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
