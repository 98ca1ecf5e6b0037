use actix_web::web;

pub mod health;
pub mod play;
pub mod users;

/// Configure application routes for the production server and tests.
///
/// `main.rs` and the integration-test app builder both call this so the
/// two surfaces can never drift apart.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness probe: /healthz
    cfg.route("/healthz", web::get().to(health::healthz));

    // Registry routes: /users/**
    cfg.service(web::scope("/users").configure(users::configure_routes));

    // Round routes: /play/**
    cfg.service(web::scope("/play").configure(play::configure_routes));
}
