use actix_web::web;

pub mod health;
pub mod scenarios;

/// Register every module's routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(scenarios::controllers::configure);
}
