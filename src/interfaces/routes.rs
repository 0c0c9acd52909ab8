use actix_web::web;

use crate::handlers::{home::home, json_error::route_not_found, system::health_check};

mod artworks;
mod testimonials;
mod services;
mod blog;
mod contact;
mod commissions;
mod newsletter;
pub mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(artworks::config_routes)
            .configure(testimonials::config_routes)
            .configure(services::config_routes)
            .configure(blog::config_routes)
            .configure(contact::config_routes)
            .configure(commissions::config_routes)
            .configure(newsletter::config_routes)
            .default_service(web::to(route_not_found))
    );
}
