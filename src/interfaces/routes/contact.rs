use actix_web::web;

use crate::handlers::{contact, json_error::route_not_found};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(contact::submit_contact))
            .default_service(web::to(route_not_found))
    );
}
