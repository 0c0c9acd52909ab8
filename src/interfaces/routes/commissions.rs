use actix_web::web;

use crate::handlers::{commissions, json_error::route_not_found};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/commissions")
            .route(web::post().to(commissions::submit_commission))
            .default_service(web::to(route_not_found))
    );
}
