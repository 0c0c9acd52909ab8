use actix_web::web;

use crate::handlers::{json_error::route_not_found, newsletter};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/newsletter")
            .route(web::get().to(newsletter::subscribe_via_query))
            .route(web::post().to(newsletter::subscribe))
            .default_service(web::to(route_not_found))
    );
}
