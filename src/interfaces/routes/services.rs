use actix_web::web;

use crate::handlers::{json_error::route_not_found, services};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/services")
            .route(web::get().to(services::list_services))
            .default_service(web::to(route_not_found))
    );
}
