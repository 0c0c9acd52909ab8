use actix_web::web;

use crate::handlers::{artworks, json_error::route_not_found};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/artworks")
            .route(web::get().to(artworks::list_artworks))
            .route(web::post().to(artworks::create_artwork))
            .default_service(web::to(route_not_found))
    );
}
