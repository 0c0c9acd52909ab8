use actix_web::web;

use crate::handlers::{blog_posts, json_error::route_not_found};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/blog")
            .route(web::get().to(blog_posts::list_blog_posts))
            .route(web::post().to(blog_posts::create_blog_post))
            .default_service(web::to(route_not_found))
    );
}
