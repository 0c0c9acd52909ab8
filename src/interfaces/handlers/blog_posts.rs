use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    extractors::ValidJson,
    entities::{blog_post::NewBlogPostRequest, CreatedResponse, ListResponse},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_blog_post(
    state: web::Data<AppState>,
    data: ValidJson<NewBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.create_blog_post(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new(post)))
}

#[instrument(skip(state))]
pub async fn list_blog_posts(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let posts = state.blog_handler.list_blog_posts().await?;

    Ok(HttpResponse::Ok().json(ListResponse::new(posts)))
}
