use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    extractors::ValidJson,
    entities::{testimonial::NewTestimonialRequest, ListResponse},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_testimonials(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let testimonials = state.testimonial_handler.list_published().await?;

    Ok(HttpResponse::Ok().json(ListResponse::new(testimonials)))
}

#[instrument(skip(state, data))]
pub async fn submit_testimonial(
    state: web::Data<AppState>,
    data: ValidJson<NewTestimonialRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .testimonial_handler
        .submit_testimonial(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}
