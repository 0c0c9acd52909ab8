use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::newsletter::NewsletterRequest, errors::AppError, AppState};

/// `GET /api/newsletter?email=...`, kept for the older signup widget.
#[instrument(skip(state, query))]
pub async fn subscribe_via_query(
    state: web::Data<AppState>,
    query: web::Query<NewsletterRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.newsletter_handler.subscribe(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state, data))]
pub async fn subscribe(
    state: web::Data<AppState>,
    data: web::Json<NewsletterRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.newsletter_handler.subscribe(data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
