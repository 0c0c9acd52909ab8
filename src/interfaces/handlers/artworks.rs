use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    extractors::ValidJson,
    entities::{
        artwork::{ArtworkQuery, NewArtworkRequest},
        CreatedResponse, ListResponse,
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, query))]
pub async fn list_artworks(
    state: web::Data<AppState>,
    query: web::Query<ArtworkQuery>,
) -> Result<impl Responder, AppError> {
    let artworks = state.artwork_handler.list_artworks(&query).await?;

    Ok(HttpResponse::Ok().json(ListResponse::new(artworks)))
}

#[instrument(skip(state, data))]
pub async fn create_artwork(
    state: web::Data<AppState>,
    data: ValidJson<NewArtworkRequest>,
) -> Result<impl Responder, AppError> {
    let artwork = state.artwork_handler.create_artwork(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new(artwork)))
}
