use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact::ContactForm, errors::AppError, extractors::ValidJson, AppState};

#[instrument(skip(state, form))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: ValidJson<ContactForm>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler.submit_contact(form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
