use actix_multipart::{
    form::{text::Text, MultipartForm},
    MultipartError,
};
use actix_web::{http::StatusCode, web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::commission::{CommissionSubmission, CommissionUpload},
    errors::{AppError, FieldError},
    utils::upload::describe_upload,
    AppState,
};

fn text(field: Option<Text<String>>) -> Option<String> {
    field.map(Text::into_inner)
}

/// Temp files are dropped (and removed from disk) when `upload` goes out of
/// scope; only their descriptors are kept.
impl From<CommissionUpload> for CommissionSubmission {
    fn from(upload: CommissionUpload) -> Self {
        let reference_images = upload.reference_images.iter().map(describe_upload).collect();

        CommissionSubmission {
            name: text(upload.name),
            email: text(upload.email),
            phone: text(upload.phone),
            service_type: text(upload.service_type),
            budget: text(upload.budget),
            deadline: text(upload.deadline),
            size: text(upload.size),
            description: text(upload.description),
            reference_urls: text(upload.reference_urls),
            reference_images,
        }
    }
}

/// Content-type failures never reach the multipart error handler and would
/// otherwise come back as plain text.
fn reject_non_multipart(err: actix_web::Error) -> actix_web::Error {
    let wrong_content_type = matches!(
        err.as_error::<MultipartError>(),
        Some(
            MultipartError::ContentTypeMissing
                | MultipartError::ContentTypeParse
                | MultipartError::ContentTypeIncompatible
                | MultipartError::BoundaryMissing
        )
    ) || err.as_response_error().status_code() == StatusCode::UNSUPPORTED_MEDIA_TYPE;

    if !wrong_content_type {
        return err;
    }
    AppError::InvalidSubmission(vec![FieldError::new("body", "Expected a multipart/form-data body")]).into()
}

#[instrument(skip(state, form))]
pub async fn submit_commission(
    state: web::Data<AppState>,
    form: Result<MultipartForm<CommissionUpload>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let form = form.map_err(reject_non_multipart)?;
    let submission = CommissionSubmission::from(form.into_inner());
    let response = state.commission_handler.submit_commission(submission).await?;

    Ok(HttpResponse::Created().json(response))
}
