use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body whose shape errors are reported per field.
///
/// Malformed JSON is still rejected by the `JsonConfig` error handler. A
/// well-formed body with a wrongly typed field, such as `"rating": "5"`,
/// becomes a 422 naming that field.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T> ValidJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<serde_json::Value>::from_request(req, payload);

        Box::pin(async move {
            let web::Json(value) = body.await?;
            serde_path_to_error::deserialize(value)
                .map(ValidJson)
                .map_err(|err| AppError::from(err).into())
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest, ResponseError};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Review {
        rating: f64,
        #[serde(default)]
        would_recommend: Option<bool>,
    }

    async fn extract(body: serde_json::Value) -> Result<ValidJson<Review>, actix_web::Error> {
        let (req, mut payload) = TestRequest::post().set_json(body).to_http_parts();
        ValidJson::<Review>::from_request(&req, &mut payload).await
    }

    fn details(err: &actix_web::Error) -> Vec<(String, String)> {
        match err.as_error::<AppError>() {
            Some(AppError::ValidationError(fields)) => {
                fields.iter().map(|f| (f.field.clone(), f.message.clone())).collect()
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn well_typed_body_is_extracted() {
        let review = extract(serde_json::json!({ "rating": 4, "wouldRecommend": true }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(review.rating, 4.0);
        assert_eq!(review.would_recommend, Some(true));
    }

    #[actix_web::test]
    async fn wrongly_typed_field_is_named() {
        let err = extract(serde_json::json!({ "rating": "5" })).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let fields = details(&err);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "rating");
        assert!(fields[0].1.contains("invalid type"));
    }

    #[actix_web::test]
    async fn camel_case_field_is_reported_by_its_wire_name() {
        let err = extract(serde_json::json!({ "rating": 5, "wouldRecommend": "yes" }))
            .await
            .unwrap_err();
        assert_eq!(details(&err)[0].0, "wouldRecommend");
    }

    #[actix_web::test]
    async fn non_object_body_is_reported_against_the_body() {
        let err = extract(serde_json::json!("five stars")).await.unwrap_err();
        assert_eq!(details(&err)[0].0, "body");
    }
}
