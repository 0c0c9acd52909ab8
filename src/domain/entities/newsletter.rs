use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{entities::validators::is_valid_email, errors::FieldError};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterResponse {
    pub success: bool,
    pub message: String,
    pub data: NewsletterSubscription,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

impl TryFrom<NewsletterRequest> for NewsletterSubscription {
    type Error = FieldError;

    fn try_from(request: NewsletterRequest) -> Result<Self, Self::Error> {
        let email = request.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(FieldError::new("email", "Please enter a valid email address"));
        }

        Ok(NewsletterSubscription {
            id: Uuid::new_v4(),
            email,
            subscribed_at: Utc::now(),
            is_active: true,
        })
    }
}
