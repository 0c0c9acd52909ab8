use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::validators::{closed_set, new_validation_error, non_blank, validate_member};

const MIN_NAME_LENGTH: u64 = 2;
const MAX_NAME_LENGTH: u64 = 100;
const MIN_MESSAGE_LENGTH: u64 = 10;
const MAX_MESSAGE_LENGTH: u64 = 1000;

closed_set! {
    TestimonialStatus {
        Pending => "pending",
        Approved => "approved",
    }
}

closed_set! {
    ArtworkType {
        Portrait => "portrait",
        Tshirt => "tshirt",
        Painting => "painting",
        Sketch => "sketch",
        Digital => "digital",
        Other => "other",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_type: Option<ArtworkType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub would_recommend: Option<bool>,
    pub status: TestimonialStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTestimonialRequest {
    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = MIN_MESSAGE_LENGTH, max = MAX_MESSAGE_LENGTH, message = "Message must be between 10 and 1000 characters"))]
    pub message: String,

    /// Kept as a float so `3.5` reaches validation instead of failing to parse.
    #[validate(custom(function = "validate_rating"))]
    pub rating: f64,

    #[validate(custom(function = "validate_artwork_type"))]
    pub artwork_type: Option<String>,

    pub would_recommend: Option<bool>,
}

pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if rating.fract() != 0.0 || !(1.0..=5.0).contains(&rating) {
        return Err(new_validation_error("invalid_rating", "Rating must be a whole number between 1 and 5"));
    }
    Ok(())
}

pub fn validate_artwork_type(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_member::<ArtworkType>(value.trim(), ArtworkType::VALUES)
}

impl TryFrom<NewTestimonialRequest> for Testimonial {
    type Error = ValidationErrors;

    fn try_from(mut value: NewTestimonialRequest) -> Result<Self, Self::Error> {
        // lengths apply to what gets stored
        value.name = value.name.trim().to_string();
        value.email = value.email.trim().to_lowercase();
        value.message = value.message.trim().to_string();
        value.validate()?;

        // validated above; blank means not chosen
        let artwork_type = non_blank(value.artwork_type)
            .and_then(|t| t.parse::<ArtworkType>().ok());

        Ok(Testimonial {
            id: Uuid::new_v4(),
            name: value.name,
            email: value.email,
            message: value.message,
            rating: value.rating as u8,
            artwork_type,
            would_recommend: value.would_recommend,
            status: TestimonialStatus::Pending,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: Testimonial,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}
