use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::validators::{closed_set, validate_member, validate_not_blank, validate_url};

closed_set! {
    ArtworkCategory {
        Portraits => "portraits",
        Tshirt => "tshirt",
        Paintings => "paintings",
        Sketches => "sketches",
        Digital => "digital",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: Uuid,
    pub title: String,
    pub category: ArtworkCategory,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct NewArtworkRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_artwork_category"))]
    pub category: String,

    #[validate(custom(function = "validate_url"))]
    pub image_url: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Gallery filter taken from `?category=`; `all` or nothing means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct ArtworkQuery {
    pub category: Option<String>,
}

pub fn validate_artwork_category(value: &str) -> Result<(), ValidationError> {
    validate_member::<ArtworkCategory>(value, ArtworkCategory::VALUES)
}

/// What a gallery query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ArtworkCategory),
    /// A category the gallery does not have; matches nothing.
    Unknown,
}

impl ArtworkQuery {
    pub fn category_filter(&self) -> CategoryFilter {
        match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(value) => value
                .parse::<ArtworkCategory>()
                .map_or(CategoryFilter::Unknown, CategoryFilter::Only),
        }
    }
}

impl TryFrom<NewArtworkRequest> for Artwork {
    type Error = ValidationErrors;

    fn try_from(value: NewArtworkRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let category = value.category.parse::<ArtworkCategory>().map_err(|_| {
            let mut errors = ValidationErrors::new();
            if let Err(e) = validate_artwork_category(&value.category) {
                errors.add("category", e);
            }
            errors
        })?;

        Ok(Artwork {
            id: Uuid::new_v4(),
            title: value.title.trim().to_string(),
            category,
            image_url: value.image_url,
            description: value.description.filter(|d| !d.trim().is_empty()),
            created_at: Utc::now(),
        })
    }
}
