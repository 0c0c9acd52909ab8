use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    entities::validators::{closed_set, new_validation_error, validate_image_ref, validate_member, validate_not_blank},
    utils::sanitize::sanitize_html,
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 120;
const MAX_EXCERPT_LENGTH: u64 = 300;
const MAX_AUTHOR_LENGTH: u64 = 80;
const MAX_READ_TIME_LENGTH: u64 = 30;
const MAX_TAGS: usize = 10;
const MAX_TAG_LENGTH: usize = 30;
const MIN_SLUG_LENGTH: usize = 3;

closed_set! {
    BlogCategory {
        Techniques => "techniques",
        Inspiration => "inspiration",
        Tutorials => "tutorials",
        BehindScenes => "behind-scenes",
        ArtBusiness => "art-business",
    }
}

// ───── Stored Model ───────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: BlogCategory,
    pub author: String,
    pub image_url: String,
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ────────────────────────────────────
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct NewBlogPostRequest {
    #[validate(
        length(max = MAX_TITLE_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(max = MAX_EXCERPT_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub excerpt: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(custom(function = "validate_blog_category"))]
    pub category: String,

    #[validate(
        length(max = MAX_AUTHOR_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub author: String,

    #[validate(custom(function = "validate_image_ref"))]
    pub image_url: String,

    #[validate(
        length(max = MAX_READ_TIME_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub read_time: String,

    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,
}

// ───── Validation Helpers ─────────────────────────────────────────────
pub fn validate_blog_category(value: &str) -> Result<(), ValidationError> {
    validate_member::<BlogCategory>(value, BlogCategory::VALUES)
}

pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        return Err(new_validation_error("too_many_tags", "Too many tags provided"));
    }
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_TAG_LENGTH {
            return Err(new_validation_error("invalid_tag_length", "Tag length must be within allowed range"));
        }
        if !trimmed.chars().all(|c| c.is_alphanumeric() || c == '-' || c == ' ') {
            return Err(new_validation_error("invalid_tag_chars", "Tags must be letters, digits, spaces or hyphens"));
        }
    }
    Ok(())
}

/// URL slug for a title; `None` when the title has too few usable characters.
pub fn slug_for(title: &str) -> Option<String> {
    let generated = slug::slugify(title);
    (generated.len() >= MIN_SLUG_LENGTH).then_some(generated)
}

// ───── Conversions ────────────────────────────────────────────────────
impl TryFrom<NewBlogPostRequest> for BlogPost {
    type Error = ValidationErrors;

    fn try_from(value: NewBlogPostRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let category = value.category.parse::<BlogCategory>().map_err(|_| {
            let mut errors = ValidationErrors::new();
            if let Err(e) = validate_blog_category(&value.category) {
                errors.add("category", e);
            }
            errors
        })?;

        let slug = slug_for(&value.title).ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.add("title", new_validation_error("slug_too_short", "Title must contain at least 3 letters or digits"));
            errors
        })?;

        Ok(BlogPost {
            id: Uuid::new_v4(),
            title: value.title.trim().to_string(),
            slug,
            excerpt: value.excerpt.trim().to_string(),
            content: sanitize_html(&value.content),
            category,
            author: value.author.trim().to_string(),
            image_url: value.image_url,
            read_time: value.read_time.trim().to_string(),
            tags: value.tags.into_iter().map(|t| t.trim().to_string()).collect(),
            created_at: Utc::now(),
        })
    }
}
