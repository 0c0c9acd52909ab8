use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entities::validators::{closed_set, is_valid_email, non_blank, MAX_UPLOAD_FILE_BYTES},
    errors::FieldError,
};

closed_set! {
    ServiceType {
        Portrait => "portrait",
        PetPortrait => "pet-portrait",
        Landscape => "landscape",
        Abstract => "abstract",
        Digital => "digital",
        TshirtDesign => "tshirt-design",
        Sketch => "sketch",
        Other => "other",
    }
}

closed_set! {
    BudgetRange {
        Under100 => "under-100",
        From100To250 => "100-250",
        From250To500 => "250-500",
        From500To1000 => "500-1000",
        From1000To2500 => "1000-2500",
        Over2500 => "2500-plus",
        Flexible => "flexible",
    }
}

closed_set! {
    ArtworkSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extra-large",
        Custom => "custom",
        DigitalOnly => "digital-only",
    }
}

closed_set! {
    CommissionStatus {
        Pending => "pending",
    }
}

/// Raw `multipart/form-data` body of the commission form. Every text part is
/// optional here so that missing fields reach validation as field errors.
#[derive(Debug, MultipartForm)]
pub struct CommissionUpload {
    pub name: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub phone: Option<Text<String>>,
    #[multipart(rename = "serviceType")]
    pub service_type: Option<Text<String>>,
    pub budget: Option<Text<String>>,
    pub deadline: Option<Text<String>>,
    pub size: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(rename = "referenceUrls")]
    pub reference_urls: Option<Text<String>>,
    #[multipart(rename = "referenceImages")]
    pub reference_images: Vec<TempFile>,
}

/// What the server learned about one uploaded file. The bytes themselves are
/// discarded once the request ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub size: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CommissionSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub budget: Option<String>,
    pub deadline: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub reference_urls: Option<String>,
    pub reference_images: Vec<ReferenceUpload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImage {
    pub name: String,
    pub mime_type: String,
    pub size: usize,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service_type: ServiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ArtworkSize>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_urls: Option<String>,
    #[serde(default)]
    pub reference_images: Vec<ReferenceImage>,
    pub status: CommissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: Commission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

/// Checks every uploaded file and reports all offenders at once.
pub fn validate_reference_uploads(uploads: &[ReferenceUpload]) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for upload in uploads {
        let is_image = upload
            .mime_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"));

        if !is_image {
            errors.push(FieldError::new(
                "referenceImages",
                format!("File \"{}\" is not an image", upload.file_name),
            ));
        }
        if upload.size > MAX_UPLOAD_FILE_BYTES {
            errors.push(FieldError::new(
                "referenceImages",
                format!("File \"{}\" exceeds the 10 MB size limit", upload.file_name),
            ));
        }
    }

    errors
}

fn check_choice<T: std::str::FromStr>(
    field: &str,
    value: Option<&str>,
    allowed: &[&str],
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let value = value?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(FieldError::new(field, format!("Must be one of: {}", allowed.join(", "))));
            None
        }
    }
}

fn required(field: &str, value: &Option<String>, errors: &mut Vec<FieldError>) {
    if value.is_none() {
        errors.push(FieldError::new(field, "This field is required"));
    }
}

impl CommissionSubmission {
    /// Runs every field and file check, then builds the record. Either all
    /// checks pass or the full list of problems comes back.
    pub fn into_commission(self) -> Result<Commission, Vec<FieldError>> {
        let name = non_blank(self.name);
        let email = non_blank(self.email);
        let service_type_raw = non_blank(self.service_type);
        let description = non_blank(self.description);
        let budget_raw = non_blank(self.budget);
        let size_raw = non_blank(self.size);
        let deadline_raw = non_blank(self.deadline);

        let mut errors = Vec::new();

        required("name", &name, &mut errors);
        required("email", &email, &mut errors);
        required("serviceType", &service_type_raw, &mut errors);
        required("description", &description, &mut errors);

        if let Some(addr) = email.as_deref() {
            if !is_valid_email(addr) {
                errors.push(FieldError::new("email", "Please enter a valid email address"));
            }
        }

        let service_type = check_choice::<ServiceType>(
            "serviceType", service_type_raw.as_deref(), ServiceType::VALUES, &mut errors,
        );
        let budget = check_choice::<BudgetRange>(
            "budget", budget_raw.as_deref(), BudgetRange::VALUES, &mut errors,
        );
        let size = check_choice::<ArtworkSize>(
            "size", size_raw.as_deref(), ArtworkSize::VALUES, &mut errors,
        );

        let deadline = match deadline_raw.as_deref() {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError::new("deadline", "Deadline must be a date in YYYY-MM-DD format"));
                    None
                }
            },
            None => None,
        };

        errors.extend(validate_reference_uploads(&self.reference_images));

        let (Some(name), Some(email), Some(service_type), Some(description)) =
            (name, email, service_type, description)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let now = Utc::now();
        let reference_images = self
            .reference_images
            .into_iter()
            .map(|upload| ReferenceImage {
                name: upload.file_name,
                // checked above
                mime_type: upload.mime_type.unwrap_or_default(),
                size: upload.size,
                uploaded_at: now,
            })
            .collect();

        Ok(Commission {
            id: Uuid::new_v4(),
            name,
            email,
            phone: non_blank(self.phone),
            service_type,
            budget,
            deadline,
            size,
            description,
            reference_urls: non_blank(self.reference_urls),
            reference_images,
            status: CommissionStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }
}
