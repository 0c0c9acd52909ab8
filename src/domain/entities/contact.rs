use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::entities::validators::non_blank;

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 30, message = "Phone number is too long"))]
    pub phone: Option<String>,

    #[validate(length(min = 10, max = 5000, message = "Message must be between 10 and 5000 characters"))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

impl TryFrom<ContactForm> for Contact {
    type Error = ValidationErrors;

    fn try_from(mut form: ContactForm) -> Result<Self, Self::Error> {
        form.name = form.name.trim().to_string();
        form.email = form.email.trim().to_string();
        form.message = form.message.trim().to_string();
        form.validate()?;

        Ok(Contact {
            id: Uuid::new_v4(),
            name: form.name,
            email: form.email,
            phone: non_blank(form.phone),
            message: form.message,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jordan".into(),
            email: "jordan@example.com".into(),
            phone: Some("".into()),
            message: "I'd love a family portrait in charcoal.".into(),
        }
    }

    #[test]
    fn accepts_valid_form_and_drops_blank_phone() {
        let contact = Contact::try_from(form()).unwrap();
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn message_bounds_are_enforced() {
        let mut short = form();
        short.message = "Hi there".into();
        assert!(Contact::try_from(short).is_err());

        let mut long = form();
        long.message = "x".repeat(5001);
        assert!(Contact::try_from(long).is_err());

        let mut max = form();
        max.message = "x".repeat(5000);
        assert!(Contact::try_from(max).is_ok());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let mut f = form();
        f.name = "    ".into();
        let errors = Contact::try_from(f).unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn padded_short_message_is_rejected() {
        let mut f = form();
        f.message = "    Hi there    ".into();
        assert!(Contact::try_from(f).is_err());
    }

    #[test]
    fn single_letter_name_is_rejected() {
        let mut f = form();
        f.name = "J".into();
        let errors = Contact::try_from(f).unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
