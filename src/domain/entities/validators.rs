use std::borrow::Cow;
use std::str::FromStr;

use validator::{ValidateEmail, ValidationError};

/// Declares a closed set of string values that (de)serializes as its wire
/// spelling and parses with `FromStr`. Unknown values are rejected.
macro_rules! closed_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!("Invalid value '{}'", other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use closed_set;

pub const MAX_UPLOAD_FILE_BYTES: usize = 10 * 1024 * 1024;

pub fn new_validation_error(code: &'static str, msg: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(msg.into());
    err
}

/// Rejects anything outside `T`'s closed set, naming the accepted values.
pub fn validate_member<T: FromStr>(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    match value.parse::<T>() {
        Ok(_) => Ok(()),
        Err(_) => Err(new_validation_error(
            "invalid_choice",
            format!("Must be one of: {}", allowed.join(", ")),
        )),
    }
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

/// Absolute http(s) URL or a site-relative path such as `/images/a.jpg`.
pub fn validate_image_ref(value: &str) -> Result<(), ValidationError> {
    if value.starts_with('/') && !value.starts_with("//") && value.len() > 1 {
        return Ok(());
    }
    validate_url(value)
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "This field is required"));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Treats a blank optional form value as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    closed_set! {
        Colour { Red => "red", DarkBlue => "dark-blue" }
    }

    #[test]
    fn closed_set_round_trips_wire_names() {
        assert_eq!("dark-blue".parse::<Colour>(), Ok(Colour::DarkBlue));
        assert_eq!(Colour::Red.to_string(), "red");
        assert_eq!(serde_json::to_value(Colour::DarkBlue).unwrap(), "dark-blue");
    }

    #[test]
    fn closed_set_rejects_unknown_and_differently_cased_values() {
        assert!(validate_member::<Colour>("green", Colour::VALUES).is_err());
        assert!(validate_member::<Colour>("Red", Colour::VALUES).is_err());
        let err = validate_member::<Colour>("green", Colour::VALUES).unwrap_err();
        assert_eq!(err.message.unwrap(), "Must be one of: red, dark-blue");
    }

    #[test]
    fn urls_must_be_http() {
        assert!(validate_url("https://images.example.com/a.jpg").is_ok());
        assert!(validate_url("ftp://example.com/a.jpg").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn image_refs_accept_site_paths() {
        assert!(validate_image_ref("/images/blog/cover.jpg").is_ok());
        assert!(validate_image_ref("//evil.example/x.jpg").is_err());
        assert!(validate_image_ref("/").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("fan@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn blank_optional_values_become_none() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" medium ".into())), Some("medium".into()));
    }
}
