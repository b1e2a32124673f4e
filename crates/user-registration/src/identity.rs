//! Personal name validation (first name, last name, or username).

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{ClassifiedError, ErrorCode};
use crate::markup::contains_script_markup;
use crate::raw::RawInput;

/// Minimum allowed length for an identity field, in characters.
pub const IDENTITY_MIN_LENGTH: usize = 2;
/// Maximum allowed length for an identity field, in characters.
pub const IDENTITY_MAX_LENGTH: usize = 50;

static IDENTITY_RE: OnceLock<Regex> = OnceLock::new();

fn identity_regex() -> &'static Regex {
    IDENTITY_RE.get_or_init(|| {
        // Latin letters, Latin-1 accented letters, whitespace, apostrophe, hyphen.
        Regex::new(r"^[a-zA-ZÀ-ÿ\s'-]+$")
            .unwrap_or_else(|error| panic!("identity regex failed to compile: {error}"))
    })
}

fn missing(message: &str) -> ClassifiedError {
    ClassifiedError::new(ErrorCode::MissingIdentity, message)
}

/// Validate a name typed as a string.
///
/// Rules apply in order and the first violation is returned: empty or
/// whitespace-only, surrounding whitespace, length bounds, script markup,
/// then the allowed character set.
///
/// # Errors
///
/// Returns a [`ClassifiedError`] coded `MISSING_IDENTITY`,
/// `INVALID_IDENTITY_FORMAT`, `IDENTITY_TOO_SHORT`, `IDENTITY_TOO_LONG`, or
/// `XSS_DETECTED`.
///
/// # Examples
/// ```
/// use user_registration::{ErrorCode, validate_identity};
///
/// assert!(validate_identity("Jean-Pierre").is_ok());
/// let err = validate_identity("R2D2").expect_err("digits are rejected");
/// assert_eq!(err.code(), ErrorCode::InvalidIdentityFormat);
/// ```
pub fn validate_identity(value: &str) -> Result<(), ClassifiedError> {
    if value.is_empty() {
        return Err(missing("Name or first name is required"));
    }
    if value.trim().is_empty() {
        return Err(missing("Name or first name cannot be only whitespace"));
    }
    if value.trim() != value {
        return Err(ClassifiedError::new(
            ErrorCode::InvalidIdentityFormat,
            "Name or first name must not have leading or trailing whitespace",
        ));
    }

    let length = value.chars().count();
    if length < IDENTITY_MIN_LENGTH {
        return Err(ClassifiedError::new(
            ErrorCode::IdentityTooShort,
            format!("Name or first name must be at least {IDENTITY_MIN_LENGTH} characters long"),
        ));
    }
    if length > IDENTITY_MAX_LENGTH {
        return Err(ClassifiedError::new(
            ErrorCode::IdentityTooLong,
            format!("Name or first name must not exceed {IDENTITY_MAX_LENGTH} characters"),
        ));
    }

    if contains_script_markup(value) {
        return Err(ClassifiedError::new(
            ErrorCode::XssDetected,
            "Potential XSS injection detected. HTML tags and JavaScript are not allowed",
        ));
    }

    if !identity_regex().is_match(value) {
        return Err(ClassifiedError::new(
            ErrorCode::InvalidIdentityFormat,
            "Name or first name can only contain letters, accents, hyphens, apostrophes, and spaces",
        ));
    }

    Ok(())
}

/// Validate a raw record value as an identity field.
///
/// Absent or `null` values are `MISSING_IDENTITY`; non-string values are
/// `INVALID_IDENTITY_TYPE`; strings go through [`validate_identity`].
///
/// # Errors
///
/// Returns the first [`ClassifiedError`] raised for the value.
pub fn validate_identity_value(value: Option<&Value>) -> Result<(), ClassifiedError> {
    match RawInput::classify(value) {
        RawInput::Absent => Err(missing("Name or first name is required")),
        RawInput::Other => Err(ClassifiedError::new(
            ErrorCode::InvalidIdentityType,
            "Name or first name must be a string",
        )),
        RawInput::Text(text) => validate_identity(text),
    }
}
