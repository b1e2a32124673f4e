//! Email address validation.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{ClassifiedError, ErrorCode};
use crate::markup::contains_script_markup;
use crate::raw::RawInput;

/// Maximum allowed length for an email address, in characters.
pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn invalid_format(message: &str) -> ClassifiedError {
    ClassifiedError::new(ErrorCode::InvalidEmailFormat, message)
}

/// Validate an email address typed as a string.
///
/// The accepted shape is `local@domain.tld`: the local part uses letters,
/// digits, and `._+-` without consecutive, leading, or trailing dots; the
/// domain uses letters, digits, `.` and `-`; the top-level domain has at
/// least two letters.
///
/// # Errors
///
/// Returns a [`ClassifiedError`] coded `MISSING_EMAIL`,
/// `INVALID_EMAIL_FORMAT`, `EMAIL_TOO_LONG`, or `XSS_DETECTED`.
///
/// # Examples
/// ```
/// use user_registration::{ErrorCode, validate_email};
///
/// assert!(validate_email("jean.dupont@example.com").is_ok());
/// let err = validate_email("user..name@example.com").expect_err("consecutive dots");
/// assert_eq!(err.code(), ErrorCode::InvalidEmailFormat);
/// ```
pub fn validate_email(value: &str) -> Result<(), ClassifiedError> {
    if value.is_empty() {
        return Err(ClassifiedError::new(
            ErrorCode::MissingEmail,
            "Email address is required",
        ));
    }
    if value.trim().is_empty() {
        return Err(ClassifiedError::new(
            ErrorCode::MissingEmail,
            "Email address cannot be only whitespace",
        ));
    }
    if value.trim() != value {
        return Err(invalid_format(
            "Email address must not have leading or trailing whitespace",
        ));
    }
    if value.chars().count() > EMAIL_MAX_LENGTH {
        return Err(ClassifiedError::new(
            ErrorCode::EmailTooLong,
            format!("Email address must not exceed {EMAIL_MAX_LENGTH} characters"),
        ));
    }

    if contains_script_markup(value) {
        return Err(ClassifiedError::new(
            ErrorCode::XssDetected,
            "Potential XSS injection detected. HTML tags and JavaScript are not allowed in email",
        ));
    }

    if !email_regex().is_match(value) {
        return Err(invalid_format(
            "Email address must be in a valid format (example@domain.com)",
        ));
    }

    // The pattern admits exactly one `@`.
    let local_part = value.split_once('@').map_or(value, |(local, _)| local);
    if local_part.contains("..") {
        return Err(invalid_format(
            "Email address cannot have consecutive dots in local part",
        ));
    }
    if local_part.starts_with('.') || local_part.ends_with('.') {
        return Err(invalid_format(
            "Email address local part cannot start or end with a dot",
        ));
    }

    Ok(())
}

/// Validate a raw record value as an email address.
///
/// Absent or `null` values are `MISSING_EMAIL`; non-string values are
/// `INVALID_EMAIL_TYPE`; strings go through [`validate_email`].
///
/// # Errors
///
/// Returns the first [`ClassifiedError`] raised for the value.
pub fn validate_email_value(value: Option<&Value>) -> Result<(), ClassifiedError> {
    match RawInput::classify(value) {
        RawInput::Absent => Err(ClassifiedError::new(
            ErrorCode::MissingEmail,
            "Email address is required",
        )),
        RawInput::Other => Err(ClassifiedError::new(
            ErrorCode::InvalidEmailType,
            "Email address must be a string",
        )),
        RawInput::Text(text) => validate_email(text),
    }
}
