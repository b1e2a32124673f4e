//! Classified validation errors.
//!
//! Every failing rule produces exactly one [`ClassifiedError`]: a stable,
//! machine-readable [`ErrorCode`] plus a human-readable message. Callers key
//! their behaviour on the code; the message is for display only.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::Field;

/// Stable machine-readable code describing which rule rejected a value.
///
/// The serialised form (and [`ErrorCode::as_str`]) is the upper snake case
/// identifier, e.g. `MISSING_EMAIL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Identity field is absent, empty, or whitespace-only.
    MissingIdentity,
    /// Identity field is not a string.
    InvalidIdentityType,
    /// Identity field has surrounding whitespace or forbidden characters.
    InvalidIdentityFormat,
    /// Identity field is shorter than the minimum length.
    IdentityTooShort,
    /// Identity field is longer than the maximum length.
    IdentityTooLong,
    /// Value contains HTML tags, a `javascript:` scheme, or inline handlers.
    XssDetected,
    /// Email is absent, empty, or whitespace-only.
    MissingEmail,
    /// Email is not a string.
    InvalidEmailType,
    /// Email does not have a valid `local@domain.tld` shape.
    InvalidEmailFormat,
    /// Email is longer than 254 characters.
    EmailTooLong,
    /// Postal code is absent or empty.
    MissingPostalCode,
    /// Postal code is not a string.
    InvalidPostalCodeType,
    /// Postal code does not match the configured format.
    InvalidPostalCodeFormat,
    /// City is absent, not a string, or blank.
    MissingCity,
    /// Birth date is absent.
    MissingDate,
    /// Birth date is not a date value.
    InvalidDateType,
    /// Birth date cannot be parsed as a calendar date.
    InvalidDate,
    /// Birth date lies after the reference date.
    FutureDate,
    /// Computed age exceeds the realistic maximum.
    AgeTooOld,
    /// Computed age is below the legal minimum.
    AgeTooYoung,
}

impl ErrorCode {
    /// Stable identifier for the code.
    ///
    /// # Examples
    /// ```
    /// use user_registration::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::XssDetected.as_str(), "XSS_DETECTED");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingIdentity => "MISSING_IDENTITY",
            Self::InvalidIdentityType => "INVALID_IDENTITY_TYPE",
            Self::InvalidIdentityFormat => "INVALID_IDENTITY_FORMAT",
            Self::IdentityTooShort => "IDENTITY_TOO_SHORT",
            Self::IdentityTooLong => "IDENTITY_TOO_LONG",
            Self::XssDetected => "XSS_DETECTED",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::InvalidEmailType => "INVALID_EMAIL_TYPE",
            Self::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            Self::EmailTooLong => "EMAIL_TOO_LONG",
            Self::MissingPostalCode => "MISSING_POSTAL_CODE",
            Self::InvalidPostalCodeType => "INVALID_POSTAL_CODE_TYPE",
            Self::InvalidPostalCodeFormat => "INVALID_POSTAL_CODE_FORMAT",
            Self::MissingCity => "MISSING_CITY",
            Self::MissingDate => "MISSING_DATE",
            Self::InvalidDateType => "INVALID_DATE_TYPE",
            Self::InvalidDate => "INVALID_DATE",
            Self::FutureDate => "FUTURE_DATE",
            Self::AgeTooOld => "AGE_TOO_OLD",
            Self::AgeTooYoung => "AGE_TOO_YOUNG",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule violation: stable code plus human-readable message.
///
/// ## Invariants
/// - Created only at the point a rule fails and never mutated afterwards.
///
/// # Examples
/// ```
/// use user_registration::{ClassifiedError, ErrorCode};
///
/// let err = ClassifiedError::new(ErrorCode::MissingCity, "City must not be empty");
/// assert_eq!(err.code(), ErrorCode::MissingCity);
/// assert_eq!(err.to_string(), "City must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    code: ErrorCode,
    message: String,
}

impl ClassifiedError {
    /// Build an error for `code` with a display message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// A [`ClassifiedError`] attributed to the record key that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {error}")]
pub struct FieldError {
    /// Record key whose value was rejected.
    pub field: Field,
    /// Rule violation reported by the field validator.
    #[serde(flatten)]
    pub error: ClassifiedError,
}

impl FieldError {
    /// Attach `error` to `field`.
    #[must_use]
    pub const fn new(field: Field, error: ClassifiedError) -> Self {
        Self { field, error }
    }

    /// Code of the underlying violation.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.error.code()
    }
}
