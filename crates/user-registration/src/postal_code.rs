//! Postal code validation against a configurable numeric format.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{ClassifiedError, ErrorCode};
use crate::raw::RawInput;

static FIVE_DIGIT_RE: OnceLock<Regex> = OnceLock::new();
static ZIP_PLUS_FOUR_RE: OnceLock<Regex> = OnceLock::new();

fn compile_builtin(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("postal code regex {pattern} failed to compile: {error}"))
    })
}

/// Accepted postal code format. One format applies per deployment.
#[derive(Debug, Clone, Default)]
pub enum PostalCodeFormat {
    /// Exactly five digits, no separator (e.g. `75001`).
    #[default]
    FiveDigit,
    /// Five digits, optionally followed by `-` and four digits (e.g.
    /// `12345-6789`).
    ZipPlusFour,
    /// Custom pattern matched against the whole value.
    Pattern(Regex),
}

impl PostalCodeFormat {
    /// Build a custom format. The pattern is anchored so it must match the
    /// whole value.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] when the pattern does not compile.
    ///
    /// # Examples
    /// ```
    /// use user_registration::PostalCodeFormat;
    ///
    /// let format = PostalCodeFormat::pattern("[0-9]{4}").expect("valid pattern");
    /// assert!(format.matches("1000"));
    /// assert!(!format.matches("10000"));
    /// ```
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        // Compiled bare first so unbalanced groups cannot close the anchor group.
        Regex::new(pattern)?;
        Regex::new(&format!("^(?:{pattern})$")).map(Self::Pattern)
    }

    /// Returns `true` when `value` satisfies this format.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        let regex = match self {
            Self::FiveDigit => compile_builtin(&FIVE_DIGIT_RE, r"^[0-9]{5}$"),
            Self::ZipPlusFour => compile_builtin(&ZIP_PLUS_FOUR_RE, r"^[0-9]{5}(?:-[0-9]{4})?$"),
            Self::Pattern(regex) => regex,
        };
        regex.is_match(value)
    }

    fn violation_message(&self) -> &'static str {
        match self {
            Self::FiveDigit => {
                "Postal code must be exactly 5 digits with no spaces or special characters"
            }
            Self::ZipPlusFour => {
                "Postal code must be 5 digits, optionally followed by a hyphen and 4 digits"
            }
            Self::Pattern(_) => "Postal code does not match the expected format",
        }
    }
}

impl fmt::Display for PostalCodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FiveDigit => f.write_str("five-digit"),
            Self::ZipPlusFour => f.write_str("zip-plus-four"),
            Self::Pattern(regex) => write!(f, "pattern {}", regex.as_str()),
        }
    }
}

/// Error returned when a named postal code format is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown postal code format '{value}' (expected five-digit or zip-plus-four)")]
pub struct UnknownPostalCodeFormat {
    /// Name that failed to parse.
    pub value: String,
}

impl FromStr for PostalCodeFormat {
    type Err = UnknownPostalCodeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "five-digit" => Ok(Self::FiveDigit),
            "zip-plus-four" => Ok(Self::ZipPlusFour),
            _ => Err(UnknownPostalCodeFormat {
                value: s.to_owned(),
            }),
        }
    }
}

/// Validate a postal code typed as a string.
///
/// # Errors
///
/// Returns a [`ClassifiedError`] coded `MISSING_POSTAL_CODE` for an empty
/// value or `INVALID_POSTAL_CODE_FORMAT` when `format` does not match.
///
/// # Examples
/// ```
/// use user_registration::{ErrorCode, PostalCodeFormat, validate_postal_code};
///
/// assert!(validate_postal_code("75001", &PostalCodeFormat::FiveDigit).is_ok());
/// let err = validate_postal_code("1234", &PostalCodeFormat::FiveDigit)
///     .expect_err("too short");
/// assert_eq!(err.code(), ErrorCode::InvalidPostalCodeFormat);
/// ```
pub fn validate_postal_code(value: &str, format: &PostalCodeFormat) -> Result<(), ClassifiedError> {
    if value.is_empty() {
        return Err(ClassifiedError::new(
            ErrorCode::MissingPostalCode,
            "Postal code is required",
        ));
    }
    if !format.matches(value) {
        return Err(ClassifiedError::new(
            ErrorCode::InvalidPostalCodeFormat,
            format.violation_message(),
        ));
    }
    Ok(())
}

/// Validate a raw record value as a postal code.
///
/// # Errors
///
/// Returns `MISSING_POSTAL_CODE` for absent or `null` values,
/// `INVALID_POSTAL_CODE_TYPE` for non-strings (numbers included), and the
/// [`validate_postal_code`] outcome otherwise.
pub fn validate_postal_code_value(
    value: Option<&Value>,
    format: &PostalCodeFormat,
) -> Result<(), ClassifiedError> {
    match RawInput::classify(value) {
        RawInput::Absent => Err(ClassifiedError::new(
            ErrorCode::MissingPostalCode,
            "Postal code is required",
        )),
        RawInput::Other => Err(ClassifiedError::new(
            ErrorCode::InvalidPostalCodeType,
            "Postal code must be a string",
        )),
        RawInput::Text(text) => validate_postal_code(text, format),
    }
}
