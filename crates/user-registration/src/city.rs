//! City validation: any non-blank string is accepted.

use serde_json::Value;

use crate::error::{ClassifiedError, ErrorCode};
use crate::raw::RawInput;

fn missing_city() -> ClassifiedError {
    ClassifiedError::new(ErrorCode::MissingCity, "City must not be empty")
}

/// Validate a city typed as a string. Any script or length is allowed as
/// long as the value is not blank.
///
/// # Errors
///
/// Returns a [`ClassifiedError`] coded `MISSING_CITY` when `value` is empty
/// once trimmed.
pub fn validate_city(value: &str) -> Result<(), ClassifiedError> {
    if value.trim().is_empty() {
        return Err(missing_city());
    }
    Ok(())
}

/// Validate a raw record value as a city.
///
/// # Errors
///
/// Absent, `null`, non-string, and blank values are all `MISSING_CITY`.
pub fn validate_city_value(value: Option<&Value>) -> Result<(), ClassifiedError> {
    match RawInput::classify(value) {
        RawInput::Text(text) => validate_city(text),
        RawInput::Absent | RawInput::Other => Err(missing_city()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("Paris")]
    #[case("Saint-Étienne")]
    #[case("東京")]
    #[case("  Lyon  ")]
    fn accepts_non_blank_cities(#[case] value: &str) {
        assert!(validate_city(value).is_ok());
    }

    #[rstest]
    #[case(Some(json!("")))]
    #[case(Some(json!("   ")))]
    #[case(Some(json!(null)))]
    #[case(Some(json!(75)))]
    #[case(None)]
    fn rejects_missing_cities(#[case] value: Option<Value>) {
        let err = validate_city_value(value.as_ref()).expect_err("city should be rejected");
        assert_eq!(err.code(), ErrorCode::MissingCity);
    }
}
