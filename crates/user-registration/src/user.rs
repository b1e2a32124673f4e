//! Whole-record validation.
//!
//! [`validate_user`] answers "is this record submittable?" and deliberately
//! discards which field failed. Callers that need per-field feedback use
//! [`check_user`] (first failure) or [`collect_user_errors`] (every failure),
//! or call the field validators directly.

use chrono::NaiveDate;
use mockable::Clock;
use serde_json::Value;

use crate::age::validate_age_value;
use crate::city::validate_city_value;
use crate::email::validate_email_value;
use crate::error::{ClassifiedError, FieldError};
use crate::identity::validate_identity_value;
use crate::postal_code::{PostalCodeFormat, validate_postal_code_value};
use crate::record::{Field, RecordShape};

/// Deployment-level choices for record validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Keys the aggregate validators expect.
    pub record_shape: RecordShape,
    /// Format applied to `postalCode`.
    pub postal_code_format: PostalCodeFormat,
}

impl ValidationConfig {
    /// Build a configuration from its parts.
    #[must_use]
    pub const fn new(record_shape: RecordShape, postal_code_format: PostalCodeFormat) -> Self {
        Self {
            record_shape,
            postal_code_format,
        }
    }
}

fn validate_field(
    field: Field,
    value: Option<&Value>,
    config: &ValidationConfig,
    reference_date: NaiveDate,
) -> Result<(), ClassifiedError> {
    match field {
        Field::Name | Field::Username | Field::FirstName | Field::LastName => {
            validate_identity_value(value)
        }
        Field::Email => validate_email_value(value),
        Field::City => validate_city_value(value),
        Field::PostalCode => validate_postal_code_value(value, &config.postal_code_format),
        Field::BirthDate => validate_age_value(value, reference_date),
    }
}

fn field_results<'a>(
    record: &'a Value,
    config: &'a ValidationConfig,
    reference_date: NaiveDate,
) -> impl Iterator<Item = Result<(), FieldError>> + 'a {
    let fields = record.as_object();
    config.record_shape.fields().iter().map(move |&field| {
        let value = fields.and_then(|map| map.get(field.key()));
        validate_field(field, value, config, reference_date)
            .map_err(|error| FieldError::new(field, error))
    })
}

/// Validate `record` and return the first failure in shape order.
///
/// A record that is not a JSON object has none of the expected keys, so the
/// first field of the shape is reported as missing.
///
/// # Errors
///
/// Returns the first [`FieldError`] encountered.
pub fn check_user(
    record: &Value,
    config: &ValidationConfig,
    reference_date: NaiveDate,
) -> Result<(), FieldError> {
    field_results(record, config, reference_date).collect()
}

/// Validate every field of `record` and return all failures in shape order.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use serde_json::json;
/// use user_registration::{ErrorCode, Field, ValidationConfig, collect_user_errors};
///
/// let record = json!({ "name": "Jean", "username": "Dupont", "city": "Paris" });
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let errors = collect_user_errors(&record, &ValidationConfig::default(), today);
/// let fields: Vec<_> = errors.iter().map(|e| (e.field, e.code())).collect();
/// assert_eq!(
///     fields,
///     [
///         (Field::Email, ErrorCode::MissingEmail),
///         (Field::PostalCode, ErrorCode::MissingPostalCode),
///     ]
/// );
/// ```
#[must_use]
pub fn collect_user_errors(
    record: &Value,
    config: &ValidationConfig,
    reference_date: NaiveDate,
) -> Vec<FieldError> {
    field_results(record, config, reference_date)
        .filter_map(Result::err)
        .collect()
}

/// Returns `true` when `record` is a JSON object whose fields all pass
/// their validators. Never panics; failure detail is discarded.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use serde_json::json;
/// use user_registration::{ValidationConfig, validate_user};
///
/// let config = ValidationConfig::default();
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let mut record = json!({
///     "name": "Jean",
///     "username": "Dupont",
///     "email": "jean@x.com",
///     "city": "Paris",
///     "postalCode": "75001"
/// });
/// assert!(validate_user(&record, &config, today));
///
/// record["postalCode"] = json!("ABC");
/// assert!(!validate_user(&record, &config, today));
/// ```
#[must_use]
pub fn validate_user(record: &Value, config: &ValidationConfig, reference_date: NaiveDate) -> bool {
    if !record.is_object() {
        return false;
    }
    check_user(record, config, reference_date).is_ok()
}

/// [`validate_user`] with the reference date taken from `clock` (UTC).
#[must_use]
pub fn validate_user_today(record: &Value, config: &ValidationConfig, clock: &dyn Clock) -> bool {
    validate_user(record, config, clock.utc().date_naive())
}

#[cfg(test)]
mod tests;
