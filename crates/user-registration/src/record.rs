//! Registration record shapes and the validated record handed to storage.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::FieldError;
use crate::user::{ValidationConfig, check_user};

/// A recognised record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// `name` (identity).
    Name,
    /// `username` (identity).
    Username,
    /// `firstName` (identity).
    FirstName,
    /// `lastName` (identity).
    LastName,
    /// `email`.
    Email,
    /// `city`.
    City,
    /// `postalCode`.
    PostalCode,
    /// `birthDate`.
    BirthDate,
}

impl Field {
    /// Key under which the field appears in a record.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::City => "city",
            Self::PostalCode => "postalCode",
            Self::BirthDate => "birthDate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which set of keys a deployment validates. Exactly one shape is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordShape {
    /// `name`, `username`, `email`, `city`, `postalCode`.
    #[default]
    NameUsername,
    /// `firstName`, `lastName`, `birthDate`, `email`, `postalCode`.
    FirstLast,
}

const NAME_USERNAME_FIELDS: [Field; 5] = [
    Field::Name,
    Field::Username,
    Field::Email,
    Field::City,
    Field::PostalCode,
];

const FIRST_LAST_FIELDS: [Field; 5] = [
    Field::FirstName,
    Field::LastName,
    Field::BirthDate,
    Field::Email,
    Field::PostalCode,
];

impl RecordShape {
    /// Fields validated for this shape, in validation order.
    ///
    /// # Examples
    /// ```
    /// use user_registration::{Field, RecordShape};
    ///
    /// assert_eq!(RecordShape::FirstLast.fields()[2], Field::BirthDate);
    /// ```
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::NameUsername => &NAME_USERNAME_FIELDS,
            Self::FirstLast => &FIRST_LAST_FIELDS,
        }
    }
}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameUsername => f.write_str("name-username"),
            Self::FirstLast => f.write_str("first-last"),
        }
    }
}

/// Error returned when a record shape name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record shape '{value}' (expected name-username or first-last)")]
pub struct UnknownRecordShape {
    /// Name that failed to parse.
    pub value: String,
}

impl FromStr for RecordShape {
    type Err = UnknownRecordShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "name-username" => Ok(Self::NameUsername),
            "first-last" => Ok(Self::FirstLast),
            _ => Err(UnknownRecordShape {
                value: s.to_owned(),
            }),
        }
    }
}

/// A record that passed every validator of its shape.
///
/// Holds only the shape's keys; anything else in the submitted mapping is
/// dropped. Serialises as a plain JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    shape: RecordShape,
    fields: Map<String, Value>,
}

impl ValidatedRecord {
    /// Validate `record` and keep the fields of the configured shape.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] in shape order.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use serde_json::json;
    /// use user_registration::{ValidatedRecord, ValidationConfig};
    ///
    /// let record = json!({
    ///     "name": "Jean",
    ///     "username": "Dupont",
    ///     "email": "jean@x.com",
    ///     "city": "Paris",
    ///     "postalCode": "75001",
    ///     "admin": true
    /// });
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
    /// let validated = ValidatedRecord::try_from_value(&record, &ValidationConfig::default(), today)
    ///     .expect("valid record");
    /// assert_eq!(validated.email(), "jean@x.com");
    /// assert!(validated.get("admin").is_none());
    /// ```
    pub fn try_from_value(
        record: &Value,
        config: &ValidationConfig,
        reference_date: NaiveDate,
    ) -> Result<Self, FieldError> {
        check_user(record, config, reference_date)?;

        let fields = config
            .record_shape
            .fields()
            .iter()
            .filter_map(|field| {
                record
                    .get(field.key())
                    .map(|value| (field.key().to_owned(), value.clone()))
            })
            .collect();

        Ok(Self {
            shape: config.record_shape,
            fields,
        })
    }

    /// Shape the record was validated against.
    #[must_use]
    pub const fn shape(&self) -> RecordShape {
        self.shape
    }

    /// Validated email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.fields
            .get(Field::Email.key())
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Value stored under `key`, if the shape includes it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Borrow the validated fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Serialize for ValidatedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
