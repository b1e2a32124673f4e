//! Validation engine for user registration records.
//!
//! Each field of a registration form has a pure validator that either
//! accepts the value or returns a [`ClassifiedError`] carrying a stable
//! [`ErrorCode`]. The aggregate validators compose them over a JSON record
//! whose keys are fixed by the configured [`RecordShape`], and the
//! [`RegistrationService`] only hands a record to storage once it has
//! passed.
//!
//! # Overview
//!
//! - Field validators: identity (names), email, postal code, city, and
//!   birth date / legal age. Each has a typed form and a `*_value` form for
//!   raw JSON input where a value may be absent or of the wrong type.
//! - Aggregate validation: [`validate_user`] (boolean gate),
//!   [`check_user`] (first failure), [`collect_user_errors`] (every
//!   failure).
//! - Configuration: [`ValidationConfig`], loadable through
//!   [`ValidationSettings`].
//! - Persistence gating: [`RegistrationService`] over a [`UserStore`].
//! - The `check-registration` command, driven from [`check_cli`].
//!
//! Validators never read the clock; the reference date for age checks is an
//! argument, and only the `*_today` wrappers take a [`mockable::Clock`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use serde_json::json;
//! use user_registration::{ErrorCode, ValidationConfig, validate_email, validate_user};
//!
//! let err = validate_email("user..name@example.com").expect_err("consecutive dots");
//! assert_eq!(err.code(), ErrorCode::InvalidEmailFormat);
//!
//! let record = json!({
//!     "name": "Jean",
//!     "username": "Dupont",
//!     "email": "jean@x.com",
//!     "city": "Paris",
//!     "postalCode": "75001"
//! });
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
//! assert!(validate_user(&record, &ValidationConfig::default(), today));
//! ```

mod age;
pub mod check_cli;
mod city;
mod email;
mod error;
mod identity;
mod markup;
mod memory_store;
pub mod ports;
mod postal_code;
mod raw;
mod record;
mod registration;
mod settings;
#[cfg(test)]
mod test_support;
mod user;

pub use age::{
    MAXIMUM_AGE, MINIMUM_AGE, age_on, parse_birth_date, validate_age, validate_age_today,
    validate_age_value,
};
pub use city::{validate_city, validate_city_value};
pub use email::{EMAIL_MAX_LENGTH, validate_email, validate_email_value};
pub use error::{ClassifiedError, ErrorCode, FieldError};
pub use identity::{
    IDENTITY_MAX_LENGTH, IDENTITY_MIN_LENGTH, validate_identity, validate_identity_value,
};
pub use markup::contains_script_markup;
pub use memory_store::InMemoryUserStore;
pub use ports::{UserStore, UserStoreError};
pub use postal_code::{
    PostalCodeFormat, UnknownPostalCodeFormat, validate_postal_code, validate_postal_code_value,
};
pub use record::{Field, RecordShape, UnknownRecordShape, ValidatedRecord};
pub use registration::{RegistrationError, RegistrationService};
pub use settings::{ConfigError, ValidationSettings};
pub use user::{
    ValidationConfig, check_user, collect_user_errors, validate_user, validate_user_today,
};
