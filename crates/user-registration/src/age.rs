//! Birth date and legal age validation.
//!
//! The validators are pure: the reference date is always an argument. Only
//! [`validate_age_today`] reads a clock, and it takes the clock as a
//! parameter so callers decide where "now" comes from.

use chrono::{DateTime, Datelike, NaiveDate};
use mockable::Clock;
use serde_json::Value;

use crate::error::{ClassifiedError, ErrorCode};
use crate::raw::RawInput;

/// Minimum age, in whole years, required to register.
pub const MINIMUM_AGE: i32 = 18;
/// Ages above this many whole years are treated as unrealistic.
pub const MAXIMUM_AGE: i32 = 150;

/// Whole years elapsed between `birth_date` and `reference_date`.
///
/// A year is counted only once the anniversary is reached: someone born on
/// the same month and day as `reference_date` has already had their
/// birthday. A 29 February birthday is reached on 1 March in common years.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use user_registration::age_on;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 6, 15).expect("valid date");
/// let eve = NaiveDate::from_ymd_opt(2018, 6, 14).expect("valid date");
/// let birthday = NaiveDate::from_ymd_opt(2018, 6, 15).expect("valid date");
/// assert_eq!(age_on(birth, eve), 17);
/// assert_eq!(age_on(birth, birthday), 18);
/// ```
#[must_use]
pub fn age_on(birth_date: NaiveDate, reference_date: NaiveDate) -> i32 {
    let years = reference_date.year() - birth_date.year();
    let anniversary_reached =
        (reference_date.month(), reference_date.day()) >= (birth_date.month(), birth_date.day());
    if anniversary_reached {
        years
    } else {
        years - 1
    }
}

/// Validate that `birth_date` belongs to an adult as of `reference_date`.
///
/// # Errors
///
/// Returns a [`ClassifiedError`] coded `FUTURE_DATE` when the birth date
/// follows the reference date, `AGE_TOO_OLD` above [`MAXIMUM_AGE`], or
/// `AGE_TOO_YOUNG` below [`MINIMUM_AGE`] (the message carries the computed
/// age).
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use user_registration::{ErrorCode, validate_age};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let adult = NaiveDate::from_ymd_opt(2008, 10, 19).expect("valid date");
/// let minor = NaiveDate::from_ymd_opt(2008, 10, 20).expect("valid date");
/// assert!(validate_age(adult, today).is_ok());
/// let err = validate_age(minor, today).expect_err("one day short of 18");
/// assert_eq!(err.code(), ErrorCode::AgeTooYoung);
/// ```
pub fn validate_age(
    birth_date: NaiveDate,
    reference_date: NaiveDate,
) -> Result<(), ClassifiedError> {
    if birth_date > reference_date {
        return Err(ClassifiedError::new(
            ErrorCode::FutureDate,
            "Birth date cannot be in the future",
        ));
    }

    let age = age_on(birth_date, reference_date);
    if age > MAXIMUM_AGE {
        return Err(ClassifiedError::new(
            ErrorCode::AgeTooOld,
            format!("Calculated age is unrealistic (over {MAXIMUM_AGE} years)"),
        ));
    }
    if age < MINIMUM_AGE {
        return Err(ClassifiedError::new(
            ErrorCode::AgeTooYoung,
            format!("You must be at least {MINIMUM_AGE} years old. Current age: {age}"),
        ));
    }
    Ok(())
}

/// Validate `birth_date` against the calendar date reported by `clock`
/// (UTC).
///
/// # Errors
///
/// Same as [`validate_age`].
pub fn validate_age_today(birth_date: NaiveDate, clock: &dyn Clock) -> Result<(), ClassifiedError> {
    validate_age(birth_date, clock.utc().date_naive())
}

/// Parse a raw birth date: a calendar date (`YYYY-MM-DD`) or an RFC 3339
/// timestamp, whose date is taken in its own offset.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use user_registration::parse_birth_date;
///
/// let expected = NaiveDate::from_ymd_opt(1990, 1, 1);
/// assert_eq!(parse_birth_date("1990-01-01"), expected);
/// assert_eq!(parse_birth_date("1990-01-01T23:30:00-02:00"), expected);
/// assert_eq!(parse_birth_date("1990-02-30"), None);
/// ```
#[must_use]
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Validate a raw record value as a birth date.
///
/// # Errors
///
/// Returns `MISSING_DATE` for absent or `null` values, `INVALID_DATE_TYPE`
/// for non-strings, `INVALID_DATE` for strings [`parse_birth_date`] rejects,
/// and the [`validate_age`] outcome otherwise.
pub fn validate_age_value(
    value: Option<&Value>,
    reference_date: NaiveDate,
) -> Result<(), ClassifiedError> {
    let raw = match RawInput::classify(value) {
        RawInput::Absent => {
            return Err(ClassifiedError::new(
                ErrorCode::MissingDate,
                "Birth date is required",
            ));
        }
        RawInput::Other => {
            return Err(ClassifiedError::new(
                ErrorCode::InvalidDateType,
                "Birth date must be a date",
            ));
        }
        RawInput::Text(raw) => raw,
    };

    let birth_date = parse_birth_date(raw).ok_or_else(|| {
        ClassifiedError::new(ErrorCode::InvalidDate, "Birth date is invalid")
    })?;
    validate_age(birth_date, reference_date)
}

#[cfg(test)]
mod tests;
