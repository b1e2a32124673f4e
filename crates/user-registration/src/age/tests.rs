//! Tests for birth date and age validation.

use super::*;
use crate::test_support::{clock_at_timestamp, utc_timestamp};
use rstest::{fixture, rstest};
use serde_json::json;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

#[fixture]
fn reference() -> NaiveDate {
    date(2026, 10, 19)
}

fn code_of(birth_date: NaiveDate, reference_date: NaiveDate) -> ErrorCode {
    validate_age(birth_date, reference_date)
        .expect_err("birth date should be rejected")
        .code()
}

#[rstest]
fn eighteenth_birthday_on_reference_date_counts(reference: NaiveDate) {
    assert_eq!(age_on(date(2008, 10, 19), reference), 18);
    assert!(validate_age(date(2008, 10, 19), reference).is_ok());
}

#[rstest]
fn eighteenth_birthday_tomorrow_is_too_young(reference: NaiveDate) {
    assert_eq!(age_on(date(2008, 10, 20), reference), 17);
    let err = validate_age(date(2008, 10, 20), reference).expect_err("turns 18 tomorrow");
    assert_eq!(err.code(), ErrorCode::AgeTooYoung);
    assert_eq!(
        err.message(),
        "You must be at least 18 years old. Current age: 17"
    );
}

#[rstest]
#[case(date(2008, 11, 1), 17)]
#[case(date(2008, 9, 30), 18)]
#[case(date(1990, 1, 1), 36)]
#[case(date(2026, 10, 19), 0)]
fn counts_whole_years(reference: NaiveDate, #[case] birth: NaiveDate, #[case] expected: i32) {
    assert_eq!(age_on(birth, reference), expected);
}

#[rstest]
#[case(date(2023, 2, 28), 18)]
#[case(date(2023, 3, 1), 19)]
#[case(date(2024, 2, 28), 19)]
#[case(date(2024, 2, 29), 20)]
fn leap_day_birthdays_are_reached_on_first_of_march(
    #[case] reference_date: NaiveDate,
    #[case] expected: i32,
) {
    assert_eq!(age_on(date(2004, 2, 29), reference_date), expected);
}

#[rstest]
fn rejects_future_birth_dates(reference: NaiveDate) {
    assert_eq!(code_of(date(2026, 10, 20), reference), ErrorCode::FutureDate);
}

#[rstest]
fn birth_on_reference_date_is_too_young_not_future(reference: NaiveDate) {
    assert_eq!(code_of(reference, reference), ErrorCode::AgeTooYoung);
}

#[rstest]
fn accepts_exactly_maximum_age(reference: NaiveDate) {
    assert!(validate_age(date(1876, 10, 19), reference).is_ok());
}

#[rstest]
fn rejects_unrealistic_ages(reference: NaiveDate) {
    assert_eq!(code_of(date(1875, 10, 19), reference), ErrorCode::AgeTooOld);
}

#[rstest]
fn repeated_calls_agree(reference: NaiveDate) {
    let birth = date(2010, 5, 5);
    assert_eq!(validate_age(birth, reference), validate_age(birth, reference));
}

#[rstest]
fn today_wrapper_reads_the_clock() {
    let clock = clock_at_timestamp(utc_timestamp(2026, 10, 19, 12, 0, 0));
    assert!(validate_age_today(date(2008, 10, 19), &*clock).is_ok());
    let err = validate_age_today(date(2008, 10, 20), &*clock).expect_err("one day short");
    assert_eq!(err.code(), ErrorCode::AgeTooYoung);
}

#[rstest]
#[case("2000-01-31", Some(date(2000, 1, 31)))]
#[case(" 2000-01-31 ", Some(date(2000, 1, 31)))]
#[case("2000-01-31T00:00:00Z", Some(date(2000, 1, 31)))]
#[case("2000-01-31T23:00:00+05:00", Some(date(2000, 1, 31)))]
#[case("31/01/2000", None)]
#[case("2001-02-29", None)]
#[case("", None)]
fn parses_birth_dates(#[case] raw: &str, #[case] expected: Option<NaiveDate>) {
    assert_eq!(parse_birth_date(raw), expected);
}

#[rstest]
#[case(None, ErrorCode::MissingDate)]
#[case(Some(json!(null)), ErrorCode::MissingDate)]
#[case(Some(json!(946_684_800)), ErrorCode::InvalidDateType)]
#[case(Some(json!({ "year": 2000 })), ErrorCode::InvalidDateType)]
#[case(Some(json!("not a date")), ErrorCode::InvalidDate)]
#[case(Some(json!("")), ErrorCode::InvalidDate)]
#[case(Some(json!("2030-01-01")), ErrorCode::FutureDate)]
#[case(Some(json!("2015-01-01")), ErrorCode::AgeTooYoung)]
fn raw_values(reference: NaiveDate, #[case] value: Option<Value>, #[case] expected: ErrorCode) {
    let err = validate_age_value(value.as_ref(), reference).expect_err("value should be rejected");
    assert_eq!(err.code(), expected);
}

#[rstest]
fn raw_adult_birth_date_passes(reference: NaiveDate) {
    assert!(validate_age_value(Some(&json!("1990-01-01")), reference).is_ok());
}
