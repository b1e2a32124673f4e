//! Tests for whole-record validation.

use super::*;
use crate::error::ErrorCode;
use crate::test_support::{clock_at_timestamp, utc_timestamp};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid fixture date")
}

#[fixture]
fn name_username_record() -> Value {
    json!({
        "name": "Jean",
        "username": "Dupont",
        "email": "jean@x.com",
        "city": "Paris",
        "postalCode": "75001"
    })
}

#[fixture]
fn first_last_record() -> Value {
    json!({
        "firstName": "Jean",
        "lastName": "Dupont",
        "birthDate": "1990-01-01",
        "email": "jean.dupont@example.com",
        "postalCode": "75001"
    })
}

fn first_last_config() -> ValidationConfig {
    ValidationConfig::new(RecordShape::FirstLast, PostalCodeFormat::FiveDigit)
}

#[rstest]
fn accepts_a_complete_record(name_username_record: Value, reference: NaiveDate) {
    assert!(validate_user(
        &name_username_record,
        &ValidationConfig::default(),
        reference
    ));
}

#[rstest]
fn rejects_a_bad_postal_code(mut name_username_record: Value, reference: NaiveDate) {
    name_username_record["postalCode"] = json!("ABC");
    assert!(!validate_user(
        &name_username_record,
        &ValidationConfig::default(),
        reference
    ));
}

#[rstest]
#[case(json!(null))]
#[case(json!([]))]
#[case(json!([{ "name": "Jean" }]))]
#[case(json!("Jean"))]
#[case(json!(42))]
#[case(json!(true))]
#[case(json!({}))]
fn rejects_non_records(#[case] record: Value, reference: NaiveDate) {
    assert!(!validate_user(&record, &ValidationConfig::default(), reference));
}

#[rstest]
#[case("name", json!(12))]
#[case("username", json!(["Dupont"]))]
#[case("email", json!(false))]
#[case("city", json!({}))]
#[case("postalCode", json!(75001))]
fn rejects_wrongly_typed_fields(
    mut name_username_record: Value,
    reference: NaiveDate,
    #[case] key: &str,
    #[case] value: Value,
) {
    name_username_record[key] = value;
    assert!(!validate_user(
        &name_username_record,
        &ValidationConfig::default(),
        reference
    ));
}

#[rstest]
fn ignores_fields_outside_the_shape(mut name_username_record: Value, reference: NaiveDate) {
    name_username_record["birthDate"] = json!("not a date");
    name_username_record["firstName"] = json!(7);
    assert!(validate_user(
        &name_username_record,
        &ValidationConfig::default(),
        reference
    ));
}

#[rstest]
fn first_last_shape_checks_age(mut first_last_record: Value, reference: NaiveDate) {
    let config = first_last_config();
    assert!(validate_user(&first_last_record, &config, reference));

    first_last_record["birthDate"] = json!("2008-10-20");
    let err = check_user(&first_last_record, &config, reference).expect_err("minor");
    assert_eq!(err.field, Field::BirthDate);
    assert_eq!(err.code(), ErrorCode::AgeTooYoung);

    first_last_record["birthDate"] = json!("2008-10-19");
    assert!(validate_user(&first_last_record, &config, reference));
}

#[rstest]
fn first_last_shape_ignores_city(first_last_record: Value, reference: NaiveDate) {
    assert!(first_last_record.get("city").is_none());
    assert!(validate_user(&first_last_record, &first_last_config(), reference));
}

#[rstest]
fn zip_plus_four_deployments_accept_extended_codes(
    mut name_username_record: Value,
    reference: NaiveDate,
) {
    name_username_record["postalCode"] = json!("12345-6789");
    let five = ValidationConfig::default();
    let zip = ValidationConfig::new(RecordShape::NameUsername, PostalCodeFormat::ZipPlusFour);
    assert!(!validate_user(&name_username_record, &five, reference));
    assert!(validate_user(&name_username_record, &zip, reference));
}

#[rstest]
fn check_user_reports_first_failure_in_shape_order(reference: NaiveDate) {
    let record = json!({
        "name": "Jean",
        "username": "Dupont",
        "email": "jean@@x",
        "city": "",
        "postalCode": "1"
    });
    let err = check_user(&record, &ValidationConfig::default(), reference)
        .expect_err("record should be rejected");
    assert_eq!(err.field, Field::Email);
    assert_eq!(err.code(), ErrorCode::InvalidEmailFormat);
}

#[rstest]
fn check_user_reports_missing_first_field_for_non_objects(reference: NaiveDate) {
    let err = check_user(&json!([]), &first_last_config(), reference)
        .expect_err("array should be rejected");
    assert_eq!(err.field, Field::FirstName);
    assert_eq!(err.code(), ErrorCode::MissingIdentity);
}

#[rstest]
fn collects_every_failure(reference: NaiveDate) {
    let record = json!({
        "name": "<b>x</b>",
        "username": "Dupont",
        "email": "user..name@example.com",
        "city": "   ",
        "postalCode": "1234"
    });
    let codes: Vec<_> = collect_user_errors(&record, &ValidationConfig::default(), reference)
        .into_iter()
        .map(|err| (err.field, err.code()))
        .collect();
    assert_eq!(
        codes,
        [
            (Field::Name, ErrorCode::XssDetected),
            (Field::Email, ErrorCode::InvalidEmailFormat),
            (Field::City, ErrorCode::MissingCity),
            (Field::PostalCode, ErrorCode::InvalidPostalCodeFormat),
        ]
    );
}

#[rstest]
fn collects_nothing_for_a_valid_record(name_username_record: Value, reference: NaiveDate) {
    assert!(
        collect_user_errors(&name_username_record, &ValidationConfig::default(), reference)
            .is_empty()
    );
}

#[rstest]
fn today_wrapper_uses_the_clock_date(first_last_record: Value) {
    let mut record = first_last_record;
    record["birthDate"] = json!("2008-10-19");
    let config = first_last_config();

    let birthday = clock_at_timestamp(utc_timestamp(2026, 10, 19, 0, 0, 0));
    let eve = clock_at_timestamp(utc_timestamp(2026, 10, 18, 23, 59, 59));

    assert!(validate_user_today(&record, &config, &*birthday));
    assert!(!validate_user_today(&record, &config, &*eve));
}
