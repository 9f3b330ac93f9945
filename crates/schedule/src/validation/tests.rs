//! Tests for Quartz validation.

use crate::validation::{is_valid_cron, validate_cron};

// -- accepted ----------------------------------------------------------

#[test]
fn accepts_editor_defaults() {
    // Defaults used by the alert and subscription-group forms.
    assert!(is_valid_cron("0 0 0 1/1 * ? *"));
    assert!(is_valid_cron("0 */5 * * * ?"));
}

#[test]
fn accepts_simple_mode_output() {
    assert!(is_valid_cron("0 10 10 ? * * *"));
    assert!(is_valid_cron("0 59 0 ? * SUN,MON,TUE,WED,FRI,SAT *"));
    assert!(is_valid_cron("0 0 5 ? * MON-FRI *"));
}

#[test]
fn accepts_names_case_insensitively() {
    assert!(is_valid_cron("0 0 12 ? jan-Mar mon,wed"));
    assert!(is_valid_cron("0 0 12 1 JAN,JUL,DEC ? 2030"));
}

#[test]
fn accepts_ranges_steps_and_lists() {
    assert!(is_valid_cron("0/15 5-10/2 1,13 ? * 2-6"));
    assert!(is_valid_cron("0 0 8 1-15/3 */2 ? 2026/1"));
}

#[test]
fn accepts_last_and_weekday_specials() {
    assert!(is_valid_cron("0 0 12 L * ?"));
    assert!(is_valid_cron("0 0 12 LW * ?"));
    assert!(is_valid_cron("0 0 12 L-3 * ?"));
    assert!(is_valid_cron("0 0 12 15W * ?"));
    assert!(is_valid_cron("0 0 12 ? * 6L"));
    assert!(is_valid_cron("0 0 12 ? * FRIL"));
    assert!(is_valid_cron("0 0 12 ? * 6#3"));
    assert!(is_valid_cron("0 0 12 ? * MON#1"));
    assert!(is_valid_cron("0 0 12 ? * L"));
}

// -- rejected ----------------------------------------------------------

#[test]
fn rejects_wrong_field_count() {
    let result = validate_cron("*/15 * * * *");
    assert!(!result.valid);
    assert!(result.has_error_at("cron"));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("got 5"));

    assert!(!is_valid_cron(""));
    assert!(!is_valid_cron("0 0 0 ? * * * *"));
}

#[test]
fn rejects_out_of_range_values() {
    let result = validate_cron("60 0 0 ? * *");
    assert!(result.has_error_at("cron.second"));

    let result = validate_cron("0 75 30 ? * * *");
    assert!(result.has_error_at("cron.minute"));
    assert!(result.has_error_at("cron.hour"));

    assert!(validate_cron("0 0 0 32 * ?").has_error_at("cron.day_of_month"));
    assert!(validate_cron("0 0 0 0 * ?").has_error_at("cron.day_of_month"));
    assert!(validate_cron("0 0 0 ? 13 *").has_error_at("cron.month"));
    assert!(validate_cron("0 0 0 ? * 0").has_error_at("cron.day_of_week"));
    assert!(validate_cron("0 0 0 ? * 8").has_error_at("cron.day_of_week"));
    assert!(validate_cron("0 0 0 ? * * 1969").has_error_at("cron.year"));
    assert!(validate_cron("0 0 0 ? * * 2100").has_error_at("cron.year"));
}

#[test]
fn rejects_question_mark_outside_day_fields() {
    let result = validate_cron("0 0 ? ? * MON-FRI *");
    assert!(result.has_error_at("cron.hour"));
}

#[test]
fn rejects_both_or_neither_day_wildcard() {
    let both = validate_cron("0 0 0 ? * ? *");
    assert!(both.has_error_at("cron"));
    assert!(both.errors[0].message.contains("cannot both"));

    let neither = validate_cron("0 0 0 * * MON *");
    assert!(neither.has_error_at("cron"));
    assert!(neither.errors[0].message.contains("must be '?'"));
}

#[test]
fn rejects_bad_steps() {
    assert!(validate_cron("0 */0 * ? * *").has_error_at("cron.minute"));
    assert!(validate_cron("0 */61 * ? * *").has_error_at("cron.minute"));
    assert!(validate_cron("0 0 */x ? * *").has_error_at("cron.hour"));
    assert!(validate_cron("0 0 0 1/32 * ?").has_error_at("cron.day_of_month"));
}

#[test]
fn rejects_backwards_and_malformed_ranges() {
    assert!(validate_cron("0 30-10 * ? * *").has_error_at("cron.minute"));
    assert!(validate_cron("0 0 0 ? * FRI-MON").has_error_at("cron.day_of_week"));
    assert!(validate_cron("0 0 0 ? * MON-").has_error_at("cron.day_of_week"));
}

#[test]
fn rejects_bad_specials() {
    assert!(validate_cron("0 0 12 L-31 * ?").has_error_at("cron.day_of_month"));
    assert!(validate_cron("0 0 12 32W * ?").has_error_at("cron.day_of_month"));
    assert!(validate_cron("0 0 12 ? * 6#6").has_error_at("cron.day_of_week"));
    assert!(validate_cron("0 0 12 ? * 9L").has_error_at("cron.day_of_week"));
    assert!(validate_cron("0 0 12 ? L *").has_error_at("cron.month"));
}

#[test]
fn rejects_unknown_names_and_empty_elements() {
    assert!(validate_cron("0 0 0 ? * FUNDAY").has_error_at("cron.day_of_week"));
    assert!(validate_cron("0 0 0 ? FOO *").has_error_at("cron.month"));
    assert!(validate_cron("0 0 0 ? * MON,,TUE").has_error_at("cron.day_of_week"));
}

#[test]
fn error_message_names_field_and_value() {
    let result = validate_cron("0 75 0 ? * *");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "cron.minute");
    assert_eq!(
        result.errors[0].message,
        "Invalid cron minute field '75': 75 is outside 0-59"
    );
}

// -- warnings ----------------------------------------------------------

#[test]
fn warns_on_numeric_weekdays() {
    let result = validate_cron("0 0 12 ? * 2-6");
    assert!(result.valid);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].path, "cron.day_of_week");
}

#[test]
fn no_warning_for_named_weekdays_or_steps() {
    assert!(validate_cron("0 0 12 ? * MON-FRI").warnings.is_empty());
    assert!(validate_cron("0 0 12 ? * */2").warnings.is_empty());
    assert!(validate_cron("0 0 12 1 * ?").warnings.is_empty());
}

#[test]
fn result_serializes_for_api_responses() {
    let json = serde_json::to_value(validate_cron("0 0 0 ? * ? *")).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["path"], "cron");
}
