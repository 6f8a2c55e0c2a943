// Adversarial inputs for the message parser.
use chrono::NaiveDate;
use eventide::model::parser::{parse_date, parse_kind, parse_label};
use eventide::model::{EventKind, ParseError, parse_event};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_date_failure_takes_precedence_over_label() {
    // Neither component present: the date check runs first and its error is
    // the one reported.
    let err = parse_event("nothing to see here").unwrap_err();
    assert_eq!(err, ParseError::DateNotFound);
}

#[test]
fn test_first_date_match_wins() {
    let d = parse_date("from 1/2/2000 to 3/4/2001").unwrap();
    assert_eq!(d, date(2000, 2, 1));
}

#[test]
fn test_first_label_match_wins() {
    let label = parse_label("\"first\" and \"second\" 1/1/2000").unwrap();
    assert_eq!(label, "first");
}

#[test]
fn test_label_has_no_escape_handling() {
    // The first closing quote terminates the label; the tail is ignored.
    let label = parse_label(r#"note "one \" two" 1/1/2000"#).unwrap();
    assert_eq!(label, "one \\");
}

#[test]
fn test_overflowing_day_rolls_forward() {
    // 30/2 has no calendar day; the excess rolls into March, as the original
    // feed producer expects.
    assert_eq!(parse_date("\"x\" 30/2/1995").unwrap(), date(1995, 3, 2));
    assert_eq!(parse_date("\"x\" 30/2/2024").unwrap(), date(2024, 3, 1));
    assert_eq!(parse_date("\"x\" 32/1/2000").unwrap(), date(2000, 2, 1));
}

#[test]
fn test_overflowing_month_rolls_into_next_year() {
    assert_eq!(parse_date("\"x\" 2/13/1995").unwrap(), date(1996, 1, 2));
    assert_eq!(parse_date("\"x\" 1/22/2000").unwrap(), date(2001, 10, 1));
}

#[test]
fn test_zero_day_or_month_is_rejected() {
    assert_eq!(
        parse_date("\"x\" 0/5/2000").unwrap_err(),
        ParseError::InvalidDateNumerals
    );
    assert_eq!(
        parse_date("\"x\" 5/0/2000").unwrap_err(),
        ParseError::InvalidDateNumerals
    );
}

#[test]
fn test_date_requires_slashes_and_four_digit_year() {
    assert_eq!(
        parse_date("meeting 2000-05-09").unwrap_err(),
        ParseError::DateNotFound
    );
    assert_eq!(
        parse_date("meeting 9/5/90").unwrap_err(),
        ParseError::DateNotFound
    );
}

#[test]
fn test_three_digit_day_still_matches_inner_window() {
    // The pattern has no word boundaries: "123/4/2000" matches on the "23"
    // window adjacent to the slash. Longstanding feed behavior, kept as-is.
    assert_eq!(parse_date("123/4/2000").unwrap(), date(2000, 4, 23));
}

#[test]
fn test_kind_defaults_to_generic() {
    assert_eq!(parse_kind("no keyword at all"), EventKind::Generic);
    assert_eq!(parse_kind("birthdays count too"), EventKind::Birthday);
}

#[test]
fn test_kind_never_short_circuits_component_errors() {
    // 'birthday' present but no date: the date error still wins.
    let err = parse_event("birthday \"Joe\"").unwrap_err();
    assert_eq!(err, ParseError::DateNotFound);
}
