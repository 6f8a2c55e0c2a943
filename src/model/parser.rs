// File: src/model/parser.rs
use crate::model::{Event, EventKind};
use chrono::{Days, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Matches DD/MM/YYYY or D/M/YYYY (or combination DD, D, MM, M).
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").unwrap());

// First double-quoted run. No escape handling: the first closing quote wins.
static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)birthday").unwrap());

/// Per-message parse failures. Non-fatal to a batch: callers report the
/// reason and move on to the next message.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("no 'date' component found (expected D/M/YYYY)")]
    DateNotFound,
    #[error("invalid date numerals")]
    InvalidDateNumerals,
    #[error("no quoted 'label' component found")]
    LabelNotFound,
}

/// Parses one message into an [`Event`].
///
/// The date is resolved before the label, so a message missing both reports
/// [`ParseError::DateNotFound`]. Kind classification is total and only
/// attaches once the other two components have succeeded.
pub fn parse_event(msg: &str) -> Result<Event, ParseError> {
    let date = parse_date(msg)?;
    let label = parse_label(msg)?;
    let kind = parse_kind(msg);

    Ok(Event { kind, label, date })
}

/// Extracts the first day/month/year group from a message.
///
/// Out-of-range components roll forward rather than fail: 30/2/1995 lands on
/// March 2nd and month 13 in January of the next year. The triple is built
/// by offsetting from January 1st of the captured year, which is what gives
/// the rollover semantics.
pub fn parse_date(msg: &str) -> Result<NaiveDate, ParseError> {
    let caps = DATE_RE.captures(msg).ok_or(ParseError::DateNotFound)?;

    let day: u64 = caps[1].parse().map_err(|_| ParseError::InvalidDateNumerals)?;
    let month: u32 = caps[2].parse().map_err(|_| ParseError::InvalidDateNumerals)?;
    let year: i32 = caps[3].parse().map_err(|_| ParseError::InvalidDateNumerals)?;

    // A zero day or month has no forward-rollover meaning.
    if day == 0 || month == 0 {
        return Err(ParseError::InvalidDateNumerals);
    }

    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|base| base.checked_add_months(Months::new(month - 1)))
        .and_then(|d| d.checked_add_days(Days::new(day - 1)))
        .ok_or(ParseError::InvalidDateNumerals)
}

/// Extracts the 'label' component: the text between the first pair of double
/// quotes. An empty pair yields an empty label.
pub fn parse_label(msg: &str) -> Result<String, ParseError> {
    let caps = LABEL_RE.captures(msg).ok_or(ParseError::LabelNotFound)?;
    Ok(caps[1].to_string())
}

/// Classifies the message: 'birthday' anywhere (case-insensitive) marks a
/// birthday, everything else is generic. Never fails.
pub fn parse_kind(msg: &str) -> EventKind {
    if BIRTHDAY_RE.is_match(msg) {
        EventKind::Birthday
    } else {
        EventKind::Generic
    }
}
