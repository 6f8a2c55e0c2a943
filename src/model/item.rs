// File: ./src/model/item.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Classification of a parsed event. Closed set: callers match exhaustively.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Generic,
    Birthday,
}

impl EventKind {
    /// Integer tag used by the export record format (0 = generic, 1 = birthday).
    pub fn tag(&self) -> u8 {
        match self {
            Self::Generic => 0,
            Self::Birthday => 1,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::Birthday => write!(f, "birthday"),
        }
    }
}

/// One parsed calendar event. Immutable once constructed; the date carries
/// day granularity only, so equality needs no truncation step.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub label: String,
    pub date: NaiveDate,
}

impl Event {
    pub fn new(kind: EventKind, label: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            kind,
            label: label.into(),
            date,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.label
        )
    }
}

// --- SORTING ---
// Ascending by date; same-date events order by label then kind so the total
// order stays consistent with Eq.
impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.date.cmp(&other.date) {
            Ordering::Equal => match self.label.cmp(&other.label) {
                Ordering::Equal => self.kind.tag().cmp(&other.kind.tag()),
                ord => ord,
            },
            ord => ord,
        }
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
