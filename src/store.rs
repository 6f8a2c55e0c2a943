// File: src/store.rs
use crate::dates::forward_distance_days;
use crate::model::Event;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Insertion-ordered collection of parsed events.
///
/// Plain owned value: one writer appends, queries return fresh vectors and
/// leave the stored order untouched. No internal synchronization; callers
/// serialize access if the store is ever shared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Calendar {
    events: Vec<Event>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the end of the sequence. Duplicate labels and
    /// dates are allowed; there is no failure mode.
    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events, ascending by stored date.
    pub fn sorted_by_date(&self) -> Vec<Event> {
        let mut sorted = self.events.clone();
        sorted.sort();
        sorted
    }

    /// Events whose month/day anniversary falls within `horizon_days`
    /// (inclusive) of `from`, wrapping across year end.
    ///
    /// Results keep their original stored dates and are ordered by those
    /// dates, not by days until the anniversary.
    pub fn upcoming(&self, from: NaiveDate, horizon_days: u32) -> Vec<Event> {
        let mut hits: Vec<Event> = self
            .events
            .iter()
            .filter(|e| forward_distance_days(from, e.date) <= horizon_days)
            .cloned()
            .collect();
        hits.sort();
        hits
    }

    /// Events stored for exactly `today`, year included. This is a literal
    /// calendar-day match, not the anniversary match `upcoming` performs.
    pub fn today_events(&self, today: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.date == today)
            .cloned()
            .collect()
    }
}
