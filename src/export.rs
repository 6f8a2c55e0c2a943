// File: src/export.rs
// Writes the calendar to disk as newline-delimited JSON records.
use crate::model::Event;
use crate::store::Calendar;
use anyhow::{Context, Result};
use chrono::{NaiveDate, SecondsFormat};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One exported line. `kind` carries the integer tag (0 = generic,
/// 1 = birthday) and `date` the event day at UTC midnight, RFC 3339.
#[derive(Debug, Serialize)]
pub struct ExportRecord {
    pub kind: u8,
    pub label: String,
    pub date: String,
}

impl From<&Event> for ExportRecord {
    fn from(event: &Event) -> Self {
        Self {
            kind: event.kind.tag(),
            label: event.label.clone(),
            date: utc_midnight(event.date),
        }
    }
}

fn utc_midnight(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Best-effort export: a record that fails to encode is logged and skipped,
/// the rest of the batch still goes out. Only I/O on the destination file
/// fails the call.
pub fn write_events(calendar: &Calendar, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create export file '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    for event in calendar.events() {
        match serde_json::to_string(&ExportRecord::from(event)) {
            Ok(line) => {
                out.write_all(line.as_bytes())
                    .and_then(|_| out.write_all(b"\n"))
                    .with_context(|| format!("failed writing to '{}'", path.display()))?;
            }
            Err(e) => {
                log::warn!("skipping unencodable event \"{}\": {}", event.label, e);
            }
        }
    }

    out.flush()
        .with_context(|| format!("failed writing to '{}'", path.display()))?;
    Ok(())
}
