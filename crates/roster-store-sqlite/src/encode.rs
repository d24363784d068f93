//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, statuses as their literal.

use std::str::FromStr as _;

use chrono::{DateTime, Utc};
use roster_core::{person::Person, status::PersonStatus};
use strum::IntoEnumIterator as _;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(format!("bad timestamp {s:?}: {e}")))
}

// ─── PersonStatus ────────────────────────────────────────────────────────────

pub fn decode_status(s: &str) -> Result<PersonStatus> {
  PersonStatus::from_str(s)
    .map_err(|e| Error::Decode(format!("unknown status {s:?}: {e}")))
}

/// `CASE` expression ranking rows by [`PersonStatus::list_rank`].
///
/// Anything outside the enumeration sorts after every known status.
pub fn status_rank_sql() -> String {
  let arms: String = PersonStatus::iter()
    .map(|s| format!("WHEN '{}' THEN {} ", s.as_str(), s.list_rank()))
    .collect();
  format!("CASE status {arms}ELSE 255 END")
}

// ─── LIKE patterns ───────────────────────────────────────────────────────────

/// Wrap `term` as a `%term%` pattern for `LIKE ... ESCAPE '\'`, escaping the
/// wildcard characters so the term matches literally.
pub fn contains_pattern(term: &str) -> String {
  let mut out = String::with_capacity(term.len() + 2);
  out.push('%');
  for c in term.chars() {
    if matches!(c, '%' | '_' | '\\') {
      out.push('\\');
    }
    out.push(c);
  }
  out.push('%');
  out
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `people` row.
pub struct RawPerson {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
  pub id_number:  String,
  pub status:     String,
  pub last_log:   String,
}

impl RawPerson {
  pub const COLUMNS: &'static str =
    "id, first_name, last_name, id_number, status, last_log";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawPerson {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      id_number:  row.get(3)?,
      status:     row.get(4)?,
      last_log:   row.get(5)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:         self.id,
      first_name: self.first_name,
      last_name:  self.last_name,
      id_number:  self.id_number,
      status:     decode_status(&self.status)?,
      last_log:   decode_dt(&self.last_log)?,
    })
  }
}
