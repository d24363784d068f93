//! Person records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::PersonStatus;

/// A registered person as stored.
///
/// `id` is assigned by the store and never changes. `id_number` is unique
/// across all records. `last_log` is set to the creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
  pub id_number:  String,
  pub status:     PersonStatus,
  pub last_log:   DateTime<Utc>,
}

/// Input for [`PersonStore::create_person`](crate::store::PersonStore::create_person).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
  pub first_name: String,
  pub last_name:  String,
  pub id_number:  String,
}

impl NewPerson {
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    id_number: impl Into<String>,
  ) -> Self {
    Self {
      first_name: first_name.into(),
      last_name:  last_name.into(),
      id_number:  id_number.into(),
    }
  }
}
