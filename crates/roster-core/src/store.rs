//! The `PersonStore` trait and its query type.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  person::{NewPerson, Person},
  status::PersonStatus,
};

/// Parameters for [`PersonStore::list_people`]. Filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
  /// Only people in exactly this status.
  pub status: Option<PersonStatus>,
  /// Case-insensitive substring of the first or last name.
  pub search: Option<String>,
}

/// Abstraction over a person registry backend.
///
/// Records are only ever created; there is no update or delete.
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new person unless `id_number` is already taken.
  ///
  /// The store assigns `id`, sets `status` to
  /// [`PersonStatus::Pending`] and `last_log` to now. A taken `id_number`
  /// fails with an error whose source chain holds
  /// [`Error::DuplicateIdNumber`](crate::Error::DuplicateIdNumber), and
  /// nothing is written.
  fn create_person(
    &self,
    input: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// List people matching `query`, ordered by
  /// [`PersonStatus::list_rank`] and then by `id`.
  fn list_people<'a>(
    &'a self,
    query: &'a PersonQuery,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;
}
