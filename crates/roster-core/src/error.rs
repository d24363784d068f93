//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A person with this identification number is already registered.
  #[error("person with id number {0:?} already exists")]
  DuplicateIdNumber(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Walk `err` and its `source()` chain, returning the first [`Error`] found.
///
/// Backends wrap core errors in their own error types; this lets the HTTP
/// layer classify a failure without naming a concrete backend.
pub fn find_core_error<'a>(
  err: &'a (dyn std::error::Error + 'static),
) -> Option<&'a Error> {
  std::iter::successors(Some(err), |e| e.source())
    .find_map(|e| e.downcast_ref::<Error>())
}
