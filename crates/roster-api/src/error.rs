//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::error::find_core_error;
use serde_json::json;
use thiserror::Error;

/// Message returned when a create collides with an existing id number.
pub const DUPLICATE_ID_NUMBER_MESSAGE: &str =
  "Person with this ID number already exists";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a store failure: a duplicate id number is the caller's fault,
  /// anything else is ours.
  pub fn from_store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    match find_core_error(&err) {
      Some(roster_core::Error::DuplicateIdNumber(_)) => {
        ApiError::BadRequest(DUPLICATE_ID_NUMBER_MESSAGE.to_owned())
      }
      _ => ApiError::Store(Box::new(err)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
