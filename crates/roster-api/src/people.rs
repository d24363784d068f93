//! Handlers for `/people` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/people` | Optional `?status=<STATUS>&search=<term>` |
//! | `POST` | `/people` | `?first_name=&last_name=&id_number=`; 400 if the id number is taken |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  person::{NewPerson, Person},
  status::PersonStatus,
  store::{PersonQuery, PersonStore},
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub status: Option<PersonStatus>,
  /// Substring of the first or last name, case-insensitive. Empty means no
  /// filter.
  pub search: Option<String>,
}

/// `GET /people[?status=<STATUS>][&search=<term>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
{
  let query = PersonQuery {
    status: params.status,
    search: params.search,
  };

  let people = store
    .list_people(&query)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(people))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateParams {
  pub first_name: String,
  pub last_name:  String,
  pub id_number:  String,
}

/// `POST /people?first_name=..&last_name=..&id_number=..`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<CreateParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  let id_number = params.id_number.clone();
  let input = NewPerson {
    first_name: params.first_name,
    last_name:  params.last_name,
    id_number:  params.id_number,
  };

  let person = store.create_person(input).await.map_err(|e| {
    let err = ApiError::from_store(e);
    if matches!(err, ApiError::BadRequest(_)) {
      tracing::warn!(%id_number, "rejected duplicate id number");
    }
    err
  })?;

  tracing::info!(id = person.id, %id_number, "person created");
  Ok((StatusCode::CREATED, Json(person)))
}
