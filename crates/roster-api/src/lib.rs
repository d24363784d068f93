//! JSON REST API for the roster person registry.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::store::PersonStore`].
//! Transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, roster_api::api_router(Arc::new(store)))
//! ```

pub mod error;
pub mod people;
pub mod table;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::store::PersonStore;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route("/people", get(people::list::<S>).post(people::create::<S>))
    .route("/table", get(table::handler))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
