//! Server assembly for the roster person registry: configuration loading and
//! the top-level axum app.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use roster_core::store::PersonStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROSTER_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "127.0.0.1";
  pub const DEFAULT_PORT: u16 = 8000;
  pub const DEFAULT_STORE_PATH: &'static str = "roster.db";

  /// Load configuration from the optional TOML file at `path`, overridden by
  /// environment variables prefixed `ROSTER_`.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::from_builder(
      config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("ROSTER")),
    )
  }

  fn from_builder(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
  ) -> Result<Self, config::ConfigError> {
    let mut cfg: ServerConfig = builder
      .set_default("host", Self::DEFAULT_HOST)?
      .set_default("port", i64::from(Self::DEFAULT_PORT))?
      .set_default("store_path", Self::DEFAULT_STORE_PATH)?
      .build()?
      .try_deserialize()?;
    cfg.store_path = expand_tilde(&cfg.store_path);
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// The API router with request tracing applied.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: PersonStore + 'static,
{
  roster_api::api_router(store).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use roster_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  fn from_toml(toml: &str) -> ServerConfig {
    ServerConfig::from_builder(
      config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
    )
    .unwrap()
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let cfg = from_toml("");
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.store_path, PathBuf::from("roster.db"));
    assert_eq!(cfg.address(), "127.0.0.1:8000");
  }

  #[test]
  fn file_values_override_defaults() {
    let cfg = from_toml("host = \"0.0.0.0\"\nport = 9090\nstore_path = \"/var/lib/roster.db\"\n");
    assert_eq!(cfg.address(), "0.0.0.0:9090");
    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/roster.db"));
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/roster-config.toml")).unwrap();
    assert!(!cfg.host.is_empty());
  }

  #[test]
  fn tilde_is_expanded() {
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/roster.db")),
        PathBuf::from(home).join("roster.db")
      );
    }
    assert_eq!(expand_tilde(Path::new("/abs/roster.db")), PathBuf::from("/abs/roster.db"));
  }

  #[tokio::test]
  async fn app_serves_the_api() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let req   = Request::builder().uri("/people").body(Body::empty()).unwrap();
    let resp  = app(Arc::new(store)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
