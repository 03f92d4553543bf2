//! HTTP server wiring for the contacts service.
//!
//! Mounts the contacts API at `/contacts`, adds request tracing and a JSON
//! fallback for unknown paths. Trailing slashes are trimmed before routing,
//! so `/contacts/` and `/contacts` are the same resource.

use std::{path::PathBuf, sync::Arc};

use axum::{Json, Router, http::StatusCode, response::IntoResponse};
use contacts_core::ContactStore;
use serde::Deserialize;
use serde_json::json;
use tower::Layer as _;
use tower_http::{
  normalize_path::{NormalizePath, NormalizePathLayer},
  trace::TraceLayer,
};

pub const MOUNT_PATH: &str = "/contacts";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CONTACTS_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       3000,
      store_path: PathBuf::from("contacts.json"),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application service for `store`.
///
/// Path normalisation has to wrap the router from the outside; a layer added
/// with `Router::layer` only runs after the route has been picked.
pub fn app<S>(store: Arc<S>) -> NormalizePath<Router>
where
  S: ContactStore + 'static,
{
  NormalizePathLayer::trim_trailing_slash().layer(router(store))
}

fn router<S>(store: Arc<S>) -> Router
where
  S: ContactStore + 'static,
{
  Router::new()
    .nest(MOUNT_PATH, contacts_api::api_router(store))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
  (StatusCode::NOT_FOUND, Json(json!({ "message": "Nie znaleziono" })))
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{body::Body, http::Request};
  use contacts_store_json::JsonFileStore;
  use tower::ServiceExt as _;

  async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("contacts.json"))
      .await
      .unwrap();
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app(Arc::new(store)).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn api_is_mounted_under_contacts() {
    let (status, body) = get("/contacts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contacts"], json!([]));
  }

  #[tokio::test]
  async fn trailing_slash_serves_the_same_routes() {
    let (status, body) = get("/contacts/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Pobrano kontakty");

    let (status, body) = get("/contacts/unknown-id/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Nie znaleziono kontaktu");
  }

  #[tokio::test]
  async fn unknown_path_returns_json_404() {
    let (status, body) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Nie znaleziono" }));
  }

  #[test]
  fn default_config_listens_locally() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.address(), "127.0.0.1:3000");
    assert_eq!(cfg.store_path, PathBuf::from("contacts.json"));
  }
}
