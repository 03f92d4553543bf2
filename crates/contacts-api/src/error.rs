//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use contacts_core::{ErrorKind, StoreError};
use serde_json::json;
use thiserror::Error;

use crate::{messages, validate::ValidationError};

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("contact not found")]
  NotFound,

  #[error("store error: {source}")]
  Store {
    kind:   ErrorKind,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Classify a store failure by its kind.
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.kind() {
      ErrorKind::NotFound => ApiError::NotFound,
      kind => ApiError::Store {
        kind,
        source: Box::new(e),
      },
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
      ApiError::NotFound => (StatusCode::NOT_FOUND, messages::NOT_FOUND.to_string()),
      ApiError::Store { kind, source } => {
        // Details stay in the log; the client only learns that it failed.
        tracing::error!(error = %source, ?kind, "contact store failure");
        let message = match kind {
          ErrorKind::StorageWrite => messages::WRITE_FAILED,
          _ => messages::READ_FAILED,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}
