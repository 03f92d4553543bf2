//! Error type for `contacts-store-json`.

use std::path::PathBuf;

use contacts_core::{ErrorKind, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("contact not found: {0}")]
  NotFound(String),

  #[error("failed to read {}: {}", .path.display(), .source)]
  Read {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("malformed contacts file {}: {}", .path.display(), .source)]
  Parse {
    path:   PathBuf,
    source: serde_json::Error,
  },

  #[error("failed to serialise contacts: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to write {}: {}", .path.display(), .source)]
  Write {
    path:   PathBuf,
    source: std::io::Error,
  },
}

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::NotFound(_) => ErrorKind::NotFound,
      Error::Read { .. } | Error::Parse { .. } => ErrorKind::StorageRead,
      Error::Serialize(_) | Error::Write { .. } => ErrorKind::StorageWrite,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
