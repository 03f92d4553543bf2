//! JSON-file backend for the contacts store.
//!
//! The whole collection lives in one file as a pretty-printed JSON array.
//! Every operation re-reads the file; nothing is cached between calls.

mod file;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonFileStore;
