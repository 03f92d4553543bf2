//! Core types and trait definitions for the contacts service.
//!
//! This crate is deliberately free of HTTP and file-system dependencies.
//! The store backend and the HTTP layer both depend on it.

pub mod contact;
pub mod error;
pub mod store;

pub use contact::{Contact, ContactPatch, NewContact};
pub use error::{ErrorKind, StoreError};
pub use store::ContactStore;
