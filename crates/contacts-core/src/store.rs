//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `contacts-store-json`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  contact::{Contact, ContactPatch, NewContact},
  error::StoreError,
};

/// Durable CRUD over the contact collection.
///
/// Lookups that miss return an error whose [`kind`](StoreError::kind) is
/// [`ErrorKind::NotFound`](crate::ErrorKind::NotFound).
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: StoreError;

  /// Return the full collection in insertion order.
  fn list(&self) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Return the contact with the given id.
  fn get<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + 'a;

  /// Persist a new contact under a freshly generated id and return it.
  ///
  /// Field shapes are not checked here; callers validate beforehand.
  fn add(
    &self,
    fields: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Delete the contact with the given id and return the removed record.
  fn remove<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + 'a;

  /// Merge `patch` onto the contact with the given id and return the result.
  fn update<'a>(
    &'a self,
    id: &'a str,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + 'a;
}
