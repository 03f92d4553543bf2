//! JSON REST API for the contacts service.
//!
//! Exposes an axum [`Router`] backed by any [`contacts_core::ContactStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/contacts", contacts_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;
pub mod messages;
pub mod validate;

use std::sync::Arc;

use axum::{Router, routing::get};
use contacts_core::ContactStore;

pub use error::ApiError;
pub use validate::ValidationError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/", get(contacts::list::<S>).post(contacts::create::<S>))
    .route(
      "/{contact_id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::remove::<S>),
    )
    .with_state(store)
}
