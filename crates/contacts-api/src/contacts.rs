//! Handlers for the contact collection.
//!
//! | Method   | Path   | Notes |
//! |----------|--------|-------|
//! | `GET`    | `/`    | Full list |
//! | `POST`   | `/`    | Body: `{"name", "email", "phone"}`, all required |
//! | `GET`    | `/:id` | 404 if not found |
//! | `PUT`    | `/:id` | Body: any non-empty subset of the fields |
//! | `DELETE` | `/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use contacts_core::{Contact, ContactStore};
use serde::Serialize;

use crate::{error::ApiError, messages, validate};

// ─── Response bodies ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ListResponse {
  pub contacts: Vec<Contact>,
  pub message:  &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
  pub contact_by_id: Contact,
  pub message:       &'static str,
}

/// The created contact's fields sit at the top level next to `message`.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
  #[serde(flatten)]
  pub contact: Contact,
  pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
  pub updated_contact: Contact,
  pub message:         &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
  pub message: &'static str,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<ListResponse>, ApiError>
where
  S: ContactStore,
{
  let contacts = store.list().await.map_err(ApiError::from_store)?;
  Ok(Json(ListResponse {
    contacts,
    message: messages::LISTED,
  }))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<GetResponse>, ApiError>
where
  S: ContactStore,
{
  let contact = store.get(&id).await.map_err(ApiError::from_store)?;
  Ok(Json(GetResponse {
    contact_by_id: contact,
    message:       messages::FOUND,
  }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let fields = validate::new_contact(&body)?;
  let contact = store.add(fields).await.map_err(ApiError::from_store)?;
  tracing::info!(id = %contact.id, "contact created");
  Ok((
    StatusCode::CREATED,
    Json(CreateResponse {
      contact,
      message: messages::CREATED,
    }),
  ))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /:id`
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
  S: ContactStore,
{
  store.remove(&id).await.map_err(ApiError::from_store)?;
  tracing::info!(%id, "contact deleted");
  Ok(Json(MessageResponse {
    message: messages::DELETED,
  }))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /:id`. An empty body is rejected before the id is looked up.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Bytes,
) -> Result<Json<UpdateResponse>, ApiError>
where
  S: ContactStore,
{
  let patch = validate::contact_patch(&body)?;
  let updated = store.update(&id, patch).await.map_err(ApiError::from_store)?;
  tracing::info!(%id, "contact updated");
  Ok(Json(UpdateResponse {
    updated_contact: updated,
    message:         messages::UPDATED,
  }))
}
