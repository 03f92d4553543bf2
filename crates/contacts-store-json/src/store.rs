//! [`JsonFileStore`], the JSON-file implementation of [`ContactStore`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use contacts_core::{Contact, ContactPatch, ContactStore, NewContact};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{Error, Result, file};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single JSON file.
///
/// Cloning is cheap; clones share the path and the write lock.
#[derive(Clone)]
pub struct JsonFileStore {
  inner: Arc<Inner>,
}

struct Inner {
  path:       PathBuf,
  /// Held across every read-modify-write so writers in this process never
  /// observe each other's half-finished updates. Reads do not take it.
  write_lock: Mutex<()>,
}

impl JsonFileStore {
  /// Open a store at `path`, creating the file with an empty collection if
  /// it does not exist yet.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    if file::bootstrap(&path).await? {
      tracing::info!(path = %path.display(), "created empty contacts file");
    }
    Ok(Self {
      inner: Arc::new(Inner {
        path,
        write_lock: Mutex::new(()),
      }),
    })
  }

  async fn read(&self) -> Result<Vec<Contact>> {
    file::read_collection(&self.inner.path).await
  }

  async fn write(&self, contacts: &[Contact]) -> Result<()> {
    file::write_collection(&self.inner.path, contacts).await?;
    tracing::debug!(
      path = %self.inner.path.display(),
      count = contacts.len(),
      "persisted contacts"
    );
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for JsonFileStore {
  type Error = Error;

  async fn list(&self) -> Result<Vec<Contact>> { self.read().await }

  async fn get(&self, id: &str) -> Result<Contact> {
    self
      .read()
      .await?
      .into_iter()
      .find(|c| c.id == id)
      .ok_or_else(|| Error::NotFound(id.to_string()))
  }

  async fn add(&self, fields: NewContact) -> Result<Contact> {
    let _guard = self.inner.write_lock.lock().await;
    let mut contacts = self.read().await?;

    let contact = Contact::from_new(Uuid::new_v4().to_string(), fields);
    contacts.push(contact.clone());
    self.write(&contacts).await?;

    tracing::debug!(id = %contact.id, "added contact");
    Ok(contact)
  }

  async fn remove(&self, id: &str) -> Result<Contact> {
    let _guard = self.inner.write_lock.lock().await;
    let contacts = self.read().await?;
    let before = contacts.len();

    let (removed, kept): (Vec<Contact>, Vec<Contact>) =
      contacts.into_iter().partition(|c| c.id == id);
    if kept.len() == before {
      return Err(Error::NotFound(id.to_string()));
    }
    self.write(&kept).await?;

    tracing::debug!(id, "removed contact");
    removed
      .into_iter()
      .next()
      .ok_or_else(|| Error::NotFound(id.to_string()))
  }

  async fn update(&self, id: &str, patch: ContactPatch) -> Result<Contact> {
    let _guard = self.inner.write_lock.lock().await;
    let mut contacts = self.read().await?;

    let contact = contacts
      .iter_mut()
      .find(|c| c.id == id)
      .ok_or_else(|| Error::NotFound(id.to_string()))?;
    patch.apply(contact);
    let updated = contact.clone();
    self.write(&contacts).await?;

    tracing::debug!(id, "updated contact");
    Ok(updated)
  }
}
