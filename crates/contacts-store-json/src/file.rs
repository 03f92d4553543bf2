//! Whole-file read and write of the contact collection.

use std::path::{Path, PathBuf};

use contacts_core::Contact;
use uuid::Uuid;

use crate::{Error, Result};

pub async fn read_collection(path: &Path) -> Result<Vec<Contact>> {
  let bytes = tokio::fs::read(path).await.map_err(|source| Error::Read {
    path: path.to_path_buf(),
    source,
  })?;
  serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
    path: path.to_path_buf(),
    source,
  })
}

/// Replace the file contents with `contacts`.
///
/// The data is written to a sibling temp file and renamed into place, so a
/// failed write leaves the previous contents intact.
pub async fn write_collection(path: &Path, contacts: &[Contact]) -> Result<()> {
  write_via(path, &temp_path(path), contacts).await
}

async fn write_via(path: &Path, tmp: &Path, contacts: &[Contact]) -> Result<()> {
  let json = serde_json::to_vec_pretty(contacts).map_err(Error::Serialize)?;

  let written = match tokio::fs::write(tmp, json).await {
    Ok(()) => tokio::fs::rename(tmp, path).await,
    Err(e) => Err(e),
  };
  if let Err(source) = written {
    let _ = tokio::fs::remove_file(tmp).await;
    return Err(Error::Write {
      path: path.to_path_buf(),
      source,
    });
  }
  Ok(())
}

/// Create `path` holding an empty array unless it already exists.
///
/// Returns `true` when the file was created.
pub async fn bootstrap(path: &Path) -> Result<bool> {
  let exists = tokio::fs::try_exists(path).await.map_err(|source| Error::Read {
    path: path.to_path_buf(),
    source,
  })?;
  if exists {
    return Ok(false);
  }

  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    tokio::fs::create_dir_all(parent)
      .await
      .map_err(|source| Error::Write {
        path: parent.to_path_buf(),
        source,
      })?;
  }
  write_collection(path, &[]).await?;
  Ok(true)
}

fn temp_path(path: &Path) -> PathBuf {
  let name = path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| "contacts".to_string());
  path.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn jane() -> Contact {
    Contact {
      id:    "c-1".into(),
      name:  "Jane Doe".into(),
      email: "jane@example.com".into(),
      phone: "(212) 555-0100".into(),
    }
  }

  #[tokio::test]
  async fn failed_temp_write_keeps_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    write_collection(&path, &[jane()]).await.unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let tmp = dir.path().join("missing-dir/contacts.tmp");
    let err = write_via(&path, &tmp, &[]).await.unwrap_err();
    assert!(matches!(err, Error::Write { .. }), "{err}");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert_eq!(read_collection(&path).await.unwrap(), [jane()]);
  }

  #[tokio::test]
  async fn failed_rename_removes_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // A non-empty directory cannot be replaced by a file.
    let path = dir.path().join("contacts.json");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();

    let tmp = dir.path().join(".contacts.json.tmp");
    let err = write_via(&path, &tmp, &[jane()]).await.unwrap_err();
    assert!(matches!(err, Error::Write { .. }), "{err}");

    assert!(!tmp.exists());
    assert!(path.join("keep").exists());
  }
}
