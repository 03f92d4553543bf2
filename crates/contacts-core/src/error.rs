//! Error classification shared by every store backend.

/// The broad category of a store failure.
///
/// Callers switch on the kind rather than on error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// The referenced contact id is absent from the collection.
  NotFound,
  /// The backing storage could not be read or parsed.
  StorageRead,
  /// The backing storage could not be written.
  StorageWrite,
}

/// Implemented by the error type of every [`ContactStore`](crate::ContactStore)
/// backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> ErrorKind;

  fn is_not_found(&self) -> bool { self.kind() == ErrorKind::NotFound }
}
