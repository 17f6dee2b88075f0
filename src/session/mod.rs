//! Durable session storage.
//!
//! A small key/value store with browser local-storage semantics. The session
//! identifier lives under [`SESSION_KEY`]; its absence means "logged out".

mod file;
mod login;
mod memory;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub use file::FileStorage;
pub use login::{LoginError, LoginFlow, UNEXPECTED_LOGIN_ERROR};
pub use memory::MemoryStorage;

/// Key holding the session identifier.
pub const SESSION_KEY: &str = "sessionId";

/// Throwaway key used by the writability probe.
pub const PROBE_KEY: &str = "__test__";

/// Errors raised by durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The device has no space left for the write.
    #[error("Storage is full at '{path}': {source}")]
    Full {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Storage could not be used at all.
    #[error("Storage unavailable at '{path}': {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Classify an io error raised while touching `path`.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::StorageFull {
            StorageError::Full { path, source }
        } else {
            StorageError::Unavailable { path, source }
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, StorageError::Full { .. })
    }
}

/// Local key/value storage that survives restarts.
pub trait DurableStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Write then delete a throwaway key.
    fn is_available(&self) -> bool {
        let probe = self
            .set_item(PROBE_KEY, PROBE_KEY)
            .and_then(|_| self.remove_item(PROBE_KEY));
        if let Err(e) = &probe {
            tracing::warn!(error = %e, "Storage probe failed");
        }
        probe.is_ok()
    }
}

/// Session identifier access on top of a [`DurableStorage`].
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn DurableStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn DurableStorage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &dyn DurableStorage {
        self.storage.as_ref()
    }

    /// The stored session id, treating unreadable storage as logged out.
    pub fn load(&self) -> Option<String> {
        match self.storage.get_item(SESSION_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read session");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }

    pub fn persist(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set_item(SESSION_KEY, token)?;
        tracing::info!("Session stored");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove_item(SESSION_KEY)?;
        tracing::info!("Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_full_classification() {
        let err = StorageError::from_io(
            PathBuf::from("/tmp/x"),
            io::Error::from(io::ErrorKind::StorageFull),
        );
        assert!(err.is_full());

        let err = StorageError::from_io(
            PathBuf::from("/tmp/x"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_full());
    }

    #[test]
    fn test_session_lifecycle() {
        let session = SessionStore::new(Arc::new(MemoryStorage::new()));
        assert!(!session.is_authenticated());

        session.persist("abc123").unwrap();
        assert_eq!(session.load().as_deref(), Some("abc123"));

        session.logout().unwrap();
        assert!(session.load().is_none());
    }

    #[test]
    fn test_empty_token_reads_as_logged_out() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "").unwrap();
        let session = SessionStore::new(Arc::new(storage));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_probe_leaves_no_key_behind() {
        let storage = MemoryStorage::new();
        assert!(storage.is_available());
        assert!(storage.get_item(PROBE_KEY).unwrap().is_none());
    }
}
