//! Directory-backed storage: one file per key.

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::SessionConfig;

use super::{DurableStorage, StorageError};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Use `session.storage_dir`, or `<data dir>/cinescope`.
    pub fn from_config(config: &SessionConfig) -> Self {
        let dir = config.storage_dir.clone().unwrap_or_else(Self::default_dir);
        Self::new(dir)
    }

    /// Falls back to the current directory if the data dir is unavailable.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cinescope")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl DurableStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.item_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::from_io(path, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::from_io(self.dir.clone(), e))?;

        let path = self.item_path(key);
        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(&path)?;
            // Held until the file is closed; truncate only under the lock.
            file.lock_exclusive()?;
            file.set_len(0)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()
        };
        write().map_err(|e| StorageError::from_io(path.clone(), e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.item_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from_io(path, e)),
        }
    }
}
