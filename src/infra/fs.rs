//! Directory-backed key-value area with atomic writes.

use crate::infra::kv::{KeyValueStore, KvError, validate_key};
use log::{debug, trace};
use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File extension appended to every key.
const VALUE_EXTENSION: &str = "json";

impl KvError {
    /// Creates an appropriate KvError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => KvError::PermissionDenied { path: path.into() },
            _ => KvError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Key-value area stored as one file per key under a root directory.
///
/// The value for `key` lives at `<root>/<key>.json`. The root directory is
/// created on the first write, so a store pointed at a missing directory
/// reads as empty.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the file path backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, KvError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }

    fn ensure_root(&self) -> Result<(), KvError> {
        if !self.root.is_dir() {
            debug!("creating storage directory {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(|e| KvError::from_io(&self.root, e))?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                trace!("read {} bytes from {}", bytes.len(), path.display());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::from_io(&path, e)),
        }
    }

    /// Writes through a temporary file in the same directory and renames it
    /// over the target, so readers see either the old or the new value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        let path = self.path_for(key)?;
        self.ensure_root()?;

        let mut temp = NamedTempFile::new_in(&self.root).map_err(|e| KvError::from_io(&path, e))?;
        temp.write_all(value)
            .map_err(|e| KvError::from_io(&path, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| KvError::from_io(&path, e))?;

        temp.persist(&path).map_err(|e| KvError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        trace!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KvError::from_io(&path, e)),
        }
    }
}
