//! Directory-backed key-value storage: one JSON file per key.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::StorageAdapter;
use crate::storage::STORAGE_KEY;

/// Stores the document for `key` at `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    key: String,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    pub fn with_key(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    /// Path of the document file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StorageAdapter for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(LedgerError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn save(&mut self, document: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        let path = self.path();
        write_atomic(&path, document.as_bytes()).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), bytes = document.len(), "wrote ledger document");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested").join("data"));
        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));
        assert!(storage.path().ends_with("spendy-expenses.json"));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.save("first").unwrap();
        storage.save("second").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("second"));
    }
}
