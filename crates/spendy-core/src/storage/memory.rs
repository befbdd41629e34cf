//! In-process key-value storage with an optional byte quota.

use std::collections::HashMap;

use crate::error::{LedgerError, Result};
use crate::storage::traits::StorageAdapter;
use crate::storage::STORAGE_KEY;

/// Key-value map held in memory.
///
/// The quota counts the bytes of every stored key and value, the way browser
/// local storage does.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    key: String,
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: HashMap::new(),
            quota: None,
        }
    }

    /// Refuse writes that would grow the store past `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Seed the document stored under this adapter's key.
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.entries.insert(self.key.clone(), document.into());
        self
    }

    /// Raw access to any key, including ones other than the ledger's.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.entries.get(&self.key).cloned())
    }

    fn save(&mut self, document: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_excluding(&self.key) + self.key.len() + document.len();
            if needed > quota {
                return Err(LedgerError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(self.key.clone(), document.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("memory:{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        storage.save("[1]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[1]"));
        assert_eq!(storage.get(STORAGE_KEY), Some("[1]"));
    }

    #[test]
    fn test_quota_refuses_and_keeps_previous() {
        let mut storage = MemoryStorage::new().with_quota(STORAGE_KEY.len() + 4);
        storage.save("[  ]").unwrap();

        let err = storage.save("[1,2,3]").unwrap_err();
        assert!(matches!(err, LedgerError::QuotaExceeded { .. }));
        assert_eq!(storage.load().unwrap().as_deref(), Some("[  ]"));
    }

    #[test]
    fn test_keys_are_isolated() {
        let mut storage = MemoryStorage::with_key("a").with_document("x");
        storage.save("y").unwrap();
        assert_eq!(storage.get("a"), Some("y"));
        assert_eq!(storage.get(STORAGE_KEY), None);
    }
}
