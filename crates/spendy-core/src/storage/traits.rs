//! Storage adapter trait definition.
//!
//! The `StorageAdapter` trait is the whole-document persistence collaborator
//! of the ledger. Backends (memory, JSON file, SQLite key-value table) are
//! interchangeable without changing the ledger.

use crate::error::Result;

/// Whole-document key-value persistence.
///
/// All implementations must ensure:
/// - `load` after a successful `save` returns exactly the saved text
/// - A failed `save` leaves the previously stored document readable
/// - A missing document is `Ok(None)`, never an error
pub trait StorageAdapter: Send {
    /// Read the stored document, if any.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the backend cannot be read.
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the stored document.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` or `LedgerError::QuotaExceeded` if the
    /// write is refused.
    fn save(&mut self, document: &str) -> Result<()>;

    /// Human-readable location, for diagnostics.
    fn describe(&self) -> String;
}

impl<S: StorageAdapter + ?Sized> StorageAdapter for Box<S> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&mut self, document: &str) -> Result<()> {
        (**self).save(document)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_boxed_adapter_delegates() {
        let mut boxed: Box<dyn StorageAdapter> = Box::new(MemoryStorage::new());
        assert!(boxed.load().unwrap().is_none());
        boxed.save("[]").unwrap();
        assert_eq!(boxed.load().unwrap().as_deref(), Some("[]"));
        assert!(boxed.describe().contains("memory"));
    }
}
