//! Error types for Spendy core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Spendy operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Rejected creation input (amount, category)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// The storage backend refused a write because it would exceed its quota
    #[error("Storage quota exceeded: document is {needed} bytes, quota is {quota} bytes")]
    QuotaExceeded { needed: usize, quota: usize },

    /// The persisted document could not be parsed
    #[error("Malformed ledger document: {0}")]
    Document(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Document(err.to_string())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        LedgerError::Storage(format!("SQLite error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_message_names_sizes() {
        let err = LedgerError::QuotaExceeded {
            needed: 120,
            quota: 64,
        };
        let message = err.to_string();
        assert!(message.contains("120"));
        assert!(message.contains("64"));
    }

    #[test]
    fn test_json_errors_map_to_document() {
        let err: LedgerError = serde_json::from_str::<Vec<u8>>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, LedgerError::Document(_)));
    }
}
