//! The persisted ledger document.
//!
//! The document is a JSON array of expense objects with the fields `id`,
//! `amount`, `category`, `note` and `date`, newest first. There is no version
//! field. Extra fields written by other tools are ignored on read.

use crate::error::{LedgerError, Result};
use crate::expense::Expense;

/// Serialize a ledger snapshot.
pub fn serialize(expenses: &[Expense]) -> Result<String> {
    serde_json::to_string(expenses).map_err(|e| {
        LedgerError::Storage(format!("Failed to serialize ledger document: {}", e))
    })
}

/// Parse a ledger document.
///
/// # Errors
///
/// Returns `LedgerError::Document` if the text is not JSON, is not an array,
/// or any element is missing a field or has the wrong type.
pub fn parse(document: &str) -> Result<Vec<Expense>> {
    let expenses: Vec<Expense> = serde_json::from_str(document)?;
    Ok(expenses)
}
