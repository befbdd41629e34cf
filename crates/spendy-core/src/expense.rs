//! The expense record and its creation input.
//!
//! An `Expense` is immutable once created. Its `date` is stored with
//! millisecond precision so that the persisted ISO-8601 text reproduces the
//! in-memory value exactly.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, Result};

/// Note stored when the caller omits one.
pub const DEFAULT_NOTE: &str = "No notes added";

/// Categories offered by the interface. The core accepts any non-empty text.
pub const KNOWN_CATEGORIES: [&str; 6] = [
    "Food & Drinks",
    "Shopping",
    "Transport",
    "Entertainment",
    "Bills",
    "Other",
];

/// Opaque expense identifier.
///
/// Fresh ids are UUID v4 text, but any string read back from storage is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 characters, for compact display.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ExpenseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the ledger
    pub id: ExpenseId,

    /// Amount spent, always positive for records created through the ledger
    pub amount: f64,

    /// Category name
    pub category: String,

    /// Free-text note
    pub note: String,

    /// Creation instant
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Build a new record from validated input, stamped at `now`.
    pub fn create(input: NewExpense, now: DateTime<Utc>) -> Result<Self> {
        input.validate()?;
        let note = match input.note {
            Some(note) if !note.trim().is_empty() => note.trim().to_string(),
            _ => DEFAULT_NOTE.to_string(),
        };
        Ok(Self {
            id: ExpenseId::generate(),
            amount: input.amount,
            category: input.category.trim().to_string(),
            note,
            date: now.trunc_subsecs(3),
        })
    }
}

/// Input for creating an expense.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
}

impl NewExpense {
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Check amount and category constraints.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if:
    /// - Amount is NaN, infinite, zero, or negative
    /// - Category is empty or whitespace
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() {
            return Err(LedgerError::Validation(
                "Amount must be a finite number".to_string(),
            ));
        }
        if self.amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "Amount must be greater than zero (got {})",
                self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Category must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix on write; any
/// RFC 3339 offset on read.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|e| serde::de::Error::custom(format!("invalid date {:?}: {}", raw, e)))
    }
}
