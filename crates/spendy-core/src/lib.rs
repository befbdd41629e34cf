//! # Spendy Core
//!
//! Core library for Spendy - a small, local-first personal expense tracker.
//!
//! This crate provides the expense ledger, its persistence contract, and the
//! pure aggregations used to render summaries, independent of any interface.
//!
//! ## Architecture
//!
//! - **expense**: The `Expense` record and creation input validation
//! - **ledger**: The in-memory, newest-first ledger and its mutations
//! - **aggregate**: Pure totals, windows, and category breakdowns
//! - **storage**: Key-value storage adapters and the persisted document codec
//!
//! ## Persistence model
//!
//! Every mutation rewrites the full snapshot under a single key. There is no
//! log and no diffing; a ledger of `n` expenses costs `O(n)` per write.

pub mod aggregate;
pub mod error;
pub mod expense;
pub mod fs;
pub mod ledger;
pub mod storage;

pub use error::{LedgerError, Result};
pub use expense::{Expense, ExpenseId, NewExpense, DEFAULT_NOTE, KNOWN_CATEGORIES};
pub use ledger::{Hydration, Ledger, Mutation, PersistStatus, SharedLedger};
pub use storage::StorageAdapter;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
