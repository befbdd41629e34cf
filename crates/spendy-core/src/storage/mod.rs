//! Storage layer for Spendy.
//!
//! The ledger is persisted as a single serialized document under a fixed key.
//! Adapters only move opaque text; the `document` module owns the format.

pub mod document;
mod file;
mod memory;
mod sqlite;
pub mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use traits::StorageAdapter;

/// Key under which the ledger document is stored.
pub const STORAGE_KEY: &str = "spendy-expenses";
