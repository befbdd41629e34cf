//! The expense ledger.
//!
//! A `Ledger` owns the newest-first sequence of expenses and the storage
//! adapter that mirrors it. Every mutation is applied in memory first and
//! then the full snapshot is written. A failed write never rolls back or
//! corrupts the in-memory state; it is reported to the caller as a warning.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{LedgerError, Result};
use crate::expense::{Expense, ExpenseId, NewExpense};
use crate::storage::document;
use crate::storage::StorageAdapter;

/// Outcome of writing the snapshot after a mutation.
#[derive(Debug)]
pub enum PersistStatus {
    Saved,
    /// The write failed; the in-memory ledger is still correct.
    Failed(LedgerError),
}

impl PersistStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Result of a ledger mutation together with its persistence outcome.
#[derive(Debug)]
#[must_use]
pub struct Mutation<T> {
    pub value: T,
    pub persist: PersistStatus,
}

impl<T> Mutation<T> {
    /// The persistence failure, if the write did not go through.
    pub fn warning(&self) -> Option<&LedgerError> {
        match &self.persist {
            PersistStatus::Saved => None,
            PersistStatus::Failed(err) => Some(err),
        }
    }
}

/// What `hydrate` found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// A well-formed document with this many expenses was loaded.
    Restored(usize),
    /// No document was stored.
    Empty,
    /// The document could not be used; the ledger starts empty.
    Recovered { reason: String },
}

/// In-memory ledger mirrored to a storage adapter.
pub struct Ledger<S> {
    storage: S,
    expenses: Vec<Expense>,
}

impl<S: StorageAdapter> Ledger<S> {
    /// Create an empty ledger. Call `hydrate` to load prior data.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            expenses: Vec::new(),
        }
    }

    /// Create a ledger and hydrate it from storage.
    pub fn open(storage: S) -> (Self, Hydration) {
        let mut ledger = Self::new(storage);
        let hydration = ledger.hydrate();
        (ledger, hydration)
    }

    /// Replace the in-memory sequence with the stored snapshot.
    ///
    /// An absent, unreadable, or malformed document leaves the ledger empty.
    /// Expenses repeating an earlier id are dropped.
    pub fn hydrate(&mut self) -> Hydration {
        self.expenses.clear();

        let raw = match self.storage.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(storage = %self.storage.describe(), "no stored ledger document");
                return Hydration::Empty;
            }
            Err(err) => {
                warn!(storage = %self.storage.describe(), error = %err, "ledger document unreadable; starting empty");
                return Hydration::Recovered {
                    reason: err.to_string(),
                };
            }
        };

        let parsed = match document::parse(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(storage = %self.storage.describe(), error = %err, "ledger document malformed; starting empty");
                return Hydration::Recovered {
                    reason: err.to_string(),
                };
            }
        };

        let mut seen = HashSet::new();
        for expense in parsed {
            if seen.insert(expense.id.clone()) {
                self.expenses.push(expense);
            } else {
                warn!(id = %expense.id, "dropping expense with duplicate id");
            }
        }

        debug!(count = self.expenses.len(), "hydrated ledger");
        Hydration::Restored(self.expenses.len())
    }

    /// Record a new expense stamped with the current instant.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` for a non-positive or non-finite
    /// amount or an empty category. The ledger is not touched in that case.
    pub fn create(&mut self, input: NewExpense) -> Result<Mutation<Expense>> {
        self.create_at(input, Utc::now())
    }

    /// Record a new expense stamped with `now`.
    pub fn create_at(&mut self, input: NewExpense, now: DateTime<Utc>) -> Result<Mutation<Expense>> {
        let mut expense = Expense::create(input, now)?;
        while self.find(&expense.id).is_some() {
            expense.id = ExpenseId::generate();
        }

        self.expenses.insert(0, expense.clone());
        debug!(id = %expense.id, amount = expense.amount, category = %expense.category, "created expense");

        let persist = self.persist();
        Ok(Mutation {
            value: expense,
            persist,
        })
    }

    /// Remove the expense with `id`, returning it if it existed.
    ///
    /// Deleting an unknown id is a no-op. The snapshot is written either way.
    pub fn delete(&mut self, id: &ExpenseId) -> Mutation<Option<Expense>> {
        let removed = self
            .expenses
            .iter()
            .position(|expense| &expense.id == id)
            .map(|idx| self.expenses.remove(idx));

        match &removed {
            Some(expense) => debug!(id = %expense.id, "deleted expense"),
            None => debug!(id = %id, "delete of unknown id ignored"),
        }

        let persist = self.persist();
        Mutation {
            value: removed,
            persist,
        }
    }

    /// Snapshot of all expenses, newest first.
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| &expense.id == id)
    }

    /// Resolve an exact id or a unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` when nothing matches and
    /// `LedgerError::InvalidInput` when the prefix is empty or ambiguous.
    pub fn resolve_prefix(&self, prefix: &str) -> Result<&Expense> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Expense ID must not be empty".to_string(),
            ));
        }
        if let Some(exact) = self.find(&ExpenseId::from(prefix)) {
            return Ok(exact);
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|expense| expense.id.as_str().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(only),
            (None, _) => Err(LedgerError::NotFound(format!(
                "No expense matches ID \"{}\"",
                prefix
            ))),
            (Some(_), Some(_)) => Err(LedgerError::InvalidInput(format!(
                "ID prefix \"{}\" matches more than one expense",
                prefix
            ))),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> PersistStatus {
        let written = document::serialize(&self.expenses)
            .and_then(|text| self.storage.save(&text));
        match written {
            Ok(()) => PersistStatus::Saved,
            Err(err) => {
                warn!(storage = %self.storage.describe(), error = %err, "failed to persist ledger; keeping in-memory state");
                PersistStatus::Failed(err)
            }
        }
    }
}

/// A ledger shared between threads.
///
/// Each mutation and its snapshot write happen under one lock, so every
/// observer sees a ledger that has been fully persisted (or reported as not).
pub struct SharedLedger<S> {
    inner: Arc<Mutex<Ledger<S>>>,
}

impl<S> Clone for SharedLedger<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: StorageAdapter> SharedLedger<S> {
    pub fn new(ledger: Ledger<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger<S>>> {
        self.inner
            .lock()
            .map_err(|_| LedgerError::Storage("Ledger lock poisoned".to_string()))
    }

    pub fn create(&self, input: NewExpense) -> Result<Mutation<Expense>> {
        self.lock()?.create(input)
    }

    pub fn delete(&self, id: &ExpenseId) -> Result<Mutation<Option<Expense>>> {
        Ok(self.lock()?.delete(id))
    }

    /// Owned copy of the current expenses, newest first.
    pub fn snapshot(&self) -> Result<Vec<Expense>> {
        Ok(self.lock()?.all().to_vec())
    }

    /// Run `f` against the ledger while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Ledger<S>) -> R) -> Result<R> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }
}
