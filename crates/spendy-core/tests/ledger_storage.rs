use std::fs;

use spendy_core::aggregate;
use spendy_core::storage::{document, FileStorage, SqliteStorage};
use spendy_core::{ExpenseId, Hydration, Ledger, NewExpense, StorageAdapter};
use tempfile::tempdir;

#[test]
fn test_file_ledger_survives_reopen() {
    let dir = tempdir().expect("tempdir should be available");

    let created = {
        let (mut ledger, hydration) = Ledger::open(FileStorage::new(dir.path()));
        assert_eq!(hydration, Hydration::Empty);
        let first = ledger
            .create(NewExpense::new(4.5, "Transport").with_note("bus"))
            .expect("create should succeed");
        let second = ledger
            .create(NewExpense::new(20.0, "Food & Drinks"))
            .expect("create should succeed");
        assert!(first.persist.is_saved());
        assert!(second.persist.is_saved());
        vec![second.value, first.value]
    };

    let (ledger, hydration) = Ledger::open(FileStorage::new(dir.path()));
    assert_eq!(hydration, Hydration::Restored(2));
    assert_eq!(ledger.all(), created.as_slice());
    assert_eq!(aggregate::total(ledger.all()), 24.5);
}

#[test]
fn test_sqlite_ledger_survives_reopen() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("spendy.db");

    let id = {
        let storage = SqliteStorage::open(&path).expect("open should succeed");
        let (mut ledger, _) = Ledger::open(storage);
        let _ = ledger
            .create(NewExpense::new(1.0, "Bills"))
            .expect("create should succeed");
        ledger
            .create(NewExpense::new(2.0, "Bills"))
            .expect("create should succeed")
            .value
            .id
    };

    let storage = SqliteStorage::open(&path).expect("reopen should succeed");
    let (mut ledger, hydration) = Ledger::open(storage);
    assert_eq!(hydration, Hydration::Restored(2));
    assert_eq!(ledger.all()[0].id, id);

    let _ = ledger.delete(&id);
    let storage = SqliteStorage::open(&path).expect("reopen should succeed");
    let (ledger, _) = Ledger::open(storage);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_malformed_file_starts_empty_and_is_replaced_on_write() {
    let dir = tempdir().expect("tempdir should be available");
    let storage = FileStorage::new(dir.path());
    fs::write(storage.path(), "<<corrupted>>").expect("write should succeed");

    let (mut ledger, hydration) = Ledger::open(storage);
    assert!(matches!(hydration, Hydration::Recovered { .. }));
    assert!(ledger.is_empty());

    let _ = ledger
        .create(NewExpense::new(3.0, "Other"))
        .expect("create should succeed");
    let raw = ledger
        .storage()
        .load()
        .expect("load should succeed")
        .expect("document should exist");
    assert_eq!(document::parse(&raw).expect("parse should succeed").len(), 1);
}

#[test]
fn test_delete_missing_id_in_three_element_ledger() {
    let dir = tempdir().expect("tempdir should be available");
    let (mut ledger, _) = Ledger::open(FileStorage::new(dir.path()));
    for amount in [1.0, 2.0, 3.0] {
        let _ = ledger
            .create(NewExpense::new(amount, "Bills"))
            .expect("create should succeed");
    }
    let before = ledger.all().to_vec();

    let outcome = ledger.delete(&ExpenseId::from("not-in-ledger"));
    assert!(outcome.value.is_none());
    assert_eq!(ledger.all(), before.as_slice());

    let (reopened, _) = Ledger::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.all(), before.as_slice());
}

#[test]
fn test_unwritable_directory_reports_warning_but_keeps_state() {
    let dir = tempdir().expect("tempdir should be available");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write should succeed");

    let mut ledger = Ledger::new(FileStorage::new(blocker.join("data")));
    let created = ledger
        .create(NewExpense::new(7.0, "Entertainment"))
        .expect("validation should pass");

    assert!(created.warning().is_some());
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.all()[0].amount, 7.0);
}
