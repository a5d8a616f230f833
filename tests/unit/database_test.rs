//! Unit tests for the Passforge database layer (connection, migrations, slots).

use passforge::database::migrations::{get_schema_version, run_all, CURRENT_SCHEMA_VERSION};
use passforge::database::{Database, SlotStorage};
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_slot_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='kv_slots'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "kv_slots should exist after migrations");
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let result = run_all(db.connection());
    assert!(result.is_ok(), "Running migrations twice should succeed (idempotent)");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_slot_write_read_overwrite_delete() {
    let db = Database::open_in_memory().unwrap();

    assert_eq!(db.read_slot("password_history").unwrap(), None);

    db.write_slot("password_history", "[]").unwrap();
    assert_eq!(db.read_slot("password_history").unwrap().as_deref(), Some("[]"));

    db.write_slot("password_history", "[1]").unwrap();
    assert_eq!(db.read_slot("password_history").unwrap().as_deref(), Some("[1]"));

    db.delete_slot("password_history").unwrap();
    assert_eq!(db.read_slot("password_history").unwrap(), None);
}

#[test]
fn test_deleting_missing_slot_is_ok() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.delete_slot("nothing-here").is_ok());
}

#[test]
fn test_file_database_persists_slots_across_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("passforge.db");

    {
        let db = Database::open(&path).expect("open should create parent dirs");
        db.write_slot("k", "v").unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.read_slot("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_open_under_a_file_fails_without_panicking() {
    let tmp = TempDir::new().expect("tempdir");
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("write blocker");

    let result = Database::open(blocker.join("nested").join("history.db"));
    assert!(result.is_err());
}
