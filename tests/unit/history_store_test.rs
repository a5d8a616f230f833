//! Unit tests for the HistoryStore public API.
//!
//! These tests exercise archiving, eviction, removal, clearing and recovery
//! through the `HistoryStoreTrait` interface, over in-memory SQLite and
//! scripted slot backends.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tempfile::TempDir;

use passforge::database::SlotStorage;
use passforge::managers::history_store::{
    HistoryStore, HistoryStoreTrait, HISTORY_SLOT, MAX_HISTORY,
};
use passforge::types::errors::HistoryError;
use passforge::types::history::HistoryEntry;
use passforge::types::policy::CharClassFlags;

/// Slot backend whose contents stay inspectable after the store takes it.
#[derive(Clone, Default)]
struct SharedSlots {
    slots: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<RefCell<bool>>,
}

impl SharedSlots {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl SlotStorage for SharedSlots {
    fn read_slot(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.get(key))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), String> {
        if *self.fail_writes.borrow() {
            return Err("quota exceeded".to_string());
        }
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_slot(&self, key: &str) -> Result<(), String> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

fn setup() -> HistoryStore {
    HistoryStore::in_memory().expect("Failed to open in-memory history")
}

#[test]
fn test_archive_records_metadata() {
    let mut store = setup();
    let entry = store.archive("Abc123!x").unwrap();

    assert_eq!(entry.value, "Abc123!x");
    assert_eq!(entry.length, 8);
    assert!(entry.char_classes.lower);
    assert!(entry.char_classes.upper);
    assert!(entry.char_classes.digit);
    assert!(entry.char_classes.symbol);
    assert!(entry.created_at > 0);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&entry.id), Some(&entry));
}

#[test]
fn test_archive_empty_value_is_ignored() {
    let mut store = setup();
    assert!(store.archive("").is_none());
    assert!(store.is_empty());
}

#[test]
fn test_list_is_newest_first() {
    let mut store = setup();
    store.archive("first");
    store.archive("second");
    store.archive("third");

    let values: Vec<String> = store.list().into_iter().map(|e| e.value).collect();
    assert_eq!(values, vec!["third", "second", "first"]);

    let entries = store.list();
    assert!(entries.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn test_ids_are_unique() {
    let mut store = setup();
    let a = store.archive("same").unwrap();
    let b = store.archive("same").unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_fifty_first_archive_evicts_oldest() {
    let mut store = setup();
    let oldest = store.archive("value-0").unwrap();
    for i in 1..=MAX_HISTORY {
        store.archive(&format!("value-{}", i));
    }

    assert_eq!(store.len(), MAX_HISTORY);
    assert_eq!(store.capacity(), 50);
    assert!(store.get(&oldest.id).is_none());
    assert_eq!(store.list()[0].value, format!("value-{}", MAX_HISTORY));
    assert_eq!(store.list()[MAX_HISTORY - 1].value, "value-1");
}

#[test]
fn test_remove_existing_entry() {
    let mut store = setup();
    let keep = store.archive("keep").unwrap();
    let gone = store.archive("gone").unwrap();

    store.remove(&gone.id);
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].id, keep.id);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut store = setup();
    store.archive("one");
    store.archive("two");
    let before = store.list();

    store.remove("does-not-exist");
    assert_eq!(store.list(), before);
}

#[test]
fn test_clear_empties_store_and_slot() {
    let slots = SharedSlots::default();
    let mut store = HistoryStore::load(Box::new(slots.clone()));
    store.archive("one");
    store.archive("two");
    assert!(slots.get(HISTORY_SLOT).is_some());

    store.clear();
    assert!(store.is_empty());
    assert!(slots.get(HISTORY_SLOT).is_none());
}

#[test]
fn test_every_change_is_persisted() {
    let slots = SharedSlots::default();
    let mut store = HistoryStore::load(Box::new(slots.clone()));

    let first = store.archive("alpha").unwrap();
    store.archive("beta");
    store.remove(&first.id);

    let persisted: Vec<HistoryEntry> =
        serde_json::from_str(&slots.get(HISTORY_SLOT).unwrap()).unwrap();
    assert_eq!(persisted, store.list());
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].value, "beta");
}

#[test]
fn test_reload_restores_entries_and_continues_ids() {
    let slots = SharedSlots::default();
    let saved = {
        let mut store = HistoryStore::load(Box::new(slots.clone()));
        store.archive("alpha");
        store.archive("beta");
        store.list()
    };

    let mut reloaded = HistoryStore::load(Box::new(slots.clone()));
    assert_eq!(reloaded.list(), saved);

    let next = reloaded.archive("gamma").unwrap();
    assert!(saved.iter().all(|e| e.id != next.id));
    assert!(next.id.starts_with("2-"));
}

#[test]
fn test_sequence_restarts_after_largest_stored_id() {
    let slots = SharedSlots::default();
    let stored = vec![HistoryEntry {
        id: format!("{}-abc", u64::MAX),
        value: "x".to_string(),
        created_at: 1_704_067_200_000,
        length: 1,
        char_classes: CharClassFlags::observe("x"),
    }];
    slots
        .write_slot(HISTORY_SLOT, &serde_json::to_string(&stored).unwrap())
        .unwrap();

    let mut store = HistoryStore::load(Box::new(slots.clone()));
    assert_eq!(store.len(), 1);

    let next = store.archive("y").unwrap();
    assert!(next.id.starts_with("0-"));
    assert_eq!(store.len(), 2);
    assert_ne!(store.list()[0].id, store.list()[1].id);
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let slots = SharedSlots::default();
    slots.write_slot(HISTORY_SLOT, "{not json").unwrap();

    let mut store = HistoryStore::load(Box::new(slots.clone()));
    assert!(store.is_empty());
    assert!(matches!(store.last_error(), Some(HistoryError::PersistenceCorrupt(_))));

    // The next write replaces the corrupt document.
    store.archive("fresh");
    assert!(store.last_error().is_none());
    let persisted: Vec<HistoryEntry> =
        serde_json::from_str(&slots.get(HISTORY_SLOT).unwrap()).unwrap();
    assert_eq!(persisted.len(), 1);
}

#[test]
fn test_write_failure_is_swallowed() {
    let slots = SharedSlots::default();
    *slots.fail_writes.borrow_mut() = true;

    let mut store = HistoryStore::load(Box::new(slots.clone()));
    let entry = store.archive("kept in memory");

    assert!(entry.is_some());
    assert_eq!(store.len(), 1);
    assert!(matches!(
        store.last_error(),
        Some(HistoryError::PersistenceWriteFailed(_))
    ));
    assert!(slots.get(HISTORY_SLOT).is_none());
}

#[test]
fn test_on_disk_history_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("passforge.db");

    let id = {
        let mut store = HistoryStore::open(&path).unwrap();
        store.archive("persisted").unwrap().id
    };

    let store = HistoryStore::open(&path).unwrap();
    assert_eq!(store.get(&id).map(|e| e.value.as_str()), Some("persisted"));
}

#[test]
fn test_wipe_clears_value() {
    let mut store = setup();
    let mut entry = store.archive("secret").unwrap();
    entry.wipe();
    assert!(entry.value.is_empty());
}
