//! Property-based tests for HistoryStore operations.
//!
//! Any sequence of archives keeps the ledger capped, newest first, with
//! unique ids, and removing an unknown id never changes it.

use std::collections::HashSet;

use passforge::managers::history_store::{HistoryStore, HistoryStoreTrait, MAX_HISTORY};
use proptest::prelude::*;

fn arb_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,24}", 0..80)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn archive_sequence_respects_cap_and_order(values in arb_values()) {
        let mut store = HistoryStore::in_memory().expect("in-memory history");
        for value in &values {
            store.archive(value);
        }

        let kept: Vec<&String> = values.iter().filter(|v| !v.is_empty()).collect();
        let entries = store.list();

        prop_assert_eq!(entries.len(), kept.len().min(MAX_HISTORY));
        for (entry, value) in entries.iter().zip(kept.iter().rev()) {
            prop_assert_eq!(&entry.value, *value);
        }
        prop_assert!(entries.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn removing_unknown_id_is_noop(values in arb_values(), id in "[a-z]{1,12}") {
        let mut store = HistoryStore::in_memory().expect("in-memory history");
        for value in &values {
            store.archive(value);
        }
        let before = store.list();
        store.remove(&id);
        prop_assert_eq!(store.list(), before);
    }
}
