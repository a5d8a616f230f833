//! History Store for Passforge.
//!
//! Keeps the last [`MAX_HISTORY`] archived secrets, newest first, and
//! persists the whole ledger to a single key/value slot after every change.
//! Persistence is best-effort: a corrupt slot starts the store empty, and a
//! failed write is logged and otherwise ignored.

use std::collections::VecDeque;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::database::{Database, SlotStorage};
use crate::types::errors::HistoryError;
use crate::types::history::HistoryEntry;
use crate::types::policy::CharClassFlags;

/// Maximum number of retained entries.
pub const MAX_HISTORY: usize = 50;

/// Slot key the ledger is stored under.
pub const HISTORY_SLOT: &str = "password_history";

/// Trait defining history ledger operations.
pub trait HistoryStoreTrait {
    /// Archives a secret. Returns `None` and does nothing for an empty value.
    fn archive(&mut self, value: &str) -> Option<HistoryEntry>;
    /// Removes one entry. Unknown ids are ignored.
    fn remove(&mut self, id: &str);
    /// Removes every entry and the persisted slot.
    fn clear(&mut self);
    /// Snapshot of all entries, newest first.
    fn list(&self) -> Vec<HistoryEntry>;
    fn get(&self, id: &str) -> Option<&HistoryEntry>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Capped, newest-first ledger of archived secrets.
pub struct HistoryStore {
    storage: Box<dyn SlotStorage>,
    entries: VecDeque<HistoryEntry>,
    next_sequence: u64,
    last_error: Option<HistoryError>,
}

impl HistoryStore {
    /// Loads the ledger from `storage`, starting empty if the slot is
    /// missing, unreadable, or corrupt.
    pub fn load(storage: Box<dyn SlotStorage>) -> Self {
        let mut last_error = None;
        let mut entries = match storage.read_slot(HISTORY_SLOT) {
            Ok(Some(text)) => match serde_json::from_str::<VecDeque<HistoryEntry>>(&text) {
                Ok(entries) => entries,
                Err(e) => {
                    let err = HistoryError::PersistenceCorrupt(e.to_string());
                    warn!(error = %err, "discarding unreadable history");
                    last_error = Some(err);
                    VecDeque::new()
                }
            },
            Ok(None) => VecDeque::new(),
            Err(e) => {
                let err = HistoryError::PersistenceCorrupt(e);
                warn!(error = %err, "history slot could not be read");
                last_error = Some(err);
                VecDeque::new()
            }
        };

        // Re-establish the ordering and cap in case the slot was edited.
        entries
            .make_contiguous()
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));
        while entries.len() > MAX_HISTORY {
            if let Some(mut evicted) = entries.pop_back() {
                evicted.wipe();
            }
        }

        let next_sequence = entries
            .iter()
            .filter_map(|e| sequence_of(&e.id))
            .max()
            .and_then(|max| max.checked_add(1))
            .unwrap_or(0);

        debug!(entries = entries.len(), "history loaded");
        Self {
            storage,
            entries,
            next_sequence,
            last_error,
        }
    }

    /// Opens (or creates) the SQLite database at `path` and loads the ledger.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let db = Database::open(path).map_err(|e| HistoryError::StorageError(e.to_string()))?;
        Ok(Self::load(Box::new(db)))
    }

    /// A store backed by a throwaway in-memory database.
    pub fn in_memory() -> Result<Self, HistoryError> {
        let db = Database::open_in_memory().map_err(|e| HistoryError::StorageError(e.to_string()))?;
        Ok(Self::load(Box::new(db)))
    }

    pub fn capacity(&self) -> usize {
        MAX_HISTORY
    }

    /// The most recent persistence problem, if any. Cleared by the next
    /// successful write.
    pub fn last_error(&self) -> Option<&HistoryError> {
        self.last_error.as_ref()
    }

    fn next_id(&mut self) -> String {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        format!("{}-{}", sequence, Uuid::new_v4().simple())
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(|e| e.to_string())
            .and_then(|json| self.storage.write_slot(HISTORY_SLOT, &json));
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                let err = HistoryError::PersistenceWriteFailed(e);
                warn!(error = %err, "history not saved");
                self.last_error = Some(err);
            }
        }
    }
}

impl HistoryStoreTrait for HistoryStore {
    fn archive(&mut self, value: &str) -> Option<HistoryEntry> {
        if value.is_empty() {
            return None;
        }

        // Never older than the current newest entry, so the ledger stays
        // ordered even if the wall clock steps backwards.
        let created_at = match self.entries.front() {
            Some(newest) => now_millis().max(newest.created_at),
            None => now_millis(),
        };

        let entry = HistoryEntry {
            id: self.next_id(),
            value: value.to_string(),
            created_at,
            length: value.chars().count(),
            char_classes: CharClassFlags::observe(value),
        };

        self.entries.push_front(entry.clone());
        while self.entries.len() > MAX_HISTORY {
            if let Some(mut evicted) = self.entries.pop_back() {
                evicted.wipe();
            }
        }
        self.persist();
        Some(entry)
    }

    fn remove(&mut self, id: &str) {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return;
        };
        if let Some(mut removed) = self.entries.remove(pos) {
            removed.wipe();
        }
        self.persist();
    }

    fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.wipe();
        }
        self.entries.clear();
        match self.storage.delete_slot(HISTORY_SLOT) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                let err = HistoryError::PersistenceWriteFailed(e);
                warn!(error = %err, "history slot not removed");
                self.last_error = Some(err);
            }
        }
        info!("history cleared");
    }

    fn list(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for HistoryStore {
    fn drop(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.wipe();
        }
    }
}

/// Sequence number encoded in front of an entry id.
fn sequence_of(id: &str) -> Option<u64> {
    id.split_once('-').and_then(|(seq, _)| seq.parse().ok())
}

/// Current time in milliseconds since the UNIX epoch.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Describes how long ago `created_at` was, relative to `now` (both in ms).
pub fn relative_age(created_at: i64, now: i64) -> String {
    let diff = (now - created_at).max(0);
    let mins = diff / 60_000;
    let hours = diff / 3_600_000;
    let days = diff / 86_400_000;

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{} min{} ago", mins, plural(mins))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        format_date(created_at)
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

/// `YYYY-MM-DD` (UTC) for a millisecond timestamp.
fn format_date(millis: i64) -> String {
    let days = millis.div_euclid(86_400_000);
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    format!("{:04}-{:02}-{:02}", year, month, day)
}
