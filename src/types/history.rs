use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::policy::CharClassFlags;

/// A single archived secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub value: String,
    /// Creation time in milliseconds since the UNIX epoch.
    pub created_at: i64,
    pub length: usize,
    pub char_classes: CharClassFlags,
}

impl HistoryEntry {
    /// Overwrites the stored secret before the entry is dropped.
    pub fn wipe(&mut self) {
        self.value.zeroize();
    }
}
