//! Named key/value slots.
//!
//! A slot holds one serialized document, read at startup and overwritten
//! on every change. [`Database`] stores slots in the `kv_slots` table.

use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};

use super::connection::Database;

/// Trait defining device-local slot persistence.
pub trait SlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, String>;
    fn write_slot(&self, key: &str, value: &str) -> Result<(), String>;
    fn delete_slot(&self, key: &str) -> Result<(), String>;
}

impl SlotStorage for Database {
    fn read_slot(&self, key: &str) -> Result<Option<String>, String> {
        self.connection()
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| e.to_string())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        self.connection()
            .execute(
                "INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    fn delete_slot(&self, key: &str) -> Result<(), String> {
        self.connection()
            .execute("DELETE FROM kv_slots WHERE key = ?1", params![key])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
