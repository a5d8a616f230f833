use serde::{Deserialize, Serialize};

use super::errors::GeneratorError;
use super::passphrase::PassphrasePolicy;
use super::policy::{CharsetPolicy, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub const MIN_BATCH_COUNT: usize = 1;
pub const MAX_BATCH_COUNT: usize = 50;

/// Top-level generator settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneratorSettings {
    pub password: CharsetPolicy,
    pub passphrase: PassphrasePolicy,
    pub batch: BatchSettings,
    pub history: HistorySettings,
}

/// Defaults for batch generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchSettings {
    pub count: usize,
    pub length: usize,
}

impl BatchSettings {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(MIN_BATCH_COUNT..=MAX_BATCH_COUNT).contains(&self.count) {
            return Err(GeneratorError::InvalidPolicy(format!(
                "batch count must be between {} and {}, got {}",
                MIN_BATCH_COUNT, MAX_BATCH_COUNT, self.count
            )));
        }
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidPolicy(format!(
                "batch length must be between {} and {}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.length
            )));
        }
        Ok(())
    }
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            count: 5,
            length: 16,
        }
    }
}

/// History archival settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    /// Archive every generated secret.
    pub enabled: bool,
    /// Overrides `<data dir>/passforge.db` when set.
    pub database_path: Option<String>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            database_path: None,
        }
    }
}
