//! App Core for Passforge.
//!
//! Central struct holding the shared random source, the engines, the history
//! store and the settings engine. Both binaries drive the crate through it.

use std::error::Error;

use tracing::{debug, warn};

use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::services::batch_engine::{BatchEngine, BatchEngineTrait, BatchPolicy};
use crate::services::passphrase_engine::{PassphraseEngine, PassphraseEngineTrait};
use crate::services::password_engine::{PasswordEngine, PasswordEngineTrait};
use crate::services::random_source::{SharedRandom, SystemRandomSource};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::text_tools;
use crate::types::errors::GeneratorError;
use crate::types::passphrase::PassphrasePolicy;
use crate::types::policy::CharsetPolicy;
use crate::types::secret::{BatchItem, GeneratedSecret};

/// Central application struct holding all services and the history store.
pub struct App {
    pub rng: SharedRandom,
    pub passwords: PasswordEngine,
    pub passphrases: PassphraseEngine,
    pub batches: BatchEngine,
    pub history: HistoryStore,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates a new App on the system CSPRNG.
    ///
    /// Settings are loaded from `config_path` (or the platform default). A
    /// malformed settings file falls back to defaults. The history database
    /// is opened at the configured location.
    pub fn new(config_path: Option<String>) -> Result<Self, Box<dyn Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        if let Err(e) = settings_engine.load() {
            warn!(error = %e, "using default settings");
        }

        let history = HistoryStore::open(settings_engine.history_database_path())?;
        Ok(Self::with_parts(
            SystemRandomSource::shared(),
            settings_engine,
            history,
        ))
    }

    /// Assembles an App from already constructed parts.
    pub fn with_parts(
        rng: SharedRandom,
        settings_engine: SettingsEngine,
        history: HistoryStore,
    ) -> Self {
        Self {
            passwords: PasswordEngine::new(rng.clone()),
            passphrases: PassphraseEngine::new(rng.clone()),
            batches: BatchEngine::new(rng.clone()),
            rng,
            history,
            settings_engine,
        }
    }

    fn history_enabled(&self) -> bool {
        self.settings_engine.get_settings().history.enabled
    }

    /// Archives `secret` when history is enabled.
    pub fn archive(&mut self, secret: &GeneratedSecret) {
        if !self.history_enabled() {
            debug!("history disabled; not archiving");
            return;
        }
        self.history.archive(secret.as_str());
    }

    /// Generates a password and archives it when history is enabled.
    pub fn generate_password(
        &mut self,
        policy: &CharsetPolicy,
    ) -> Result<GeneratedSecret, GeneratorError> {
        let secret = self.passwords.generate(policy)?;
        self.archive(&secret);
        Ok(secret)
    }

    /// Generates a passphrase and archives it when history is enabled.
    pub fn generate_passphrase(
        &mut self,
        policy: &PassphrasePolicy,
    ) -> Result<GeneratedSecret, GeneratorError> {
        let secret = self.passphrases.generate(policy)?;
        self.archive(&secret);
        Ok(secret)
    }

    /// Generates `count` rows. Batch rows are never archived.
    pub fn generate_batch(
        &self,
        policy: &BatchPolicy,
        count: usize,
    ) -> Result<Vec<BatchItem>, GeneratorError> {
        self.batches.generate_many(policy, count)
    }

    /// Shuffles the characters of `value` with the shared random source.
    pub fn shuffle(&self, value: &str) -> Result<String, GeneratorError> {
        text_tools::shuffle(self.rng.as_ref(), value)
    }
}
