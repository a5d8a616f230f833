//! Batch Engine for Passforge.
//!
//! Repeats the password or passphrase engine and attaches a strength
//! report to every row. Rows are independent draws from the shared secure
//! source and are returned in request order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::passphrase_engine::{PassphraseEngine, PassphraseEngineTrait};
use crate::services::password_engine::PasswordEngine;
use crate::services::random_source::SharedRandom;
use crate::services::strength_estimator;
use crate::types::errors::GeneratorError;
use crate::types::passphrase::PassphrasePolicy;
use crate::types::policy::{Alphabet, CharsetPolicy};
use crate::types::secret::{BatchItem, GeneratedSecret};

pub use crate::types::settings::{MAX_BATCH_COUNT, MIN_BATCH_COUNT};

/// What each row of a batch is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BatchPolicy {
    Password(CharsetPolicy),
    Passphrase(PassphrasePolicy),
}

/// Trait defining batch generation.
pub trait BatchEngineTrait {
    fn generate_many(
        &self,
        policy: &BatchPolicy,
        count: usize,
    ) -> Result<Vec<BatchItem>, GeneratorError>;
}

/// Generates many secrets in one call.
pub struct BatchEngine {
    passwords: PasswordEngine,
    passphrases: PassphraseEngine,
}

impl BatchEngine {
    pub fn new(rng: SharedRandom) -> Self {
        Self {
            passwords: PasswordEngine::new(rng.clone()),
            passphrases: PassphraseEngine::new(rng),
        }
    }
}

impl BatchEngineTrait for BatchEngine {
    fn generate_many(
        &self,
        policy: &BatchPolicy,
        count: usize,
    ) -> Result<Vec<BatchItem>, GeneratorError> {
        if !(MIN_BATCH_COUNT..=MAX_BATCH_COUNT).contains(&count) {
            return Err(GeneratorError::InvalidPolicy(format!(
                "batch count must be between {} and {}, got {}",
                MIN_BATCH_COUNT, MAX_BATCH_COUNT, count
            )));
        }
        debug!(count, "generating batch");

        let mut items = Vec::with_capacity(count);
        match policy {
            BatchPolicy::Password(charset) => {
                // Validated and resolved once; rows only draw characters.
                charset.validate()?;
                let alphabet = Alphabet::for_policy(charset)?;
                for _ in 0..count {
                    let secret =
                        GeneratedSecret::new(self.passwords.fill(&alphabet, charset.length)?);
                    items.push(with_strength(secret));
                }
            }
            BatchPolicy::Passphrase(phrase) => {
                phrase.validate()?;
                for _ in 0..count {
                    items.push(with_strength(self.passphrases.generate(phrase)?));
                }
            }
        }
        Ok(items)
    }
}

fn with_strength(secret: GeneratedSecret) -> BatchItem {
    let strength = strength_estimator::analyze(secret.as_str());
    BatchItem { secret, strength }
}
