//! Password Engine for Passforge.
//!
//! Builds random passwords from a [`CharsetPolicy`]. Archival is not done
//! here: callers hand the result to the history store explicitly.

use tracing::debug;

use crate::services::random_source::SharedRandom;
use crate::types::errors::GeneratorError;
use crate::types::policy::{Alphabet, CharsetPolicy};
use crate::types::secret::GeneratedSecret;

/// Trait defining password generation.
pub trait PasswordEngineTrait {
    fn generate(&self, policy: &CharsetPolicy) -> Result<GeneratedSecret, GeneratorError>;
}

/// Charset-based password generator.
pub struct PasswordEngine {
    rng: SharedRandom,
}

impl PasswordEngine {
    pub fn new(rng: SharedRandom) -> Self {
        Self { rng }
    }

    /// Draws `length` characters from an already resolved alphabet.
    pub(crate) fn fill(&self, alphabet: &Alphabet, length: usize) -> Result<String, GeneratorError> {
        let mut value = String::with_capacity(length);
        for _ in 0..length {
            let index = self.rng.next_index(alphabet.len())?;
            let c = alphabet.get(index).ok_or_else(|| {
                GeneratorError::InvalidPolicy(format!("index {} outside alphabet", index))
            })?;
            value.push(c);
        }
        Ok(value)
    }
}

impl PasswordEngineTrait for PasswordEngine {
    fn generate(&self, policy: &CharsetPolicy) -> Result<GeneratedSecret, GeneratorError> {
        policy.validate()?;
        let alphabet = Alphabet::for_policy(policy)?;
        debug!(
            length = policy.length,
            alphabet = alphabet.len(),
            "generating password"
        );
        let value = self.fill(&alphabet, policy.length)?;
        Ok(GeneratedSecret::new(value))
    }
}
