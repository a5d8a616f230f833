//! Cryptographically secure index source backed by `ring`.
//!
//! Every random choice in the crate (password characters, word picks,
//! injected numbers, shuffles) goes through [`RandomSource`], so no output
//! ever depends on a non-cryptographic generator.

use std::sync::Arc;

use ring::rand::{SecureRandom, SystemRandom};

use crate::types::errors::GeneratorError;

/// Trait defining the uniform index source used by every engine.
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly distributed value in `[0, bound)`.
    ///
    /// Fails with `InvalidPolicy` for an empty range and `RngUnavailable`
    /// when the underlying generator cannot be read.
    fn next_index(&self, bound: usize) -> Result<usize, GeneratorError>;
}

/// Random source shared by all engines of one application instance.
pub type SharedRandom = Arc<dyn RandomSource>;

/// Implementation of [`RandomSource`] on the operating system CSPRNG.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    /// Creates a new SystemRandomSource instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Convenience constructor for the shared handle.
    pub fn shared() -> SharedRandom {
        Arc::new(Self::new())
    }

    fn next_u64(&self) -> Result<u64, GeneratorError> {
        let mut bytes = [0u8; 8];
        self.rng.fill(&mut bytes).map_err(|_| {
            GeneratorError::RngUnavailable("failed to read from the system CSPRNG".to_string())
        })?;
        Ok(u64::from_le_bytes(bytes))
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn next_index(&self, bound: usize) -> Result<usize, GeneratorError> {
        if bound == 0 {
            return Err(GeneratorError::InvalidPolicy(
                "cannot draw an index from an empty range".to_string(),
            ));
        }
        let bound = bound as u64;
        // Values below `threshold` would bias the modulo; redraw them.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u64()?;
            if value >= threshold {
                return Ok((value % bound) as usize);
            }
        }
    }
}
