//! Passphrase Engine for Passforge.
//!
//! Composes words from a built-in list with a separator, optional
//! capitalization, and optional random numbers.

use tracing::debug;

use crate::services::random_source::SharedRandom;
use crate::services::word_lists;
use crate::types::errors::GeneratorError;
use crate::types::passphrase::{NumberPlacement, PassphrasePolicy};
use crate::types::secret::GeneratedSecret;

/// Upper bound (exclusive) for prefix and suffix numbers.
const EDGE_NUMBER_BOUND: usize = 1000;
/// Upper bound (exclusive) for digits placed between words.
const BETWEEN_DIGIT_BOUND: usize = 10;

/// Trait defining passphrase generation.
pub trait PassphraseEngineTrait {
    fn generate(&self, policy: &PassphrasePolicy) -> Result<GeneratedSecret, GeneratorError>;
}

/// Word-list passphrase generator.
pub struct PassphraseEngine {
    rng: SharedRandom,
}

impl PassphraseEngine {
    pub fn new(rng: SharedRandom) -> Self {
        Self { rng }
    }

    fn pick_words(&self, policy: &PassphrasePolicy) -> Result<Vec<String>, GeneratorError> {
        let list = word_lists::words(policy.list);
        let mut picked = Vec::with_capacity(policy.word_count);
        for _ in 0..policy.word_count {
            let index = self.rng.next_index(list.len())?;
            let word = list.get(index).ok_or_else(|| {
                GeneratorError::InvalidPolicy(format!("index {} outside word list", index))
            })?;
            picked.push(if policy.capitalize {
                capitalize(word)
            } else {
                word.to_string()
            });
        }
        Ok(picked)
    }
}

impl PassphraseEngineTrait for PassphraseEngine {
    fn generate(&self, policy: &PassphrasePolicy) -> Result<GeneratedSecret, GeneratorError> {
        policy.validate()?;
        debug!(
            words = policy.word_count,
            list = %policy.list,
            placement = ?policy.number_placement,
            "generating passphrase"
        );

        let words = self.pick_words(policy)?;
        let sep = policy.separator.as_str();

        let value = match policy.number_placement {
            NumberPlacement::None => words.join(sep),
            NumberPlacement::Prefix => {
                let n = self.rng.next_index(EDGE_NUMBER_BOUND)?;
                format!("{}{}{}", n, sep, words.join(sep))
            }
            NumberPlacement::Suffix => {
                let n = self.rng.next_index(EDGE_NUMBER_BOUND)?;
                format!("{}{}{}", words.join(sep), sep, n)
            }
            NumberPlacement::Between => {
                let last = words.len() - 1;
                let mut parts = Vec::with_capacity(words.len());
                for (i, word) in words.iter().enumerate() {
                    if i < last {
                        let digit = self.rng.next_index(BETWEEN_DIGIT_BOUND)?;
                        parts.push(format!("{}{}", word, digit));
                    } else {
                        parts.push(word.clone());
                    }
                }
                parts.join(sep)
            }
        };

        Ok(GeneratedSecret::new(value))
    }
}

/// Uppercases the first letter of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
