//! Helpers for hand-typed strings: class breakdown and secure shuffle.

use serde::{Deserialize, Serialize};

use crate::services::random_source::RandomSource;
use crate::types::errors::GeneratorError;
use crate::types::policy::CharClass;

/// Per-class character counts of a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCounts {
    pub total: usize,
    pub lowercase: usize,
    pub uppercase: usize,
    pub digits: usize,
    pub symbols: usize,
}

impl CharacterCounts {
    pub fn of(value: &str) -> Self {
        let mut counts = Self::default();
        for c in value.chars() {
            counts.total += 1;
            match CharClass::of(c) {
                CharClass::Lower => counts.lowercase += 1,
                CharClass::Upper => counts.uppercase += 1,
                CharClass::Digit => counts.digits += 1,
                CharClass::Symbol => counts.symbols += 1,
            }
        }
        counts
    }
}

/// Returns the characters of `value` in a uniformly random order
/// (Fisher-Yates driven by the secure source).
pub fn shuffle(rng: &dyn RandomSource, value: &str) -> Result<String, GeneratorError> {
    let mut chars: Vec<char> = value.chars().collect();
    for i in (1..chars.len()).rev() {
        let j = rng.next_index(i + 1)?;
        chars.swap(i, j);
    }
    Ok(chars.into_iter().collect())
}
