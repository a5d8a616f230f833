use serde::{Deserialize, Serialize};

use super::errors::GeneratorError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// Every printable ASCII punctuation character.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Smallest password length a policy accepts.
pub const MIN_PASSWORD_LENGTH: usize = 4;
/// Largest password length a policy accepts.
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    /// All classes in alphabet order: lower, upper, digit, symbol.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Number of characters in the class (26, 26, 10, 32).
    pub fn size(&self) -> usize {
        self.chars().len()
    }

    /// Classifies a single character. Anything that is not an ASCII letter
    /// or digit counts as a symbol.
    pub fn of(c: char) -> CharClass {
        if c.is_ascii_lowercase() {
            CharClass::Lower
        } else if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }
}

/// Which character classes a policy enables, or a string contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClassFlags {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharClassFlags {
    /// Flags for the classes actually present in `value`.
    pub fn observe(value: &str) -> Self {
        let mut flags = Self::default();
        for c in value.chars() {
            flags.set(CharClass::of(c));
        }
        flags
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Digit => self.digit,
            CharClass::Symbol => self.symbol,
        }
    }

    fn set(&mut self, class: CharClass) {
        match class {
            CharClass::Lower => self.lower = true,
            CharClass::Upper => self.upper = true,
            CharClass::Digit => self.digit = true,
            CharClass::Symbol => self.symbol = true,
        }
    }

    /// Present classes in fixed order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    pub fn count(&self) -> usize {
        self.classes().count()
    }

    /// Sum of the sizes of the present classes.
    pub fn charset_size(&self) -> usize {
        self.classes().map(|c| c.size()).sum()
    }
}

/// Character classes and length for one random password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetPolicy {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub length: usize,
}

impl Default for CharsetPolicy {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            length: 16,
        }
    }
}

impl CharsetPolicy {
    /// Builds a validated policy.
    pub fn new(
        length: usize,
        lowercase: bool,
        uppercase: bool,
        digits: bool,
        symbols: bool,
    ) -> Result<Self, GeneratorError> {
        let policy = Self {
            lowercase,
            uppercase,
            digits,
            symbols,
            length,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that at least one class is enabled and the length is in range.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.enabled().count() == 0 {
            return Err(GeneratorError::InvalidPolicy(
                "at least one character class must be selected".to_string(),
            ));
        }
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidPolicy(format!(
                "length must be between {} and {}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.length
            )));
        }
        Ok(())
    }

    /// Enabled classes in fixed order.
    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(move |class| match class {
            CharClass::Lower => self.lowercase,
            CharClass::Upper => self.uppercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
        })
    }
}

/// The concatenated characters of a policy's enabled classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Resolves the alphabet for a policy. Fails when no class is enabled.
    pub fn for_policy(policy: &CharsetPolicy) -> Result<Self, GeneratorError> {
        let chars: Vec<char> = policy.enabled().flat_map(|c| c.chars().chars()).collect();
        if chars.is_empty() {
            return Err(GeneratorError::InvalidPolicy(
                "at least one character class must be selected".to_string(),
            ));
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}
