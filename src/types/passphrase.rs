use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::GeneratorError;

pub const MIN_WORD_COUNT: usize = 2;
pub const MAX_WORD_COUNT: usize = 8;

/// Identifies one of the built-in word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordListId {
    Common,
    Memorable,
    Technical,
}

impl WordListId {
    pub fn all() -> [WordListId; 3] {
        [WordListId::Common, WordListId::Memorable, WordListId::Technical]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordListId::Common => "common",
            WordListId::Memorable => "memorable",
            WordListId::Technical => "technical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WordListId::Common => "Common Words",
            WordListId::Memorable => "Memorable Words",
            WordListId::Technical => "Technical Words",
        }
    }
}

impl fmt::Display for WordListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordListId {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(WordListId::Common),
            "memorable" => Ok(WordListId::Memorable),
            "technical" => Ok(WordListId::Technical),
            other => Err(GeneratorError::InvalidPolicy(format!(
                "unknown word list: {}",
                other
            ))),
        }
    }
}

/// Text placed between passphrase words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Separator {
    Hyphen,
    Underscore,
    Period,
    Space,
    None,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Hyphen => "-",
            Separator::Underscore => "_",
            Separator::Period => ".",
            Separator::Space => " ",
            Separator::None => "",
        }
    }
}

impl FromStr for Separator {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Separator::Hyphen),
            "_" => Ok(Separator::Underscore),
            "." => Ok(Separator::Period),
            " " => Ok(Separator::Space),
            "" => Ok(Separator::None),
            other => Err(GeneratorError::InvalidPolicy(format!(
                "unsupported separator: {:?}",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = GeneratorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Separator> for String {
    fn from(value: Separator) -> Self {
        value.as_str().to_string()
    }
}

/// Where random numbers are injected into a passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPlacement {
    None,
    Prefix,
    Suffix,
    Between,
}

impl FromStr for NumberPlacement {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(NumberPlacement::None),
            "prefix" => Ok(NumberPlacement::Prefix),
            "suffix" => Ok(NumberPlacement::Suffix),
            "between" => Ok(NumberPlacement::Between),
            other => Err(GeneratorError::InvalidPolicy(format!(
                "unknown number placement: {}",
                other
            ))),
        }
    }
}

/// Settings for one word-based passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassphrasePolicy {
    pub word_count: usize,
    pub list: WordListId,
    pub separator: Separator,
    pub capitalize: bool,
    pub number_placement: NumberPlacement,
}

impl Default for PassphrasePolicy {
    fn default() -> Self {
        Self {
            word_count: 4,
            list: WordListId::Common,
            separator: Separator::Hyphen,
            capitalize: true,
            number_placement: NumberPlacement::Suffix,
        }
    }
}

impl PassphrasePolicy {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&self.word_count) {
            return Err(GeneratorError::InvalidPolicy(format!(
                "word count must be between {} and {}, got {}",
                MIN_WORD_COUNT, MAX_WORD_COUNT, self.word_count
            )));
        }
        Ok(())
    }
}
