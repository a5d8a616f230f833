use std::fmt;

use serde::{Deserialize, Serialize};

use super::policy::CharClassFlags;

/// Highest raw score the estimator can award.
pub const MAX_RAW_SCORE: u8 = 8;
/// Highest normalized score.
pub const MAX_SCORE: u8 = 4;

/// Human label derived from the raw 0-8 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "No Password")]
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "No Password",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Label thresholds on the raw score: <=2 weak, <=4 fair, <=6 good.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Fair,
            5..=6 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of analyzing a single string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Normalized 0-4 score used for meter bars.
    pub score: u8,
    /// Raw 0-8 score the label is derived from.
    pub raw_score: u8,
    pub label: StrengthLabel,
    pub entropy_bits: f64,
    pub crack_time_seconds: f64,
    pub crack_time: String,
    pub char_classes: CharClassFlags,
    pub length: usize,
    pub unique_chars: usize,
}

impl StrengthReport {
    /// Report for the empty string.
    pub fn empty() -> Self {
        Self {
            score: 0,
            raw_score: 0,
            label: StrengthLabel::None,
            entropy_bits: 0.0,
            crack_time_seconds: 0.0,
            crack_time: "Instantly".to_string(),
            char_classes: CharClassFlags::default(),
            length: 0,
            unique_chars: 0,
        }
    }

    /// Entropy rounded to whole bits, as shown to users.
    pub fn rounded_entropy(&self) -> u64 {
        self.entropy_bits.round() as u64
    }
}
