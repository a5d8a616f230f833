//! Strength Estimator for Passforge.
//!
//! Scores any string, generated or typed by hand. Entropy and crack time
//! are computed from the classes observed in the string itself, not from
//! the policy that may have produced it.
//!
//! Two scales coexist: the raw 0-8 score drives the label, and the
//! normalized 0-4 score drives meter bars. Both are reproduced as-is.

use std::collections::HashSet;

use crate::types::policy::CharClassFlags;
use crate::types::strength::{StrengthLabel, StrengthReport, MAX_SCORE};

/// Assumed attacker speed in guesses per second.
pub const GUESSES_PER_SECOND: f64 = 1e10;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;
const DECADE: f64 = 10.0 * YEAR;
const CENTURY: f64 = 100.0 * YEAR;
const MILLENNIUM: f64 = 1_000.0 * YEAR;

/// Coarse crack-time buckets, ordered from fastest to slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CrackTimeBucket {
    Instantly,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
    Decades,
    Centuries,
    MillionsOfYears,
}

impl CrackTimeBucket {
    pub fn for_seconds(seconds: f64) -> Self {
        if seconds < 1.0 {
            CrackTimeBucket::Instantly
        } else if seconds < MINUTE {
            CrackTimeBucket::Seconds
        } else if seconds < HOUR {
            CrackTimeBucket::Minutes
        } else if seconds < DAY {
            CrackTimeBucket::Hours
        } else if seconds < MONTH {
            CrackTimeBucket::Days
        } else if seconds < YEAR {
            CrackTimeBucket::Months
        } else if seconds < DECADE {
            CrackTimeBucket::Years
        } else if seconds < CENTURY {
            CrackTimeBucket::Decades
        } else if seconds < MILLENNIUM {
            CrackTimeBucket::Centuries
        } else {
            CrackTimeBucket::MillionsOfYears
        }
    }
}

/// Analyzes a string. Pure and deterministic.
pub fn analyze(value: &str) -> StrengthReport {
    if value.is_empty() {
        return StrengthReport::empty();
    }

    let classes = CharClassFlags::observe(value);
    let length = value.chars().count();
    let unique_chars = unique_chars(value);

    let raw_score = raw_score(length, &classes, unique_chars);
    let charset_size = classes.charset_size();
    let crack_seconds = crack_time_seconds(charset_size, length);

    StrengthReport {
        score: normalized_score(raw_score),
        raw_score,
        label: StrengthLabel::from_raw(raw_score),
        entropy_bits: entropy_bits(charset_size, length),
        crack_time_seconds: crack_seconds,
        crack_time: format_crack_time(crack_seconds),
        char_classes: classes,
        length,
        unique_chars,
    }
}

/// Number of distinct characters.
pub fn unique_chars(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

/// Raw 0-8 score: up to 3 for length, 1 per class present, 1 for variety.
pub fn raw_score(length: usize, classes: &CharClassFlags, unique_chars: usize) -> u8 {
    let mut score = 0u8;

    for threshold in [8, 12, 16] {
        if length >= threshold {
            score += 1;
        }
    }

    score += classes.count() as u8;

    // Variety bonus: at least 70% of the characters are distinct.
    if length > 0 && unique_chars as f64 >= length as f64 * 0.7 {
        score += 1;
    }

    score
}

/// Maps the raw score onto the 0-4 scale: `min(ceil(raw / 2), 4)`.
pub fn normalized_score(raw: u8) -> u8 {
    raw.div_ceil(2).min(MAX_SCORE)
}

/// `length * log2(charset_size)`; zero for an empty charset.
pub fn entropy_bits(charset_size: usize, length: usize) -> f64 {
    if charset_size == 0 || length == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// `charset_size ^ length / GUESSES_PER_SECOND`. Saturates to infinity for
/// guess spaces beyond `f64`.
pub fn crack_time_seconds(charset_size: usize, length: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    let exponent = i32::try_from(length).unwrap_or(i32::MAX);
    (charset_size as f64).powi(exponent) / GUESSES_PER_SECOND
}

/// Renders a crack time as a human bucket, rounding to the nearest unit.
pub fn format_crack_time(seconds: f64) -> String {
    match CrackTimeBucket::for_seconds(seconds) {
        CrackTimeBucket::Instantly => "Instantly".to_string(),
        CrackTimeBucket::Seconds => format!("{} seconds", seconds.round()),
        CrackTimeBucket::Minutes => format!("{} minutes", (seconds / MINUTE).round()),
        CrackTimeBucket::Hours => format!("{} hours", (seconds / HOUR).round()),
        CrackTimeBucket::Days => format!("{} days", (seconds / DAY).round()),
        CrackTimeBucket::Months => format!("{} months", (seconds / MONTH).round()),
        CrackTimeBucket::Years => format!("{} years", (seconds / YEAR).round()),
        CrackTimeBucket::Decades => format!("{} decades", (seconds / DECADE).round()),
        CrackTimeBucket::Centuries => format!("{} centuries", (seconds / CENTURY).round()),
        CrackTimeBucket::MillionsOfYears => "Millions of years".to_string(),
    }
}
