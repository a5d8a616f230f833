use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::strength::StrengthReport;

/// A freshly generated password or passphrase.
///
/// The buffer is wiped when the value is dropped. It is never archived
/// implicitly; callers pass it to the history store when they want it kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct GeneratedSecret {
    pub value: String,
    pub length: usize,
}

impl GeneratedSecret {
    pub fn new(value: String) -> Self {
        let length = value.chars().count();
        Self { value, length }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// One row of a batch: the secret plus its strength report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub secret: GeneratedSecret,
    pub strength: StrengthReport,
}
