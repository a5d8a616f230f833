use serde::Serialize;

use super::errors::GeneratorError;
use super::policy::CharsetPolicy;

/// A named preset of password length and character classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Template {
    /// The charset policy this preset pre-fills.
    pub fn policy(&self) -> Result<CharsetPolicy, GeneratorError> {
        CharsetPolicy::new(
            self.length,
            self.lowercase,
            self.uppercase,
            self.numbers,
            self.symbols,
        )
    }
}
