use std::fmt;

// === GeneratorError ===

/// Errors raised by the password, passphrase, and batch engines.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// The policy selects no character class, has a field outside its
    /// declared range, or names an unknown enum value.
    InvalidPolicy(String),
    /// The operating system's secure random source could not be read.
    RngUnavailable(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidPolicy(msg) => write!(f, "Invalid policy: {}", msg),
            GeneratorError::RngUnavailable(msg) => {
                write!(f, "Secure random source unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

// === HistoryError ===

/// Errors related to the password history ledger.
///
/// `PersistenceCorrupt` and `PersistenceWriteFailed` are recovered inside
/// the store and only ever logged; `StorageError` surfaces when the backing
/// database cannot be opened at all.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryError {
    /// The persisted slot held data that could not be parsed.
    PersistenceCorrupt(String),
    /// Writing the ledger back to the slot failed.
    PersistenceWriteFailed(String),
    /// The backing storage could not be opened or queried.
    StorageError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::PersistenceCorrupt(msg) => {
                write!(f, "History data is corrupt: {}", msg)
            }
            HistoryError::PersistenceWriteFailed(msg) => {
                write!(f, "History write failed: {}", msg)
            }
            HistoryError::StorageError(msg) => write!(f, "History storage error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Settings could not be serialized or deserialized.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

// === ExportError ===

/// Errors raised while formatting exports.
#[derive(Debug)]
pub enum ExportError {
    /// The rows could not be serialized.
    Serialization(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Serialization(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}
