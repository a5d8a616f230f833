//! Export formatting for batch results and history.
//!
//! Only produces text; writing it somewhere is left to the caller.

use serde::Serialize;

use crate::types::errors::ExportError;
use crate::types::history::HistoryEntry;
use crate::types::secret::BatchItem;

const CSV_HEADER: [&str; 3] = ["Password", "Length", "Strength"];

/// Row shape shared by the CSV and JSON batch exports.
#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    password: &'a str,
    length: usize,
    strength: &'a str,
}

impl<'a> From<&'a BatchItem> for BatchRow<'a> {
    fn from(item: &'a BatchItem) -> Self {
        Self {
            password: item.secret.as_str(),
            length: item.secret.length,
            strength: item.strength.label.as_str(),
        }
    }
}

fn csv_error(e: impl std::fmt::Display) -> ExportError {
    ExportError::Serialization(e.to_string())
}

/// Comma-separated export: header record, then one `password,length,strength`
/// record per item. Fields are quoted only when they need it.
pub fn batch_to_csv(items: &[BatchItem]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for item in items {
        let row = BatchRow::from(item);
        let length = row.length.to_string();
        writer
            .write_record([row.password, length.as_str(), row.strength])
            .map_err(csv_error)?;
    }
    let bytes = writer.into_inner().map_err(csv_error)?;
    String::from_utf8(bytes).map_err(csv_error)
}

/// Pretty JSON array of `{password, length, strength}` objects.
pub fn batch_to_json(items: &[BatchItem]) -> Result<String, ExportError> {
    let rows: Vec<BatchRow<'_>> = items.iter().map(BatchRow::from).collect();
    serde_json::to_string_pretty(&rows).map_err(|e| ExportError::Serialization(e.to_string()))
}

/// Pretty JSON array mirroring the stored history entries.
pub fn history_to_json(entries: &[HistoryEntry]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(entries).map_err(|e| ExportError::Serialization(e.to_string()))
}
