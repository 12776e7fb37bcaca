//! Record loader for delimited-text sources
//!
//! Turns a delimited file into a sequence of field-named records, keyed by
//! the trimmed header row. The loader knows nothing about airports or
//! bookings; dataset-specific parsing lives at the reference-index and
//! normalizer boundaries.

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// One row of a delimited file, with values keyed by column name
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Build a record from parallel header/value slices, trimming both
    pub fn from_fields(headers: &csv::StringRecord, values: &csv::StringRecord) -> Self {
        let mut fields = HashMap::new();
        for (i, value) in values.iter().enumerate() {
            if let Some(header) = headers.get(i) {
                fields.insert(header.trim().to_string(), value.trim().to_string());
            }
        }
        Self { fields }
    }

    /// Look up a field value by column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|s| s.as_str())
    }

    /// Look up a field value, returning a missing-column error when absent
    pub fn require(&self, file: &str, column: &str) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| Error::missing_column(file, column))
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Read a delimited file into field-named records
///
/// The first row is taken as the header row; blank rows are skipped. Rows
/// shorter than the header simply lack the trailing fields, which surfaces
/// downstream as a missing column.
///
/// # Errors
/// * `Error::FileNotFound` when the path does not exist
/// * `Error::CsvParsing` when the file cannot be read as delimited text
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.to_string_lossy().to_string()));
    }

    let file_name = path.to_string_lossy().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::csv_parsing(file_name.clone(), "Failed to open CSV file", Some(e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing(file_name.clone(), "Failed to read header row", Some(e)))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| {
            Error::csv_parsing(file_name.clone(), "Failed to read CSV record", Some(e))
        })?;
        if row.iter().all(|field| field.is_empty()) {
            continue;
        }
        records.push(Record::from_fields(&headers, &row));
    }

    debug!("Loaded {} records from {}", records.len(), file_name);
    Ok(records)
}
