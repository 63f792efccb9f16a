//! CSV loading for raw listing exports.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A raw listing export: header row plus data rows, cells untyped.
///
/// Blob columns hold serialized JSON; no interpretation happens here.
#[derive(Debug, Clone, Default)]
pub struct ListingTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ListingTable {
    /// Index of a header, case-insensitive.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell value by row index and column name; empty string when absent.
    pub fn cell<'a>(&'a self, row: usize, column: &str) -> &'a str {
        let Some(idx) = self.column_index(column) else {
            return "";
        };
        self.rows
            .get(row)
            .and_then(|cells| cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read one listing export.
///
/// Rows are kept verbatim apart from header trimming; blob cells routinely
/// contain embedded commas and quotes, which the csv reader handles. Short
/// rows are padded to the header width so column access stays positional.
pub fn read_listing_table(path: &Path) -> Result<ListingTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        row.resize(headers.len().max(row.len()), String::new());
        rows.push(row);
    }
    Ok(ListingTable { headers, rows })
}
