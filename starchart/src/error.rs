//! Error types for catalog parsing and charting

use std::path::PathBuf;

use thiserror::Error;

use crate::catalogs::layout::CatalogField;

/// Reasons a single catalog line could not be turned into a star record.
///
/// These never escape [`crate::catalogs::parse_catalog`]; the rejected line is
/// simply skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("{field} columns {start}..{end} out of range for line of length {line_len}")]
    FieldOutOfRange {
        field: CatalogField,
        start: usize,
        end: usize,
        line_len: usize,
    },

    #[error("{field} value {value:?} is not a finite number")]
    InvalidNumber { field: CatalogField, value: String },
}

/// Errors that stop a chart before any line is parsed
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
