//! Error handling for csv2latex
//!
//! This module provides a unified error type and result type for loading
//! tables and generating LaTeX from them.

use std::path::PathBuf;

use thiserror::Error;

/// Conversion error type
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The file extension is not one of the supported input formats
    #[error("Unsupported file format '{extension}' (expected csv, xlsx or xls)")]
    UnsupportedFormat { extension: String },

    /// The source could not be read or parsed
    #[error("Error loading '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadFailure,
    },

    /// Generation was requested with an empty selection
    #[error("No columns selected")]
    NoColumnsSelected,

    /// A column name does not exist in the loaded table
    #[error("Unknown column '{name}'")]
    UnknownColumn { name: String },

    /// A decimal precision outside the accepted range
    #[error("Invalid precision {precision} for column '{column}' (expected 0 to 6)")]
    InvalidPrecision { column: String, precision: u8 },

    /// A precision was set on a column that is not numeric
    #[error("Column '{column}' is not numeric")]
    NotNumeric { column: String },

    /// Columns handed to `Table::from_columns` break the table invariants
    #[error("Invalid table: {message}")]
    InvalidTable { message: String },

    /// A session operation needs a loaded table
    #[error("No table loaded")]
    NoTableLoaded,

    /// A preset file could not be read or parsed
    #[error("Invalid preset '{}': {message}", path.display())]
    Preset { path: PathBuf, message: String },
}

/// Underlying cause of a failed load
#[derive(Error, Debug)]
pub enum LoadFailure {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("invalid xlsx file format: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("invalid xls file format: {0}")]
    Xls(#[from] calamine::XlsError),

    /// The source has no header row
    #[error("no columns to parse from file")]
    MissingHeader,

    /// A data row is wider than the header
    #[error("expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The parsed cells do not form a valid table
    #[error("{message}")]
    Malformed { message: String },

    #[error("worksheet '{name}' not found")]
    SheetNotFound { name: String },

    #[error("workbook contains no worksheets")]
    EmptyWorkbook,
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn load(path: impl Into<PathBuf>, source: impl Into<LoadFailure>) -> Self {
        ConversionError::Load {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn unknown_column(name: impl Into<String>) -> Self {
        ConversionError::UnknownColumn { name: name.into() }
    }

    pub fn invalid_table(message: impl Into<String>) -> Self {
        ConversionError::InvalidTable {
            message: message.into(),
        }
    }

    pub fn preset(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConversionError::Preset {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error came from reading the source file
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ConversionError::Load { .. } | ConversionError::UnsupportedFormat { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = ConversionError::UnsupportedFormat {
            extension: "ods".to_string(),
        };
        assert!(err.to_string().contains("'ods'"));
        assert!(err.is_load_error());
    }

    #[test]
    fn test_load_error_keeps_source() {
        let err = ConversionError::load("data.csv", LoadFailure::MissingHeader);
        let msg = err.to_string();
        assert!(msg.contains("data.csv"));
        assert!(msg.contains("no columns to parse"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_precision_display() {
        let err = ConversionError::InvalidPrecision {
            column: "score".to_string(),
            precision: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("7"));
        assert!(msg.contains("score"));
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_too_many_fields_display() {
        let failure = LoadFailure::TooManyFields {
            line: 3,
            expected: 2,
            found: 4,
        };
        assert_eq!(failure.to_string(), "expected 2 fields in line 3, saw 4");
    }
}
