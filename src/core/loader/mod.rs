//! Table Loader
//!
//! Reads a CSV or Excel file into a [`Table`], deciding once per column
//! whether it is numeric or text.
//!
//! # Architecture
//!
//! ```text
//! path -> SourceFormat -> reader (delimited / workbook) -> RawCell grid -> infer -> Table
//! ```
//!
//! Loading is all-or-nothing: the function only returns a table once every
//! cell has been read and typed.

mod delimited;
mod infer;
mod workbook;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::data::constants::{is_supported_extension, DEFAULT_NA_VALUES};
use crate::data::table::Table;
use crate::utils::error::{ConversionError, ConversionResult, LoadFailure};

pub use delimited::read_delimited;
pub use infer::{infer_type, normalize_headers, parse_decimal, RawCell};
pub use workbook::{range_to_table, read_workbook, WorkbookKind};

/// Input formats recognised by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xlsx,
    Xls,
}

impl SourceFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> ConversionResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        if !is_supported_extension(extension) {
            return Err(ConversionError::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }

        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" => Ok(SourceFormat::Xlsx),
            _ => Ok(SourceFormat::Xls),
        }
    }
}

/// Which worksheet of a workbook to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Zero-based sheet position
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

/// Options for loading a table
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter for CSV input
    pub delimiter: u8,
    /// Worksheet to read from spreadsheet input
    pub sheet: SheetSelector,
    /// Cell contents read as missing values (empty cells are always missing)
    pub na_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            sheet: SheetSelector::default(),
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter,
            ..Default::default()
        }
    }

    pub fn with_sheet(sheet: SheetSelector) -> Self {
        Self {
            sheet,
            ..Default::default()
        }
    }

    /// Only empty cells count as missing
    pub fn without_na_markers() -> Self {
        Self {
            na_values: Vec::new(),
            ..Default::default()
        }
    }
}

/// Load a table from a CSV, XLSX or XLS file with default options
pub fn load(path: impl AsRef<Path>) -> ConversionResult<Table> {
    load_with_options(path, &LoadOptions::default())
}

/// Load a table from a CSV, XLSX or XLS file
pub fn load_with_options(path: impl AsRef<Path>, options: &LoadOptions) -> ConversionResult<Table> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;

    let result = match format {
        SourceFormat::Csv => File::open(path)
            .map_err(LoadFailure::from)
            .and_then(|file| read_delimited(BufReader::new(file), options)),
        SourceFormat::Xlsx => read_workbook(path, WorkbookKind::Xlsx, options),
        SourceFormat::Xls => read_workbook(path, WorkbookKind::Xls, options),
    };

    result.map_err(|source| ConversionError::load(path, source))
}
