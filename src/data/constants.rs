//! Constants for loading tables and formatting numeric columns

use lazy_static::lazy_static;
use regex::Regex;

/// Decimal places used for a numeric column until the user picks another value
pub const DEFAULT_PRECISION: u8 = 2;

/// Largest accepted number of decimal places
pub const MAX_PRECISION: u8 = 6;

/// File extensions the loader understands (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

/// Cell contents read as missing values by default.
///
/// These are the markers conventional tabular readers treat as "not available"
/// when they ingest delimited text.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Prefix used for header cells that are empty in the source
pub const UNNAMED_COLUMN_PREFIX: &str = "Unnamed: ";

lazy_static! {
    /// Standard decimal notation: optional sign, digits with an optional
    /// decimal point, optional exponent. No grouping separators, no currency.
    pub static ref DECIMAL_PATTERN: Regex =
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("decimal pattern is valid");
}

/// Check whether an extension (without the dot) is a supported input format
pub fn is_supported_extension(extension: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| ext.eq_ignore_ascii_case(extension))
}
