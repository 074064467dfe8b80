//! Data layer - Table model and constants
//!
//! This module contains the values the engine works on:
//! - The loaded table with its typed columns
//! - Column selection and precision settings
//! - Defaults and missing-value markers

pub mod constants;
pub mod selection;
pub mod table;

// Re-export commonly used items
pub use constants::{DEFAULT_NA_VALUES, DEFAULT_PRECISION, MAX_PRECISION, SUPPORTED_EXTENSIONS};
pub use selection::{PrecisionMap, Selection};
pub use table::{CellValue, Column, ColumnType, Table};
