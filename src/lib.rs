//! # csv2latex
//!
//! Turn CSV and Excel tables into LaTeX `tabular` environments.
//!
//! ## Features
//!
//! - **CSV, XLSX and XLS input**: one loader, format picked from the extension
//! - **Column typing**: every column is numeric or text, decided once at load
//! - **Column selection**: emit any subset of columns, always in table order
//! - **Per-column rounding**: 0 to 6 decimal places for numeric columns
//! - **Missing values**: empty and not-available cells render as empty cells
//! - **Presets**: save and reuse selection and precision settings (TOML / JSON)
//!
//! ## Usage Examples
//!
//! ### Generate from an in-memory table
//!
//! ```rust
//! use csv2latex::{generate, Column, PrecisionMap, Selection, Table};
//!
//! let table = Table::from_columns(vec![
//!     Column::text("name", vec![Some("Alice"), Some("Bob")]),
//!     Column::numeric("score", vec![Some(9.5), None]),
//! ])
//! .unwrap();
//!
//! let mut precision = PrecisionMap::defaults(&table);
//! precision.set("score", 1);
//!
//! let latex = generate(&table, &Selection::all(&table), &precision).unwrap();
//! assert!(latex.starts_with("\\begin{tabular}{lr}"));
//! assert!(latex.contains("Bob &  \\\\"));
//! ```
//!
//! ### Load a file
//!
//! ```no_run
//! use csv2latex::{generate, load, PrecisionMap, Selection};
//!
//! let table = load("results.xlsx")?;
//! let selection: Selection = ["name", "score"].into_iter().collect();
//! let latex = generate(&table, &selection, &PrecisionMap::defaults(&table))?;
//! println!("{}", latex);
//! # Ok::<(), csv2latex::ConversionError>(())
//! ```
//!
//! Text cells are copied verbatim; LaTeX special characters in the data are
//! not escaped.

/// Core engines - loader and LaTeX generator
pub mod core;

/// Data layer - table model, selection and constants
pub mod data;

/// Feature modules - session state and presets
pub mod features;

/// Utility modules
pub mod utils;

use std::path::Path;

// Re-export core functions
pub use core::latex::{
    format_fixed, generate, generate_with_options, FormatRule, LatexCell, LatexCellAlign,
    LatexTableGenerator, RuleStyle, TableOptions,
};
pub use core::loader::{load, load_with_options, LoadOptions, SheetSelector, SourceFormat};

// Re-export data model
pub use data::{CellValue, Column, ColumnType, PrecisionMap, Selection, Table};

// Re-export feature modules
#[cfg(feature = "presets")]
pub use features::preset::{Preset, ResolvedPreset};
pub use features::session::{ColumnInfo, LoadSummary, Session};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionResult, LoadFailure};

/// Load a file and render every column with default precision
pub fn convert_file(path: impl AsRef<Path>) -> ConversionResult<String> {
    convert_file_with_options(path, &LoadOptions::default(), &TableOptions::default())
}

/// Load a file and render every column with custom options
pub fn convert_file_with_options(
    path: impl AsRef<Path>,
    load_options: &LoadOptions,
    table_options: &TableOptions,
) -> ConversionResult<String> {
    let table = load_with_options(path, load_options)?;
    generate_with_options(
        &table,
        &Selection::all(&table),
        &PrecisionMap::defaults(&table),
        table_options,
    )
}
