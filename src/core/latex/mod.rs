//! Markup Generator
//!
//! Turns a [`Table`], a [`Selection`] and a [`PrecisionMap`] into a LaTeX
//! `tabular` environment.
//!
//! # Architecture
//!
//! ```text
//! validate -> project (table order) -> FormatRule per column -> LatexTableGenerator
//! ```
//!
//! # Example
//!
//! ```
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
//! assert!(latex.contains("Alice & 9.5 \\\\"));
//! ```
//!
//! Cell contents are not escaped. Text such as `50%` or `a_b` reaches the
//! output unchanged, which keeps existing documents stable but means LaTeX
//! specials in the data must already be escaped by the user.

mod cell;
mod format;
mod generator;
mod rule;


use crate::data::constants::DEFAULT_PRECISION;
use crate::data::selection::{is_valid_precision, PrecisionMap, Selection};
use crate::data::table::{Column, Table};
use crate::utils::error::{ConversionError, ConversionResult};

// Re-export public API
pub use cell::{LatexCell, LatexCellAlign};
pub use format::{format_fixed, FormatRule};
pub use generator::{LatexRow, LatexTableGenerator};
pub use rule::{RulePosition, RuleStyle};

/// Options for LaTeX table generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Horizontal rule style
    pub rules: RuleStyle,
    /// Precision for numeric columns without an entry in the precision map
    pub default_precision: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            rules: RuleStyle::Booktabs,
            default_precision: DEFAULT_PRECISION,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RuleStyle) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }
}

/// Generate a LaTeX tabular with default options
///
/// # Errors
/// - [`ConversionError::NoColumnsSelected`] for an empty selection
/// - [`ConversionError::UnknownColumn`] for a selected or precision name
///   missing from the table
/// - [`ConversionError::InvalidPrecision`] for a precision above 6
pub fn generate(
    table: &Table,
    selection: &Selection,
    precision: &PrecisionMap,
) -> ConversionResult<String> {
    generate_with_options(table, selection, precision, &TableOptions::default())
}

/// Generate a LaTeX tabular with custom options
pub fn generate_with_options(
    table: &Table,
    selection: &Selection,
    precision: &PrecisionMap,
    options: &TableOptions,
) -> ConversionResult<String> {
    validate(table, selection, precision, options)?;

    let projected: Vec<(&Column, FormatRule)> = table
        .columns()
        .iter()
        .filter(|column| selection.contains(&column.name))
        .map(|column| {
            let places = precision.get_or(&column.name, options.default_precision);
            (column, FormatRule::for_column(column.column_type, places))
        })
        .collect();

    let aligns = projected
        .iter()
        .map(|(column, _)| LatexCellAlign::for_column(column.column_type))
        .collect();
    let mut gen = LatexTableGenerator::new(aligns).with_rules(options.rules);

    gen.set_header(
        projected
            .iter()
            .map(|(column, _)| LatexCell::new(column.name.as_str()))
            .collect(),
    );

    for row in 0..table.row_count() {
        gen.process_row(
            projected
                .iter()
                .map(|(column, rule)| LatexCell::from(rule.apply(&column.values[row])))
                .collect(),
        );
    }

    Ok(gen.generate_latex())
}

/// Check every precondition before any output is produced
fn validate(
    table: &Table,
    selection: &Selection,
    precision: &PrecisionMap,
    options: &TableOptions,
) -> ConversionResult<()> {
    if selection.is_empty() {
        return Err(ConversionError::NoColumnsSelected);
    }

    if let Some(name) = selection.iter().find(|name| !table.contains(name)) {
        return Err(ConversionError::unknown_column(name));
    }

    for (name, places) in precision.iter() {
        if !table.contains(name) {
            return Err(ConversionError::unknown_column(name));
        }
        if !is_valid_precision(places) {
            return Err(ConversionError::InvalidPrecision {
                column: name.to_string(),
                precision: places,
            });
        }
    }

    if !is_valid_precision(options.default_precision) {
        return Err(ConversionError::InvalidPrecision {
            column: "*".to_string(),
            precision: options.default_precision,
        });
    }

    Ok(())
}
