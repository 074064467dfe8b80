//! LaTeX tabular generator

use std::fmt::Write;

use super::cell::{LatexCell, LatexCellAlign};
use super::rule::{RulePosition, RuleStyle};

/// Represents a table row
#[derive(Debug, Clone, Default)]
pub struct LatexRow {
    /// Cells in this row
    pub cells: Vec<LatexCell>,
}

impl LatexRow {
    pub fn new(cells: Vec<LatexCell>) -> Self {
        LatexRow { cells }
    }
}

/// Builds a single `tabular` environment from a header row and data rows.
///
/// Every row is padded or truncated to the column count so the output is
/// always rectangular.
pub struct LatexTableGenerator {
    /// Column alignments, one per column
    pub col_aligns: Vec<LatexCellAlign>,
    /// Header row, emitted before the mid rule
    pub header: Option<LatexRow>,
    /// Body rows
    pub rows: Vec<LatexRow>,
    /// Horizontal rule style
    pub rules: RuleStyle,
}

impl LatexTableGenerator {
    /// Create a new generator with the given column alignments
    pub fn new(col_aligns: Vec<LatexCellAlign>) -> Self {
        LatexTableGenerator {
            col_aligns,
            header: None,
            rows: Vec::new(),
            rules: RuleStyle::default(),
        }
    }

    pub fn with_rules(mut self, rules: RuleStyle) -> Self {
        self.rules = rules;
        self
    }

    pub fn col_count(&self) -> usize {
        self.col_aligns.len()
    }

    /// Set the header row
    pub fn set_header(&mut self, cells: Vec<LatexCell>) {
        let row = self.fit(cells);
        self.header = Some(row);
    }

    /// Append a body row
    pub fn process_row(&mut self, cells: Vec<LatexCell>) {
        let row = self.fit(cells);
        self.rows.push(row);
    }

    fn fit(&self, mut cells: Vec<LatexCell>) -> LatexRow {
        cells.resize(self.col_count(), LatexCell::empty());
        LatexRow::new(cells)
    }

    /// Generate the complete LaTeX tabular code
    pub fn generate_latex(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\\begin{{tabular}}{{{}}}", self.build_column_spec());
        self.write_rule(&mut output, RulePosition::Top);

        if let Some(header) = &self.header {
            write_row(&mut output, header);
            self.write_rule(&mut output, RulePosition::AfterHeader);
        }

        for row in &self.rows {
            write_row(&mut output, row);
        }

        self.write_rule(&mut output, RulePosition::Bottom);
        let _ = writeln!(output, "\\end{{tabular}}");

        output
    }

    fn write_rule(&self, output: &mut String, position: RulePosition) {
        if let Some(rule) = self.rules.to_latex(position) {
            let _ = writeln!(output, "{}", rule);
        }
    }

    /// Build the column specification string (e.g., "lrr")
    fn build_column_spec(&self) -> String {
        self.col_aligns.iter().map(LatexCellAlign::to_char).collect()
    }
}

fn write_row(output: &mut String, row: &LatexRow) {
    let cells: Vec<&str> = row.cells.iter().map(LatexCell::to_latex).collect();
    let _ = writeln!(output, "{} \\\\", cells.join(" & "));
}
