//! Column type inference and header normalization
//!
//! Readers hand over raw cells; this module decides the [`ColumnType`] of
//! every column once and converts the cells to [`CellValue`]s.

use std::collections::HashMap;

use crate::data::constants::{DECIMAL_PATTERN, UNNAMED_COLUMN_PREFIX};
use crate::data::table::{CellValue, Column, ColumnType};

/// A cell as produced by a reader, before typing
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    /// Native number from a spreadsheet
    Number(f64),
    Text(String),
}

impl RawCell {
    /// Classify a raw text cell, mapping missing-value markers to `Empty`
    pub fn from_text(text: &str, na_values: &[String]) -> Self {
        if text.is_empty() || na_values.iter().any(|marker| marker == text) {
            RawCell::Empty
        } else {
            RawCell::Text(text.to_string())
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            RawCell::Number(value) => Some(*value),
            RawCell::Text(text) => parse_decimal(text),
            RawCell::Empty => None,
        }
    }
}

/// Parse a number written in standard decimal notation
///
/// Leading and trailing whitespace is ignored. Thousands separators,
/// currency symbols and words like `inf` are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if DECIMAL_PATTERN.is_match(trimmed) {
        trimmed.parse().ok()
    } else {
        None
    }
}

/// Decide the type of a column: numeric iff every present cell is a number
pub fn infer_type(cells: &[RawCell]) -> ColumnType {
    let all_numeric = cells
        .iter()
        .filter(|cell| !matches!(cell, RawCell::Empty))
        .all(|cell| cell.as_number().is_some());

    if all_numeric {
        ColumnType::Numeric
    } else {
        ColumnType::Text
    }
}

/// Build a typed column from raw cells
pub fn build_column(name: String, cells: Vec<RawCell>) -> Column {
    let column_type = infer_type(&cells);
    let values = match column_type {
        ColumnType::Numeric => cells
            .iter()
            .map(|cell| cell.as_number().map_or(CellValue::Missing, CellValue::Number))
            .collect(),
        ColumnType::Text => cells
            .into_iter()
            .map(|cell| match cell {
                RawCell::Empty => CellValue::Missing,
                RawCell::Number(value) => CellValue::Text(number_to_text(value)),
                RawCell::Text(text) => CellValue::Text(text),
            })
            .collect(),
    };

    Column {
        name,
        column_type,
        values,
    }
}

/// Render a spreadsheet number that ended up in a text column
pub fn number_to_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Turn header cells into unique column names.
///
/// Empty names become `Unnamed: <index>`. A repeated name gets the next
/// `.N` suffix for that name; if the suffixed name is itself taken, the
/// suffixing continues from it (`a.1` then `a.1.1`).
pub fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(raw.len());

    for (index, name) in raw.into_iter().enumerate() {
        let mut candidate = if name.trim().is_empty() {
            format!("{}{}", UNNAMED_COLUMN_PREFIX, index)
        } else {
            name
        };

        let mut seen = counts.get(&candidate).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(candidate.clone(), seen + 1);
            candidate = format!("{}.{}", candidate, seen);
            seen = counts.get(&candidate).copied().unwrap_or(0);
        }
        counts.insert(candidate.clone(), 1);
        result.push(candidate);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<RawCell> {
        let markers: Vec<String> = crate::data::DEFAULT_NA_VALUES
            .iter()
            .map(|s| s.to_string())
            .collect();
        values
            .iter()
            .map(|value| RawCell::from_text(value, &markers))
            .collect()
    }

    #[test]
    fn test_single_text_value_demotes_column() {
        assert_eq!(infer_type(&texts(&["1", "2", "x"])), ColumnType::Text);
    }

    #[test]
    fn test_empty_cells_do_not_disqualify() {
        assert_eq!(infer_type(&texts(&["1", "", "3"])), ColumnType::Numeric);
    }

    #[test]
    fn test_na_markers_are_missing() {
        let column = build_column("v".to_string(), texts(&["1.5", "NA", "n/a", "2"]));
        assert_eq!(column.column_type, ColumnType::Numeric);
        assert_eq!(
            column.values,
            vec![
                CellValue::Number(1.5),
                CellValue::Missing,
                CellValue::Missing,
                CellValue::Number(2.0)
            ]
        );
    }

    #[test]
    fn test_all_missing_column_is_numeric() {
        assert_eq!(infer_type(&texts(&["", ""])), ColumnType::Numeric);
        assert_eq!(infer_type(&[]), ColumnType::Numeric);
    }

    #[test]
    fn test_thousands_separator_and_currency_are_text() {
        assert_eq!(infer_type(&texts(&["1,000"])), ColumnType::Text);
        assert_eq!(infer_type(&texts(&["$5"])), ColumnType::Text);
        assert_eq!(infer_type(&texts(&["inf"])), ColumnType::Text);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(" 3.5 "), Some(3.5));
        assert_eq!(parse_decimal("-1e2"), Some(-100.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("1.2.3"), None);
    }

    #[test]
    fn test_text_column_keeps_literal_strings() {
        let column = build_column("v".to_string(), texts(&["007", "x", ""]));
        assert_eq!(column.column_type, ColumnType::Text);
        assert_eq!(
            column.values,
            vec![
                CellValue::Text("007".to_string()),
                CellValue::Text("x".to_string()),
                CellValue::Missing
            ]
        );
    }

    #[test]
    fn test_spreadsheet_numbers_in_text_column() {
        let cells = vec![
            RawCell::Number(3.0),
            RawCell::Number(2.5),
            RawCell::Text("x".to_string()),
        ];
        let column = build_column("v".to_string(), cells);
        assert_eq!(column.values[0], CellValue::Text("3".to_string()));
        assert_eq!(column.values[1], CellValue::Text("2.5".to_string()));
    }

    #[test]
    fn test_normalize_headers() {
        let headers = normalize_headers(vec![
            "a".to_string(),
            "".to_string(),
            "a".to_string(),
            "a.1".to_string(),
            "a".to_string(),
        ]);
        assert_eq!(headers, ["a", "Unnamed: 1", "a.1", "a.1.1", "a.2"]);
    }

    #[test]
    fn test_suffixed_name_taken_before_duplicate() {
        let headers = normalize_headers(vec!["a.1".to_string(), "a".to_string(), "a".to_string()]);
        assert_eq!(headers, ["a.1", "a", "a.1.1"]);

        let headers = normalize_headers(vec![String::new(), "Unnamed: 0".to_string()]);
        assert_eq!(headers, ["Unnamed: 0", "Unnamed: 0.1"]);
    }
}
