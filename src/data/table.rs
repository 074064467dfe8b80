//! In-memory table representation
//!
//! A [`Table`] is an ordered list of named columns of equal length. Each
//! column carries the [`ColumnType`] decided when the table was loaded.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::error::{ConversionError, ConversionResult};

/// Classification of a column, computed once at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Text,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Text => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    /// Empty or not-available source cell; distinct from `0` and `""`
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Missing, Into::into)
    }
}

/// A named column with its type and values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub values: Vec<CellValue>,
}

impl Column {
    /// Create a numeric column; `None` entries become missing cells
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Column {
            name: name.into(),
            column_type: ColumnType::Numeric,
            values: values.into_iter().map(CellValue::from).collect(),
        }
    }

    /// Create a text column; `None` entries become missing cells
    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<Option<S>>) -> Self {
        Column {
            name: name.into(),
            column_type: ColumnType::Text,
            values: values
                .into_iter()
                .map(|value| value.map_or(CellValue::Missing, |s| CellValue::Text(s.into())))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of cells holding a value
    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|value| !value.is_missing()).count()
    }

    /// Check that every cell agrees with the column type
    fn check_values(&self) -> ConversionResult<()> {
        let mismatch = self.values.iter().position(|value| {
            matches!(
                (self.column_type, value),
                (ColumnType::Numeric, CellValue::Text(_)) | (ColumnType::Text, CellValue::Number(_))
            )
        });
        match mismatch {
            Some(row) => Err(ConversionError::invalid_table(format!(
                "{} column '{}' has a mismatched value in row {}",
                self.column_type, self.name, row
            ))),
            None => Ok(()),
        }
    }
}

/// Tabular dataset with unique, ordered column names and aligned rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table, enforcing unique names, uniform row count and
    /// values that agree with each column's type
    pub fn from_columns(columns: Vec<Column>) -> ConversionResult<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        let mut seen = HashSet::new();

        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ConversionError::invalid_table(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
            if column.len() != row_count {
                return Err(ConversionError::invalid_table(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name,
                    column.len(),
                    row_count
                )));
            }
            column.check_values()?;
        }

        Ok(Table { columns, row_count })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.column(name).map(|column| column.column_type)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Names of the numeric columns, in table order
    pub fn numeric_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|column| column.column_type.is_numeric())
            .map(|column| column.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::text("name", vec![Some("Alice"), Some("Bob")]),
            Column::numeric("score", vec![Some(9.5), None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let table = sample();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["name", "score"]);
        assert_eq!(table.column_type("score"), Some(ColumnType::Numeric));
        assert_eq!(table.column_type("missing"), None);
        assert_eq!(table.numeric_columns().collect::<Vec<_>>(), ["score"]);
        assert_eq!(table.column("score").unwrap().present_count(), 1);
    }

    #[test]
    fn test_missing_is_not_zero_or_empty() {
        let table = sample();
        let score = table.column("score").unwrap();
        assert!(score.values[1].is_missing());
        assert_ne!(score.values[1], CellValue::Number(0.0));
        assert_ne!(score.values[1], CellValue::Text(String::new()));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = Table::from_columns(vec![
            Column::numeric("a", vec![Some(1.0)]),
            Column::numeric("a", vec![Some(2.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, ConversionError::InvalidTable { .. }));
    }

    #[test]
    fn test_rejects_ragged_columns() {
        let err = Table::from_columns(vec![
            Column::numeric("a", vec![Some(1.0), Some(2.0)]),
            Column::numeric("b", vec![Some(2.0)]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("has 1 rows, expected 2"));
    }

    #[test]
    fn test_rejects_text_in_numeric_column() {
        let column = Column {
            name: "n".to_string(),
            column_type: ColumnType::Numeric,
            values: vec![CellValue::from("x")],
        };
        assert!(Table::from_columns(vec![column]).is_err());
    }

    #[test]
    fn test_empty_table() {
        let table = Table::from_columns(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
