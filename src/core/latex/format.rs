//! Per-column cell formatting rules
//!
//! Each projected column gets one [`FormatRule`]; cells are formatted by
//! applying the rule, with no state carried between cells.

use crate::data::table::{CellValue, ColumnType};

/// How the cells of one column are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Fixed-point with this many digits after the decimal point
    Fixed(u8),
    /// Literal string form
    Verbatim,
}

impl FormatRule {
    /// Rule for a column of the given type
    pub fn for_column(column_type: ColumnType, precision: u8) -> Self {
        match column_type {
            ColumnType::Numeric => FormatRule::Fixed(precision),
            ColumnType::Text => FormatRule::Verbatim,
        }
    }

    /// Format a single cell. Missing values are always the empty string.
    pub fn apply(&self, value: &CellValue) -> String {
        match (self, value) {
            (_, CellValue::Missing) => String::new(),
            (FormatRule::Fixed(places), CellValue::Number(number)) => {
                format_fixed(*number, *places)
            }
            (FormatRule::Verbatim, CellValue::Number(number)) => number.to_string(),
            (_, CellValue::Text(text)) => text.clone(),
        }
    }
}

/// Fixed-point decimal with exactly `places` fractional digits.
///
/// The result is correctly rounded from the exact binary value, ties to even,
/// and always uses `.` as the separator.
pub fn format_fixed(value: f64, places: u8) -> String {
    format!("{:.*}", usize::from(places), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(3.14159, 2), "3.14");
        assert_eq!(format_fixed(3.14159, 0), "3");
        assert_eq!(format_fixed(9.5, 1), "9.5");
        assert_eq!(format_fixed(2.0, 3), "2.000");
        assert_eq!(format_fixed(-1.005, 6), "-1.005000");
        assert_eq!(format_fixed(1234567.891, 1), "1234567.9");
    }

    #[test]
    fn test_rounds_from_binary_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(format_fixed(2.675, 2), "2.67");
        assert_eq!(format_fixed(1.0049, 2), "1.00");
        assert_eq!(format_fixed(-0.4, 0), "-0");
    }

    #[test]
    fn test_missing_is_empty_for_every_rule() {
        for places in 0..=6 {
            assert_eq!(FormatRule::Fixed(places).apply(&CellValue::Missing), "");
        }
        assert_eq!(FormatRule::Verbatim.apply(&CellValue::Missing), "");
    }

    #[test]
    fn test_rule_for_column() {
        assert_eq!(
            FormatRule::for_column(ColumnType::Numeric, 3),
            FormatRule::Fixed(3)
        );
        assert_eq!(
            FormatRule::for_column(ColumnType::Text, 3),
            FormatRule::Verbatim
        );
    }

    #[test]
    fn test_verbatim_text() {
        let rule = FormatRule::Verbatim;
        assert_eq!(rule.apply(&CellValue::Text("a_b & c".to_string())), "a_b & c");
    }
}
