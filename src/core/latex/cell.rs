//! Cell types and alignment for LaTeX table generation

use crate::data::table::ColumnType;

/// LaTeX column alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatexCellAlign {
    #[default]
    Left,
    Right,
}

impl LatexCellAlign {
    /// Convert to LaTeX column specification character
    pub fn to_char(&self) -> char {
        match self {
            LatexCellAlign::Left => 'l',
            LatexCellAlign::Right => 'r',
        }
    }

    /// Numbers are right-aligned, everything else left-aligned
    pub fn for_column(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Numeric => LatexCellAlign::Right,
            ColumnType::Text => LatexCellAlign::Left,
        }
    }
}

/// A single formatted table cell.
///
/// Content is emitted verbatim: characters such as `&`, `%` or `_` are not
/// escaped, so callers that need literal specials must escape them in the
/// source data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LatexCell {
    pub content: String,
}

impl LatexCell {
    pub fn new(content: impl Into<String>) -> Self {
        LatexCell {
            content: content.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn to_latex(&self) -> &str {
        &self.content
    }
}

impl From<String> for LatexCell {
    fn from(content: String) -> Self {
        LatexCell { content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_chars() {
        assert_eq!(LatexCellAlign::Left.to_char(), 'l');
        assert_eq!(LatexCellAlign::Right.to_char(), 'r');
    }

    #[test]
    fn test_align_for_column() {
        assert_eq!(
            LatexCellAlign::for_column(ColumnType::Numeric),
            LatexCellAlign::Right
        );
        assert_eq!(
            LatexCellAlign::for_column(ColumnType::Text),
            LatexCellAlign::Left
        );
    }

    #[test]
    fn test_empty_cell_has_no_content() {
        assert_eq!(LatexCell::empty().to_latex(), "");
    }

    #[test]
    fn test_content_is_not_escaped() {
        let cell = LatexCell::new("50% & $x_1$");
        assert_eq!(cell.to_latex(), "50% & $x_1$");
    }
}
