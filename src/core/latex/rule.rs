//! Horizontal rule styles for LaTeX table generation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Style of the horizontal lines around the header and the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStyle {
    /// Booktabs \toprule, \midrule, \bottomrule
    #[default]
    Booktabs,
    /// Plain \hline in the same three places
    Hline,
    /// No horizontal lines
    None,
}

/// Position of a rule inside the tabular
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePosition {
    Top,
    AfterHeader,
    Bottom,
}

impl RuleStyle {
    /// LaTeX command for a rule at the given position
    pub fn to_latex(&self, position: RulePosition) -> Option<&'static str> {
        match (self, position) {
            (RuleStyle::Booktabs, RulePosition::Top) => Some("\\toprule"),
            (RuleStyle::Booktabs, RulePosition::AfterHeader) => Some("\\midrule"),
            (RuleStyle::Booktabs, RulePosition::Bottom) => Some("\\bottomrule"),
            (RuleStyle::Hline, _) => Some("\\hline"),
            (RuleStyle::None, _) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStyle::Booktabs => "booktabs",
            RuleStyle::Hline => "hline",
            RuleStyle::None => "none",
        }
    }
}

impl fmt::Display for RuleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "booktabs" => Ok(RuleStyle::Booktabs),
            "hline" => Ok(RuleStyle::Hline),
            "none" => Ok(RuleStyle::None),
            other => Err(format!("unknown rule style '{}'", other)),
        }
    }
}
