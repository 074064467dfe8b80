//! Presets: saved column selection and precision settings
//!
//! A preset is a small TOML or JSON file:
//!
//! ```toml
//! columns = ["name", "score"]
//! exclude = []
//! default_precision = 2
//! rules = "booktabs"
//!
//! [precision]
//! score = 1
//! ```
//!
//! Every key is optional. Without `columns` every column of the table is
//! selected; `exclude` is applied afterwards.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::latex::{RuleStyle, TableOptions};
use crate::data::selection::{PrecisionMap, Selection};
use crate::data::table::Table;
use crate::utils::error::{ConversionError, ConversionResult};

/// Saved selection and precision settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    /// Columns to include; `None` means all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// Columns to leave out
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_precision: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleStyle>,
    /// Decimal places per numeric column (kept last so TOML writes it as a table)
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub precision: IndexMap<String, u8>,
}

/// Selection, precision and options resolved against a table
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPreset {
    pub selection: Selection,
    pub precision: PrecisionMap,
    pub options: TableOptions,
}

impl Preset {
    /// Read a preset from a `.toml` or `.json` file
    pub fn from_path(path: impl AsRef<Path>) -> ConversionResult<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|err| ConversionError::preset(path, err.to_string()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content).map_err(|message| ConversionError::preset(path, message))
        } else {
            Self::from_toml(&content).map_err(|message| ConversionError::preset(path, message))
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|err| err.to_string())
    }

    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string(self).map_err(|err| err.to_string())
    }

    /// Capture the current choices so they can be saved
    pub fn capture(
        selection: &Selection,
        precision: &PrecisionMap,
        options: &TableOptions,
    ) -> Self {
        Preset {
            columns: Some(selection.iter().map(str::to_string).collect()),
            exclude: Vec::new(),
            default_precision: Some(options.default_precision),
            rules: Some(options.rules),
            precision: precision
                .iter()
                .map(|(name, places)| (name.to_string(), places))
                .collect(),
        }
    }

    /// Turn the preset into engine inputs for a specific table.
    ///
    /// Column names are checked against the table; precision values are left
    /// for the generator to validate.
    pub fn resolve(&self, table: &Table) -> ConversionResult<ResolvedPreset> {
        let names = self
            .columns
            .iter()
            .flatten()
            .chain(self.exclude.iter())
            .chain(self.precision.keys());
        if let Some(name) = names.into_iter().find(|name| !table.contains(name)) {
            return Err(ConversionError::unknown_column(name.as_str()));
        }

        let mut selection = match &self.columns {
            Some(columns) => columns.iter().map(String::as_str).collect(),
            None => Selection::all(table),
        };
        for name in &self.exclude {
            selection.remove(name);
        }

        let mut precision = PrecisionMap::defaults(table);
        for (name, places) in &self.precision {
            precision.set(name.as_str(), *places);
        }

        let defaults = TableOptions::default();
        let options = TableOptions {
            rules: self.rules.unwrap_or(defaults.rules),
            default_precision: self.default_precision.unwrap_or(defaults.default_precision),
        };

        Ok(ResolvedPreset {
            selection,
            precision,
            options,
        })
    }
}
