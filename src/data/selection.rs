//! Column selection and per-column precision settings
//!
//! Both are plain values: a UI or CLI edits them and passes them into
//! [`generate`](crate::generate) explicitly.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_PRECISION, MAX_PRECISION};
use super::table::Table;

/// Set of column names chosen for output.
///
/// Output order always follows the table, so insertion order here only
/// matters for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(IndexSet<String>);

impl Selection {
    /// Empty selection
    pub fn none() -> Self {
        Self::default()
    }

    /// Every column of the table
    pub fn all(table: &Table) -> Self {
        table.column_names().collect()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.0.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Selection(iter.into_iter().map(Into::into).collect())
    }
}

/// Decimal places per numeric column.
///
/// Values are stored as given; range checks happen when the map is used so
/// that out-of-range settings are reported instead of clamped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrecisionMap(IndexMap<String, u8>);

impl PrecisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default precision for every numeric column of the table
    pub fn defaults(table: &Table) -> Self {
        table
            .numeric_columns()
            .map(|name| (name.to_string(), DEFAULT_PRECISION))
            .collect()
    }

    /// Set the precision of a column, returning the previous value
    pub fn set(&mut self, name: impl Into<String>, places: u8) -> Option<u8> {
        self.0.insert(name.into(), places)
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.0.get(name).copied()
    }

    /// Precision for a column, falling back to `default` when unset
    pub fn get_or(&self, name: &str, default: u8) -> u8 {
        self.get(name).unwrap_or(default)
    }

    pub fn remove(&mut self, name: &str) -> Option<u8> {
        self.0.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(name, places)| (name.as_str(), *places))
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for PrecisionMap {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        PrecisionMap(
            iter.into_iter()
                .map(|(name, places)| (name.into(), places))
                .collect(),
        )
    }
}

/// Whether a precision value is in the accepted range
pub fn is_valid_precision(places: u8) -> bool {
    places <= MAX_PRECISION
}
