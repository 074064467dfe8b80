//! Session state for interactive front ends
//!
//! A [`Session`] owns everything a front end edits between calls: the loaded
//! table, the column selection, the precision settings and the last
//! generated output. A failed load leaves the previous state untouched; a
//! successful one replaces it as a whole.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::latex::{generate_with_options, TableOptions};
use crate::core::loader::{load_with_options, LoadOptions};
use crate::data::selection::{is_valid_precision, PrecisionMap, Selection};
use crate::data::table::{ColumnType, Table};
use crate::utils::error::{ConversionError, ConversionResult};

/// Row and column counts of a freshly loaded table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows: usize,
    pub columns: usize,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loaded {} rows, {} columns", self.rows, self.columns)
    }
}

/// One entry of the column list shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: ColumnType,
    pub selected: bool,
    /// Decimal places; `None` for text columns
    pub precision: Option<u8>,
}

impl ColumnInfo {
    /// Display label, e.g. `score (numeric)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.column_type)
    }
}

#[derive(Debug, Clone)]
struct Loaded {
    path: PathBuf,
    table: Table,
    selection: Selection,
    precision: PrecisionMap,
}

/// Single-owner holder of the loaded table and the user's choices
#[derive(Debug, Clone, Default)]
pub struct Session {
    loaded: Option<Loaded>,
    options: TableOptions,
    output: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TableOptions) -> Self {
        Session {
            options,
            ..Default::default()
        }
    }

    /// Load a file with default options, replacing the current table
    pub fn load(&mut self, path: impl AsRef<Path>) -> ConversionResult<LoadSummary> {
        self.load_with_options(path, &LoadOptions::default())
    }

    /// Load a file, replacing the current table only if loading succeeds
    pub fn load_with_options(
        &mut self,
        path: impl AsRef<Path>,
        options: &LoadOptions,
    ) -> ConversionResult<LoadSummary> {
        let path = path.as_ref();
        let table = load_with_options(path, options)?;
        Ok(self.replace_table(path.to_path_buf(), table))
    }

    /// Install an already loaded table, resetting selection and precision
    pub fn replace_table(&mut self, path: PathBuf, table: Table) -> LoadSummary {
        let summary = LoadSummary {
            rows: table.row_count(),
            columns: table.column_count(),
        };
        self.loaded = Some(Loaded {
            path,
            selection: Selection::all(&table),
            precision: PrecisionMap::defaults(&table),
            table,
        });
        self.output = None;
        summary
    }

    /// Drop the table, the user's choices and the output
    pub fn clear(&mut self) {
        self.loaded = None;
        self.output = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn table(&self) -> Option<&Table> {
        self.loaded.as_ref().map(|loaded| &loaded.table)
    }

    pub fn path(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|loaded| loaded.path.as_path())
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.loaded.as_ref().map(|loaded| &loaded.selection)
    }

    pub fn precision(&self) -> Option<&PrecisionMap> {
        self.loaded.as_ref().map(|loaded| &loaded.precision)
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TableOptions) {
        self.options = options;
    }

    /// Column list in table order
    pub fn columns(&self) -> Vec<ColumnInfo> {
        let Some(loaded) = &self.loaded else {
            return Vec::new();
        };
        loaded
            .table
            .columns()
            .iter()
            .map(|column| ColumnInfo {
                name: column.name.clone(),
                column_type: column.column_type,
                selected: loaded.selection.contains(&column.name),
                precision: column.column_type.is_numeric().then(|| {
                    loaded
                        .precision
                        .get_or(&column.name, self.options.default_precision)
                }),
            })
            .collect()
    }

    pub fn set_selected(&mut self, name: &str, selected: bool) -> ConversionResult<()> {
        let loaded = self.loaded_mut()?;
        if !loaded.table.contains(name) {
            return Err(ConversionError::unknown_column(name));
        }
        if selected {
            loaded.selection.insert(name);
        } else {
            loaded.selection.remove(name);
        }
        Ok(())
    }

    pub fn select_all(&mut self) -> ConversionResult<()> {
        let loaded = self.loaded_mut()?;
        loaded.selection = Selection::all(&loaded.table);
        Ok(())
    }

    pub fn deselect_all(&mut self) -> ConversionResult<()> {
        self.loaded_mut()?.selection.clear();
        Ok(())
    }

    /// Replace the selection as a whole
    pub fn set_selection(&mut self, selection: Selection) -> ConversionResult<()> {
        let loaded = self.loaded_mut()?;
        if let Some(name) = selection.iter().find(|name| !loaded.table.contains(name)) {
            return Err(ConversionError::unknown_column(name));
        }
        loaded.selection = selection;
        Ok(())
    }

    /// Set the decimal places of a numeric column
    pub fn set_precision(&mut self, name: &str, places: u8) -> ConversionResult<()> {
        let loaded = self.loaded_mut()?;
        match loaded.table.column_type(name) {
            None => Err(ConversionError::unknown_column(name)),
            Some(ColumnType::Text) => Err(ConversionError::NotNumeric {
                column: name.to_string(),
            }),
            Some(ColumnType::Numeric) if !is_valid_precision(places) => {
                Err(ConversionError::InvalidPrecision {
                    column: name.to_string(),
                    precision: places,
                })
            }
            Some(ColumnType::Numeric) => {
                loaded.precision.set(name, places);
                Ok(())
            }
        }
    }

    /// Whether a table is loaded and at least one column is selected
    pub fn can_generate(&self) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|loaded| !loaded.selection.is_empty())
    }

    /// Generate LaTeX from the current state and keep it as the output
    pub fn generate(&mut self) -> ConversionResult<&str> {
        let loaded = self.loaded.as_ref().ok_or(ConversionError::NoTableLoaded)?;
        let latex = generate_with_options(
            &loaded.table,
            &loaded.selection,
            &loaded.precision,
            &self.options,
        )?;
        Ok(self.output.insert(latex).as_str())
    }

    /// Last successfully generated output
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn loaded_mut(&mut self) -> ConversionResult<&mut Loaded> {
        self.loaded.as_mut().ok_or(ConversionError::NoTableLoaded)
    }
}
