//! Core modules
//!
//! This module contains the two engines:
//! - `loader`: CSV / Excel file to typed table
//! - `latex`: typed table to LaTeX tabular

pub mod latex;
pub mod loader;

// Re-export main types and functions from latex
pub use latex::{generate, generate_with_options, RuleStyle, TableOptions};

// Re-export main types and functions from loader
pub use loader::{load, load_with_options, LoadOptions, SheetSelector, SourceFormat};
