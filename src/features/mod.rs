//! Feature modules - Front-end support
//!
//! This module contains the pieces an interactive front end builds on:
//! - Session state (loaded table, selection, precision, output)
//! - Presets (saved selection and precision settings)

#[cfg(feature = "presets")]
pub mod preset;
pub mod session;

// Re-export commonly used types
#[cfg(feature = "presets")]
pub use preset::{Preset, ResolvedPreset};
pub use session::{ColumnInfo, LoadSummary, Session};
