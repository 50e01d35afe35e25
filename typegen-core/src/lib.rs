//! Core types and utilities for the typegen generator.
//!
//! This crate provides the formatting options every template fill is
//! parameterized by, plus the file and naming helpers shared across
//! the workspace.

mod file;
mod options;
mod utils;

// File operations
pub use file::{File, INDEX_FILE, WriteResult};
// Formatting options
pub use options::{GeneratorOptions, MAX_TAB_WIDTH, OptionsError, QuoteStyle, Strictness};
// String utilities
pub use utils::{to_kebab_case, type_identifiers};
