//! Core operations.
//!
//! This module contains the business logic for typegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod templates;

pub use check::{check, describe_tag_report};
pub use generate::{GenerateOptions, generate};
pub use templates::templates;
