//! typegen.toml parsing and validation.
//!
//! The manifest describes the TypeScript types to generate (classes,
//! interfaces and enums) together with the formatting options for the run.
//! Errors are reported as [`miette`] diagnostics pointing into the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    Accessor, EnumDef, EnumMemberValue, ImportDef, Manifest, OptionsConfig, ParseContext,
    PropertyDef, TypeDef, TypeKind, TypegenToml, parse_manifest,
};
