//! Template-filling engine for the typegen TypeScript generator.
//!
//! Templates are plain text containing `$tg{name}` tags. A
//! [`TemplateService`] loads the eleven templates from a [`TemplateStore`]
//! once, then exposes one fill operation per TypeScript construct (class,
//! interface, enum, import, index, ...). Every fill first normalizes the
//! `tab` and `quot` tags according to the bound [`GeneratorOptions`], then
//! substitutes the construct's fields in a fixed order.
//!
//! # Module Organization
//!
//! - [`tag`] - Tag syntax, substitution and normalization primitives
//! - [`validate`] - Tag/field cross-checking used by strict mode
//!
//! [`GeneratorOptions`]: typegen_core::GeneratorOptions

mod error;
mod name;
mod service;
mod store;

pub mod tag;
pub mod validate;

pub use error::{Error, Result};
pub use name::TemplateName;
pub use service::{EnumFill, EnumValue, TemplateService, TypeFill};
pub use store::{DirStore, EmbeddedStore, MemoryStore, TemplateStore};
pub use validate::TagReport;
