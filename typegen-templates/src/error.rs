use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use typegen_core::OptionsError;

/// Result type for template loading.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("template '{name}' not found")]
    #[diagnostic(
        code(typegen::missing_template),
        help("every template store must provide all eleven templates")
    )]
    MissingTemplate { name: String },

    #[error("template directory '{}' does not exist", path.display())]
    #[diagnostic(
        code(typegen::missing_template_dir),
        help("check the templates_dir setting in typegen.toml")
    )]
    MissingDirectory { path: PathBuf },

    #[error("failed to read template '{}'", path.display())]
    #[diagnostic(code(typegen::template_io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template '{template}' contains tags that are never filled: {}", tags.join(", "))]
    #[diagnostic(
        code(typegen::unknown_tags),
        help("check the tag names for typos, or disable strict mode")
    )]
    UnknownTags { template: String, tags: Vec<String> },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Options(#[from] OptionsError),
}
