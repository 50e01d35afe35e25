use std::path::PathBuf;

use serde::Deserialize;
use typegen_core::{GeneratorOptions, QuoteStyle, Strictness};

/// The `[options]` table of typegen.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    /// Spaces per indentation level
    pub tab_width: u8,

    /// Quote character for import paths and other quoted text
    pub quote_style: QuoteStyle,

    /// Reject templates containing tags that are never filled
    pub strict: bool,

    /// Directory with template overrides, relative to typegen.toml
    pub templates_dir: Option<PathBuf>,

    /// Heading written at the top of every type file instead of the template
    pub file_heading: Option<String>,

    /// Generate an index.ts re-exporting every file
    pub create_index: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            tab_width: 2,
            quote_style: QuoteStyle::Double,
            strict: false,
            templates_dir: None,
            file_heading: None,
            create_index: true,
        }
    }
}

impl OptionsConfig {
    /// Formatting options for the template service.
    pub fn generator_options(&self) -> GeneratorOptions {
        let strictness = if self.strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        };

        GeneratorOptions::new()
            .tab_width(self.tab_width)
            .quote_style(self.quote_style)
            .strictness(strictness)
    }
}
