use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typegen_codegen::load_templates;
use typegen_core::{GeneratorOptions, QuoteStyle};
use typegen_manifest::{OptionsConfig, TypegenToml};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to typegen.toml (defaults to ./typegen.toml)
    #[arg(short, long, default_value = "typegen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Spaces per indentation level (overrides typegen.toml setting)
    #[arg(long)]
    pub tab_width: Option<u8>,

    /// Quote style: single or double (overrides typegen.toml setting)
    #[arg(long)]
    pub quote_style: Option<QuoteStyle>,

    /// Fail when a template contains tags that are never filled
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let typegen_toml = TypegenToml::open(&self.config).unwrap_or_exit();
        let manifest = typegen_toml.manifest();
        tracing::debug!(
            config = %self.config.display(),
            types = manifest.type_count(),
            "loaded manifest"
        );

        let options = self.generator_options(&manifest.options);
        let templates =
            load_templates(typegen_toml.templates_dir().as_deref(), options).unwrap_or_exit();

        let report = ops::generate(
            manifest,
            templates,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Manifest options with command-line overrides applied.
    fn generator_options(&self, config: &OptionsConfig) -> GeneratorOptions {
        let mut options = config.generator_options();
        if let Some(width) = self.tab_width {
            options = options.tab_width(width);
        }
        if let Some(style) = self.quote_style {
            options = options.quote_style(style);
        }
        if self.strict {
            options = options.strict();
        }
        options
    }
}
