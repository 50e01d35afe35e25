use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typegen_codegen::load_templates;
use typegen_core::Strictness;
use typegen_manifest::TypegenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to typegen.toml (defaults to ./typegen.toml)
    #[arg(short, long, default_value = "typegen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let typegen_toml = TypegenToml::open(&self.config).unwrap_or_exit();
        let manifest = typegen_toml.manifest();
        tracing::debug!(
            config = %self.config.display(),
            types = manifest.type_count(),
            "loaded manifest"
        );

        // Load leniently so every mismatch ends up in the report
        let options = manifest
            .options
            .generator_options()
            .strictness(Strictness::Lenient);
        let templates =
            load_templates(typegen_toml.templates_dir().as_deref(), options).unwrap_or_exit();

        let report = ops::check(manifest, &templates, &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
