use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typegen_codegen::load_templates;
use typegen_core::GeneratorOptions;
use typegen_manifest::TypegenToml;
use typegen_templates::TemplateName;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TemplatesCommand {
    /// Only print this template (e.g. class, enumValue)
    #[arg(short, long)]
    pub name: Option<TemplateName>,

    /// Show templates as resolved for this typegen.toml, including overrides
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl TemplatesCommand {
    pub fn run(&self) -> Result<()> {
        let templates_dir = match &self.config {
            Some(config) => TypegenToml::open(config).unwrap_or_exit().templates_dir(),
            None => None,
        };
        let service =
            load_templates(templates_dir.as_deref(), GeneratorOptions::default()).unwrap_or_exit();

        ops::templates(&service, self.name).render(&mut TerminalOutput::new());
        Ok(())
    }
}
