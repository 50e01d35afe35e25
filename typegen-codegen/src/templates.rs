//! Template service construction for a manifest.

use std::path::Path;

use typegen_core::GeneratorOptions;
use typegen_templates::{DirStore, EmbeddedStore, Result, TemplateService};

/// Build the template service for a run.
///
/// With a template directory, files found there override the built-in
/// templates one by one; missing files fall back to the built-ins.
pub fn load_templates(
    templates_dir: Option<&Path>,
    options: GeneratorOptions,
) -> Result<TemplateService> {
    match templates_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "loading templates with overrides");
            TemplateService::new(DirStore::new(dir).overlay(), options)
        }
        None => TemplateService::new(EmbeddedStore, options),
    }
}
