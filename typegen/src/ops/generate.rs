//! Generate operation - TypeScript files from the manifest.

use std::path::Path;

use eyre::{Context, Result};
use typegen_codegen::Generator;
use typegen_manifest::Manifest;
use typegen_templates::TemplateService;

use super::describe_tag_report;
use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    manifest: &Manifest,
    templates: TemplateService,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    // Unknown tags would be copied into every file using that template
    let warnings = templates
        .unmatched_tags()
        .iter()
        .flat_map(|report| describe_tag_report(report).0)
        .collect();

    let generator = Generator::new(manifest, templates);
    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            unchanged: generated.unchanged,
        })
    };

    Ok(GenerateReport {
        warnings,
        type_count: manifest.type_count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use typegen_core::GeneratorOptions;
    use typegen_templates::EmbeddedStore;

    use super::*;

    fn templates() -> TemplateService {
        TemplateService::new(EmbeddedStore, GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let manifest: Manifest = "[classes.User]\n".parse().unwrap();
        let temp = TempDir::new().unwrap();

        let report = generate(
            &manifest,
            templates(),
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(files) = report.result else {
            panic!("expected preview");
        };
        assert_eq!(files.len(), 2);
        assert!(!temp.path().join("user.ts").exists());
    }

    #[test]
    fn test_writes_files() {
        let manifest: Manifest = "[enums.Color]\nvalues = [\"Red\"]\n".parse().unwrap();
        let temp = TempDir::new().unwrap();

        let report = generate(
            &manifest,
            templates(),
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(report.type_count, 1);
        assert!(report.warnings.is_empty());
        assert!(temp.path().join("color.ts").exists());
        assert!(temp.path().join("index.ts").exists());
    }
}
