//! Check operation - manifest and template validation.

use std::path::Path;

use typegen_manifest::Manifest;
use typegen_templates::{TagReport, TemplateService};

use crate::reports::CheckReport;

/// Human-readable lines for one template mismatch.
///
/// Returns `(unknown, unused)` messages; unknown tags would be left in the
/// output verbatim, unused fields are silently dropped.
pub fn describe_tag_report(report: &TagReport) -> (Vec<String>, Vec<String>) {
    let unknown = report
        .unknown
        .iter()
        .map(|tag| {
            format!(
                "template '{}' contains tag '$tg{{{}}}' which is never filled",
                report.template, tag
            )
        })
        .collect();
    let unused = report
        .unused
        .iter()
        .map(|field| {
            format!(
                "template '{}' never uses field '{}'",
                report.template, field
            )
        })
        .collect();
    (unknown, unused)
}

/// Execute the check operation.
///
/// `templates` should be loaded leniently so every mismatch is reported;
/// unknown tags count as errors when the manifest asks for strict mode.
pub fn check(manifest: &Manifest, templates: &TemplateService, config_path: &Path) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for report in templates.unmatched_tags() {
        let (unknown, unused) = describe_tag_report(&report);
        if manifest.options.strict {
            errors.extend(unknown);
        } else {
            warnings.extend(unknown);
        }
        warnings.extend(unused);
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        counts: (
            manifest.classes.len(),
            manifest.interfaces.len(),
            manifest.enums.len(),
        ),
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use typegen_core::GeneratorOptions;
    use typegen_templates::{MemoryStore, TemplateName};

    use super::*;

    fn templates_with_typo() -> TemplateService {
        let store = MemoryStore::embedded().with(TemplateName::Index, "$tg{export}");
        TemplateService::new(store, GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn test_clean_templates() {
        let manifest: Manifest = "[classes.User]\n".parse().unwrap();
        let templates = TemplateService::new(MemoryStore::embedded(), GeneratorOptions::default())
            .unwrap();

        let report = check(&manifest, &templates, Path::new("typegen.toml"));

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert_eq!(report.counts, (1, 0, 0));
    }

    #[test]
    fn test_unknown_tag_is_warning_when_lenient() {
        let manifest: Manifest = "".parse().unwrap();
        let report = check(&manifest, &templates_with_typo(), Path::new("typegen.toml"));

        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec![
                "template 'index' contains tag '$tg{export}' which is never filled",
                "template 'index' never uses field 'exports'",
            ]
        );
    }

    #[test]
    fn test_unknown_tag_is_error_when_strict() {
        let manifest: Manifest = "[options]\nstrict = true\n".parse().unwrap();
        let report = check(&manifest, &templates_with_typo(), Path::new("typegen.toml"));

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
    }
}
