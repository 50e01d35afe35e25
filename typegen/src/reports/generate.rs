//! Generate command report data structures.

use std::path::PathBuf;

use typegen_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Template warnings collected before generating.
    pub warnings: Vec<String>,
    /// Number of declared types.
    pub type_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files created or rewritten.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            "Types",
            &format!(
                "{} type{}",
                self.type_count,
                if self.type_count == 1 { "" } else { "s" }
            ),
        );
        out.key_value("Generated", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.unchanged.is_empty() {
            out.newline();
            out.section("Unchanged");
            for path in &written.unchanged {
                out.list_item(path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
