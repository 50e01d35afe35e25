//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest and template validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Declared type counts: classes, interfaces, enums.
    pub counts: (usize, usize, usize),
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            let (classes, interfaces, enums) = self.counts;
            out.newline();
            out.key_value("  classes", &classes.to_string());
            out.key_value("  interfaces", &interfaces.to_string());
            out.key_value("  enums", &enums.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_errors_hide_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("typegen.toml"),
            counts: (1, 0, 0),
            errors: vec![
                "template 'index' contains tag '$tg{export}' which is never filled".to_string(),
            ],
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stderr,
            vec!["error: template 'index' contains tag '$tg{export}' which is never filled"]
        );
        assert_eq!(out.stdout, vec![""]);
    }

    #[test]
    fn test_valid_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("typegen.toml"),
            counts: (2, 1, 0),
            errors: Vec::new(),
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "✓ typegen.toml is valid",
                "",
                "  classes: 2",
                "  interfaces: 1",
                "  enums: 0",
            ]
        );
    }
}
