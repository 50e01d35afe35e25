use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Name of the generated barrel file.
pub const INDEX_FILE: &str = "index.ts";

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created or its content replaced
    Written,
    /// File already had the same content and was left untouched
    Unchanged,
}

/// A generated output file, addressed relative to an output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file; existing content at the path is replaced.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path relative to the output directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file below `base`, creating parent directories as needed.
    pub fn write_to(&self, base: &Path) -> Result<WriteResult> {
        let target = base.join(&self.path);

        if target.exists() {
            let current = std::fs::read_to_string(&target)
                .wrap_err_with(|| format!("failed to read '{}'", target.display()))?;
            if current == self.content {
                tracing::debug!(path = %target.display(), "file is up to date");
                return Ok(WriteResult::Unchanged);
            }
        }

        write_file(&target, &self.content)?;
        tracing::debug!(path = %target.display(), bytes = self.content.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}
