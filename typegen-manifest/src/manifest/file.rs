use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a typegen.toml file with both raw content and parsed manifest.
pub struct TypegenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl TypegenToml {
    /// Open and parse a typegen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the file; relative paths in the manifest resolve against it.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Template override directory, resolved against [`Self::base_dir`].
    pub fn templates_dir(&self) -> Option<PathBuf> {
        self.manifest
            .options
            .templates_dir
            .as_ref()
            .map(|dir| self.base_dir().join(dir))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_templates_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("typegen.toml");
        fs::write(
            &path,
            "[options]\ntemplates_dir = \"tpl\"\n\n[enums.Color]\nvalues = [\"Red\"]\n",
        )
        .unwrap();

        let file = TypegenToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.manifest().enums.len(), 1);
        assert_eq!(file.templates_dir(), Some(temp.path().join("tpl")));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = TypegenToml::open(temp.path().join("missing.toml"))
            .err()
            .unwrap();
        assert!(matches!(*err, crate::Error::Io { .. }));
    }
}
