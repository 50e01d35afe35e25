//! Template stores: where raw template text comes from.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{Error, Result, TemplateName};

/// Read-only lookup from logical template name to template text.
///
/// Stores are only consulted while a [`TemplateService`](crate::TemplateService)
/// is being built.
pub trait TemplateStore {
    /// Fetch the raw text of one template.
    fn get_template(&self, name: TemplateName) -> Result<String>;
}

impl<S: TemplateStore + ?Sized> TemplateStore for &S {
    fn get_template(&self, name: TemplateName) -> Result<String> {
        (**self).get_template(name)
    }
}

/// The built-in TypeScript templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    /// Built-in text of a template.
    pub fn text(name: TemplateName) -> &'static str {
        match name {
            TemplateName::Class => include_str!("../templates/class.tpl"),
            TemplateName::ClassProperty => include_str!("../templates/class_property.tpl"),
            TemplateName::ClassPropertyWithDefault => {
                include_str!("../templates/class_property_with_default.tpl")
            }
            TemplateName::Interface => include_str!("../templates/interface.tpl"),
            TemplateName::InterfaceProperty => include_str!("../templates/interface_property.tpl"),
            TemplateName::Enum => include_str!("../templates/enum.tpl"),
            TemplateName::EnumValue => include_str!("../templates/enum_value.tpl"),
            TemplateName::Import => include_str!("../templates/import.tpl"),
            TemplateName::Index => include_str!("../templates/index.tpl"),
            TemplateName::IndexExport => include_str!("../templates/index_export.tpl"),
            TemplateName::Heading => include_str!("../templates/heading.tpl"),
        }
    }
}

impl TemplateStore for EmbeddedStore {
    fn get_template(&self, name: TemplateName) -> Result<String> {
        Ok(Self::text(name).to_string())
    }
}

/// In-memory store keyed by logical name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    templates: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of the built-in templates.
    pub fn embedded() -> Self {
        TemplateName::ALL
            .into_iter()
            .fold(Self::new(), |store, name| {
                store.with(name, EmbeddedStore::text(name))
            })
    }

    /// Add or replace a template.
    pub fn with(mut self, name: TemplateName, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: TemplateName, text: impl Into<String>) {
        self.templates.insert(name.as_str().to_string(), text.into());
    }

    pub fn remove(&mut self, name: TemplateName) -> Option<String> {
        self.templates.shift_remove(name.as_str())
    }
}

impl TemplateStore for MemoryStore {
    fn get_template(&self, name: TemplateName) -> Result<String> {
        self.templates
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| Error::MissingTemplate {
                name: name.as_str().to_string(),
            })
    }
}

/// Templates read from `<dir>/<file_name>` on disk.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
    overlay: bool,
}

impl DirStore {
    /// Every template must exist in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overlay: false,
        }
    }

    /// Templates absent from the directory fall back to the built-in ones.
    pub fn overlay(mut self) -> Self {
        self.overlay = true;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateStore for DirStore {
    fn get_template(&self, name: TemplateName) -> Result<String> {
        let path = self.dir.join(name.file_name());

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(
                    template = %name,
                    path = %path.display(),
                    "loaded template override"
                );
                Ok(text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if !self.dir.is_dir() {
                    return Err(Error::MissingDirectory {
                        path: self.dir.clone(),
                    });
                }
                if self.overlay {
                    Ok(EmbeddedStore::text(name).to_string())
                } else {
                    Err(Error::MissingTemplate {
                        name: name.as_str().to_string(),
                    })
                }
            }
            Err(source) => Err(Error::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_embedded_store_has_every_template() {
        for name in TemplateName::ALL {
            assert!(EmbeddedStore.get_template(name).is_ok(), "{name} missing");
        }
    }

    #[test]
    fn test_memory_store_missing_template() {
        let store = MemoryStore::new().with(TemplateName::Index, "$tg{exports}");

        assert_eq!(store.get_template(TemplateName::Index).unwrap(), "$tg{exports}");
        let err = store.get_template(TemplateName::Class).unwrap_err();
        assert!(matches!(err, Error::MissingTemplate { name } if name == "class"));
    }

    #[test]
    fn test_memory_store_embedded_copy() {
        let mut store = MemoryStore::embedded();
        assert!(store.remove(TemplateName::Heading).is_some());
        assert!(store.get_template(TemplateName::Heading).is_err());
        assert!(store.get_template(TemplateName::Enum).is_ok());
    }

    #[test]
    fn test_dir_store_reads_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.tpl"), "// index\n$tg{exports}").unwrap();

        let store = DirStore::new(temp.path());
        assert_eq!(
            store.get_template(TemplateName::Index).unwrap(),
            "// index\n$tg{exports}"
        );
        assert!(matches!(
            store.get_template(TemplateName::Import),
            Err(Error::MissingTemplate { .. })
        ));
    }

    #[test]
    fn test_dir_store_missing_directory() {
        let temp = TempDir::new().unwrap();
        let store = DirStore::new(temp.path().join("tempaltes")).overlay();

        let err = store.get_template(TemplateName::Class).unwrap_err();
        assert!(matches!(err, Error::MissingDirectory { ref path } if path.ends_with("tempaltes")));
    }

    #[test]
    fn test_dir_store_overlay_falls_back() {
        let temp = TempDir::new().unwrap();
        let store = DirStore::new(temp.path()).overlay();

        assert_eq!(
            store.get_template(TemplateName::Import).unwrap(),
            EmbeddedStore::text(TemplateName::Import)
        );
    }
}
