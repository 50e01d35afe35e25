//! Manifest types and parsing for typegen.toml files.

mod file;
mod options;
mod parse;
mod types;
mod validate;

use indexmap::IndexMap;
pub use file::TypegenToml;
pub use options::OptionsConfig;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use types::{Accessor, EnumDef, EnumMemberValue, ImportDef, PropertyDef, TypeDef};
pub use validate::ParseContext;

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
        }
    }
}

/// Root manifest for typegen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Formatting and output options
    #[serde(default)]
    pub options: OptionsConfig,

    /// Classes in declaration order
    #[serde(default)]
    pub classes: IndexMap<String, TypeDef>,

    /// Interfaces in declaration order
    #[serde(default)]
    pub interfaces: IndexMap<String, TypeDef>,

    /// Enums in declaration order
    #[serde(default)]
    pub enums: IndexMap<String, EnumDef>,
}

impl Manifest {
    /// Every declared type name with its kind (classes, then interfaces, then enums).
    pub fn type_names(&self) -> impl Iterator<Item = (&str, TypeKind)> {
        let classes = self.classes.keys().map(|n| (n.as_str(), TypeKind::Class));
        let interfaces = self
            .interfaces
            .keys()
            .map(|n| (n.as_str(), TypeKind::Interface));
        let enums = self.enums.keys().map(|n| (n.as_str(), TypeKind::Enum));
        classes.chain(interfaces).chain(enums)
    }

    /// Kind of the declared type called `name`, if any.
    pub fn kind_of(&self, name: &str) -> Option<TypeKind> {
        self.type_names()
            .find(|(declared, _)| *declared == name)
            .map(|(_, kind)| kind)
    }

    /// Total number of declared types.
    pub fn type_count(&self) -> usize {
        self.classes.len() + self.interfaces.len() + self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_count() == 0
    }
}
