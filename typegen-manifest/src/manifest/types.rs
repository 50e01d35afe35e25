//! Type declarations: classes, interfaces, enums and their members.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// An explicit import added to a generated file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportDef {
    /// Exported name to import
    pub name: String,
    /// Local alias (`import { name as alias }`)
    pub alias: Option<String>,
    /// Module path, written verbatim
    pub path: String,
}

/// Class member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessor {
    Public,
    Protected,
    Private,
}

impl Accessor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessor::Public => "public",
            Accessor::Protected => "protected",
            Accessor::Private => "private",
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A class or interface property.
///
/// Accepts either a bare type (`id = "number"`) or a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawProperty")]
pub struct PropertyDef {
    /// TypeScript type expression
    pub ty: String,
    /// Interface-only: render `name?: type`
    pub optional: bool,
    /// Class-only: initializer expression, written verbatim
    pub default: Option<String>,
    /// Class-only: visibility keyword
    pub accessor: Option<Accessor>,
    pub readonly: bool,
}

impl PropertyDef {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            optional: false,
            default: None,
            accessor: None,
            readonly: false,
        }
    }

    /// Modifier keywords preceding the name, each followed by a space
    /// (e.g. `"public readonly "`).
    pub fn modifier_text(&self) -> String {
        let mut text = String::new();
        if let Some(accessor) = self.accessor {
            text.push_str(accessor.as_str());
            text.push(' ');
        }
        if self.readonly {
            text.push_str("readonly ");
        }
        text
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProperty {
    Type(String),
    Table(PropertyTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyTable {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    optional: bool,
    default: Option<String>,
    accessor: Option<Accessor>,
    #[serde(default)]
    readonly: bool,
}

impl From<RawProperty> for PropertyDef {
    fn from(raw: RawProperty) -> Self {
        match raw {
            RawProperty::Type(ty) => PropertyDef::new(ty),
            RawProperty::Table(table) => PropertyDef {
                ty: table.ty,
                optional: table.optional,
                default: table.default,
                accessor: table.accessor,
                readonly: table.readonly,
            },
        }
    }
}

/// A class or interface declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDef {
    /// Base type name
    pub extends: Option<String>,
    /// Code inserted before the declaration
    #[serde(default)]
    pub custom_head: String,
    /// Code inserted after the properties, inside the body
    #[serde(default)]
    pub custom_body: String,
    /// Properties in declaration order
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDef>,
    #[serde(default)]
    pub imports: Vec<ImportDef>,
}

/// Value of one enum member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnumMemberValue {
    Int(i64),
    Str(String),
}

/// An enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDef {
    /// Render as `const enum`
    #[serde(default, rename = "const")]
    pub is_const: bool,
    /// Members in declaration order
    ///
    /// Either a table of explicit values or a list of names numbered from 0.
    #[serde(default, deserialize_with = "deserialize_values")]
    pub values: IndexMap<String, EnumMemberValue>,
    #[serde(default)]
    pub imports: Vec<ImportDef>,
}

fn deserialize_values<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, EnumMemberValue>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValues {
        Names(Vec<String>),
        Table(IndexMap<String, EnumMemberValue>),
    }

    Ok(match RawValues::deserialize(deserializer)? {
        RawValues::Names(names) => names
            .into_iter()
            .zip(0..)
            .map(|(name, i)| (name, EnumMemberValue::Int(i)))
            .collect(),
        RawValues::Table(values) => values,
    })
}
