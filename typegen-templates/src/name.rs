//! Logical template names.

use std::{fmt, str::FromStr};

/// One of the templates the engine loads at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateName {
    Class,
    ClassProperty,
    ClassPropertyWithDefault,
    Interface,
    InterfaceProperty,
    Enum,
    EnumValue,
    Import,
    Index,
    IndexExport,
    /// Shared file heading used when a fill call supplies none.
    Heading,
}

impl TemplateName {
    /// Every template, in load order.
    pub const ALL: [TemplateName; 11] = [
        TemplateName::Class,
        TemplateName::ClassProperty,
        TemplateName::ClassPropertyWithDefault,
        TemplateName::Interface,
        TemplateName::InterfaceProperty,
        TemplateName::Enum,
        TemplateName::EnumValue,
        TemplateName::Import,
        TemplateName::Index,
        TemplateName::IndexExport,
        TemplateName::Heading,
    ];

    /// Returns the logical name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Class => "class",
            TemplateName::ClassProperty => "classProperty",
            TemplateName::ClassPropertyWithDefault => "classPropertyWithDefault",
            TemplateName::Interface => "interface",
            TemplateName::InterfaceProperty => "interfaceProperty",
            TemplateName::Enum => "enum",
            TemplateName::EnumValue => "enumValue",
            TemplateName::Import => "import",
            TemplateName::Index => "index",
            TemplateName::IndexExport => "indexExport",
            TemplateName::Heading => "heading",
        }
    }

    /// File name of the template inside a template directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateName::Class => "class.tpl",
            TemplateName::ClassProperty => "class_property.tpl",
            TemplateName::ClassPropertyWithDefault => "class_property_with_default.tpl",
            TemplateName::Interface => "interface.tpl",
            TemplateName::InterfaceProperty => "interface_property.tpl",
            TemplateName::Enum => "enum.tpl",
            TemplateName::EnumValue => "enum_value.tpl",
            TemplateName::Import => "import.tpl",
            TemplateName::Index => "index.tpl",
            TemplateName::IndexExport => "index_export.tpl",
            TemplateName::Heading => "heading.tpl",
        }
    }

    /// Tags the fill operation for this template substitutes, in substitution order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            TemplateName::Class | TemplateName::Interface => &[
                "imports",
                "name",
                "extends",
                "properties",
                "customHead",
                "customBody",
                "fileHeading",
            ],
            TemplateName::ClassProperty => &["accessor", "name", "type"],
            TemplateName::ClassPropertyWithDefault => &["accessor", "name", "type", "defaultValue"],
            TemplateName::InterfaceProperty => &["name", "modifier", "type"],
            TemplateName::Enum => &["imports", "name", "values", "modifiers", "fileHeading"],
            TemplateName::EnumValue => &["name", "value"],
            TemplateName::Import => &["name", "aliasText", "path"],
            TemplateName::Index => &["exports"],
            TemplateName::IndexExport => &["filename"],
            TemplateName::Heading => &[],
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<_> = TemplateName::ALL.iter().map(|n| n.as_str()).collect();
                format!("unknown template '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(TemplateName::from_str("class").unwrap(), TemplateName::Class);
        assert_eq!(
            TemplateName::from_str("enumvalue").unwrap(),
            TemplateName::EnumValue
        );
        assert!(TemplateName::from_str("struct").is_err());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = TemplateName::ALL.iter().map(|n| n.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TemplateName::ALL.len());
    }

    #[test]
    fn test_heading_has_no_fields() {
        assert!(TemplateName::Heading.fields().is_empty());
        assert_eq!(TemplateName::Index.fields(), &["exports"]);
    }
}
