//! Tag/field cross-checking for strict mode.

use crate::{
    TemplateName,
    tag::{QUOTE_TAG, TAB_TAG, find_tags},
};

/// Mismatches between one template and the fields its fill operation supplies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReport {
    pub template: TemplateName,
    /// Tags present in the template that no field fills.
    pub unknown: Vec<String>,
    /// Fields whose tag does not occur in the template.
    pub unused: Vec<String>,
}

impl TagReport {
    /// Whether template and fields agree exactly.
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.unused.is_empty()
    }
}

/// Compare the tags in `text` with the fields of `template`.
pub fn check_template(template: TemplateName, text: &str) -> TagReport {
    let fields = template.fields();
    let tags = find_tags(text);

    let unknown = tags
        .iter()
        .filter(|tag| **tag != TAB_TAG && **tag != QUOTE_TAG)
        .filter(|tag| !fields.contains(*tag))
        .map(|tag| tag.to_string())
        .collect();

    let unused = fields
        .iter()
        .filter(|field| !tags.contains(*field))
        .map(|field| field.to_string())
        .collect();

    TagReport {
        template,
        unknown,
        unused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmbeddedStore;

    #[test]
    fn test_builtin_templates_are_clean() {
        for name in TemplateName::ALL {
            let report = check_template(name, EmbeddedStore::text(name));
            assert!(report.is_clean(), "{report:?}");
        }
    }

    #[test]
    fn test_detects_typo_tag() {
        let report = check_template(
            TemplateName::IndexExport,
            "export * from './$tg{fileName}';",
        );
        assert_eq!(report.unknown, vec!["fileName"]);
        assert_eq!(report.unused, vec!["filename"]);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_special_tags_are_not_unknown() {
        let report = check_template(
            TemplateName::EnumValue,
            "$tg{tab}$tg{name} = $tg{quot}$tg{value}",
        );
        assert!(report.is_clean());
    }
}
