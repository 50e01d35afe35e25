//! The template service: one fill operation per output construct.

use std::{fmt, sync::Arc};

use typegen_core::GeneratorOptions;

use crate::{
    Error, Result, TemplateName, TemplateStore,
    tag::{normalize, substitute},
    validate::{TagReport, check_template},
};

/// Fields of a class or interface fill.
///
/// `file_heading` falls back to the `heading` template when `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeFill<'a> {
    pub imports: &'a str,
    pub name: &'a str,
    /// Pre-rendered extends clause, see [`TemplateService::extends_text`].
    pub extends: &'a str,
    pub properties: &'a str,
    pub custom_head: &'a str,
    pub custom_body: &'a str,
    pub file_heading: Option<&'a str>,
}

impl<'a> TypeFill<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

/// Fields of an enum fill.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumFill<'a> {
    pub imports: &'a str,
    pub name: &'a str,
    pub values: &'a str,
    /// Render as `const enum`.
    pub is_const: bool,
    pub file_heading: Option<&'a str>,
}

impl<'a> EnumFill<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

/// Value of one enum member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumValue<'a> {
    /// Rendered as the bare integer.
    Int(i64),
    /// Rendered as a double-quoted string literal.
    Str(&'a str),
}

impl fmt::Display for EnumValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Int(value) => write!(f, "{}", value),
            EnumValue::Str(value) => write!(f, "\"{}\"", value),
        }
    }
}

/// Loaded template text, one slot per [`TemplateName`].
#[derive(Debug)]
struct Templates {
    texts: Vec<(TemplateName, String)>,
}

impl Templates {
    fn load(store: &dyn TemplateStore) -> Result<Self> {
        let mut texts = Vec::with_capacity(TemplateName::ALL.len());
        for name in TemplateName::ALL {
            let text = store.get_template(name)?;
            tracing::debug!(template = %name, bytes = text.len(), "loaded template");
            texts.push((name, text));
        }
        Ok(Self { texts })
    }

    fn get(&self, name: TemplateName) -> &str {
        // `load` stores the names in `TemplateName::ALL` order.
        let (stored, text) = &self.texts[name as usize];
        debug_assert_eq!(*stored, name);
        text
    }
}

/// Renders TypeScript constructs by filling the loaded templates.
///
/// Templates are read from the store once, in [`TemplateService::new`], and
/// shared between clones. The formatting options are bound into each service
/// value; use [`TemplateService::with_options`] to render with different ones.
///
/// # Example
///
/// ```
/// use typegen_core::GeneratorOptions;
/// use typegen_templates::{EmbeddedStore, TemplateService};
///
/// let service = TemplateService::new(EmbeddedStore, GeneratorOptions::default()).unwrap();
/// let import = service.fill_import("User", Some("Account"), "./user");
/// assert_eq!(import, "import { User as Account } from \"./user\";\n");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateService {
    templates: Arc<Templates>,
    options: GeneratorOptions,
}

impl TemplateService {
    /// Load every template from `store` and bind `options`.
    ///
    /// Fails if a template is missing, the options are invalid, or (in strict
    /// mode) a template contains tags its construct never fills.
    pub fn new(store: impl TemplateStore, options: GeneratorOptions) -> Result<Self> {
        let templates = Templates::load(&store)?;
        let service = Self {
            templates: Arc::new(templates),
            options,
        };
        service.check_options()?;
        Ok(service)
    }

    /// A service sharing these templates but rendering with other options.
    pub fn with_options(&self, options: GeneratorOptions) -> Result<Self> {
        let service = Self {
            templates: Arc::clone(&self.templates),
            options,
        };
        service.check_options()?;
        Ok(service)
    }

    fn check_options(&self) -> Result<()> {
        self.options.validate()?;

        if self.options.is_strict() {
            for report in self.unmatched_tags() {
                if !report.unknown.is_empty() {
                    return Err(Error::UnknownTags {
                        template: report.template.to_string(),
                        tags: report.unknown,
                    });
                }
                tracing::warn!(
                    template = %report.template,
                    fields = %report.unused.join(", "),
                    "template never uses these fields"
                );
            }
        }
        Ok(())
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Raw, unnormalized text of a loaded template.
    pub fn template(&self, name: TemplateName) -> &str {
        self.templates.get(name)
    }

    /// Tag mismatches of every loaded template that has any.
    pub fn unmatched_tags(&self) -> Vec<TagReport> {
        TemplateName::ALL
            .into_iter()
            .map(|name| check_template(name, self.templates.get(name)))
            .filter(|report| !report.is_clean())
            .collect()
    }

    /// Normalize `name`'s template, then substitute `values` in field order.
    fn fill(&self, name: TemplateName, values: &[&str]) -> String {
        let fields = name.fields();
        debug_assert_eq!(fields.len(), values.len(), "field count for {name}");

        fields
            .iter()
            .zip(values)
            .fold(self.normalized(name), |text, (field, value)| {
                substitute(&text, field, value)
            })
    }

    fn normalized(&self, name: TemplateName) -> String {
        normalize(self.templates.get(name), &self.options)
    }

    fn heading_or_default(&self, heading: Option<&str>) -> String {
        match heading {
            Some(heading) => heading.to_string(),
            None => self.normalized(TemplateName::Heading),
        }
    }

    pub fn fill_class(&self, fill: &TypeFill<'_>) -> String {
        let heading = self.heading_or_default(fill.file_heading);
        self.fill(
            TemplateName::Class,
            &[
                fill.imports,
                fill.name,
                fill.extends,
                fill.properties,
                fill.custom_head,
                fill.custom_body,
                heading.as_str(),
            ],
        )
    }

    pub fn fill_class_property(&self, accessor: &str, name: &str, ty: &str) -> String {
        self.fill(TemplateName::ClassProperty, &[accessor, name, ty])
    }

    pub fn fill_class_property_with_default(
        &self,
        accessor: &str,
        name: &str,
        ty: &str,
        default_value: &str,
    ) -> String {
        self.fill(
            TemplateName::ClassPropertyWithDefault,
            &[accessor, name, ty, default_value],
        )
    }

    pub fn fill_interface(&self, fill: &TypeFill<'_>) -> String {
        let heading = self.heading_or_default(fill.file_heading);
        self.fill(
            TemplateName::Interface,
            &[
                fill.imports,
                fill.name,
                fill.extends,
                fill.properties,
                fill.custom_head,
                fill.custom_body,
                heading.as_str(),
            ],
        )
    }

    pub fn fill_interface_property(&self, name: &str, ty: &str, optional: bool) -> String {
        let modifier = if optional { "?" } else { "" };
        self.fill(TemplateName::InterfaceProperty, &[name, modifier, ty])
    }

    pub fn fill_enum(&self, fill: &EnumFill<'_>) -> String {
        let heading = self.heading_or_default(fill.file_heading);
        let modifiers = if fill.is_const { " const" } else { "" };
        self.fill(
            TemplateName::Enum,
            &[fill.imports, fill.name, fill.values, modifiers, heading.as_str()],
        )
    }

    pub fn fill_enum_value(&self, name: &str, value: EnumValue<'_>) -> String {
        let value = value.to_string();
        self.fill(TemplateName::EnumValue, &[name, value.as_str()])
    }

    /// Fill an import; a present, non-empty alias renders as ` as <alias>`.
    pub fn fill_import(&self, name: &str, alias: Option<&str>, path: &str) -> String {
        let alias_text = match alias {
            Some(alias) if !alias.is_empty() => format!(" as {}", alias),
            _ => String::new(),
        };
        self.fill(TemplateName::Import, &[name, alias_text.as_str(), path])
    }

    pub fn fill_index(&self, exports: &str) -> String {
        self.fill(TemplateName::Index, &[exports])
    }

    pub fn fill_index_export(&self, filename: &str) -> String {
        self.fill(TemplateName::IndexExport, &[filename])
    }

    /// Clause text for a class or interface that extends `name`.
    pub fn extends_text(name: &str) -> String {
        format!(" extends {}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with(
                TemplateName::Class,
                "$tg{fileHeading}$tg{imports}class $tg{name}$tg{extends} {$tg{properties}$tg{customBody}}$tg{customHead}",
            )
            .with(TemplateName::ClassProperty, "$tg{tab}$tg{accessor}$tg{name}: $tg{type};")
            .with(
                TemplateName::ClassPropertyWithDefault,
                "$tg{tab}$tg{accessor}$tg{name}: $tg{type} = $tg{defaultValue};",
            )
            .with(
                TemplateName::Interface,
                "$tg{fileHeading}interface $tg{name}$tg{extends} {$tg{properties}}",
            )
            .with(TemplateName::InterfaceProperty, "$tg{name}$tg{modifier}: $tg{type};")
            .with(
                TemplateName::Enum,
                "$tg{fileHeading}$tg{imports}export$tg{modifiers} enum $tg{name} {$tg{values}}",
            )
            .with(TemplateName::EnumValue, "$tg{name} = $tg{value},")
            .with(
                TemplateName::Import,
                "import { $tg{name}$tg{aliasText} } from $tg{quot}$tg{path}$tg{quot};",
            )
            .with(TemplateName::Index, "$tg{exports}")
            .with(TemplateName::IndexExport, "export * from $tg{quot}./$tg{filename}$tg{quot};")
            .with(TemplateName::Heading, "// generated\n")
    }

    fn service(options: GeneratorOptions) -> TemplateService {
        TemplateService::new(store(), options).unwrap()
    }

    #[test]
    fn test_missing_template_fails_construction() {
        let mut store = store();
        store.remove(TemplateName::IndexExport);

        let err = TemplateService::new(store, GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingTemplate { name } if name == "indexExport"));
    }

    #[test]
    fn test_class_property() {
        let service = service(GeneratorOptions::new().tab_width(4));
        let out = service.fill_class_property("public ", "id", "number");
        assert_eq!(out, "    public id: number;");
        assert!(!out.contains("$tg{"));
    }

    #[test]
    fn test_class_property_with_default() {
        let service = service(GeneratorOptions::new().tab_width(2));
        let out = service.fill_class_property_with_default("", "count", "number", "0");
        assert_eq!(out, "  count: number = 0;");
    }

    #[test]
    fn test_class_uses_default_heading() {
        let service = service(GeneratorOptions::default());
        let fill = TypeFill {
            extends: &TemplateService::extends_text("Base"),
            ..TypeFill::new("User")
        };
        assert_eq!(
            service.fill_class(&fill),
            "// generated\nclass User extends Base {}"
        );
    }

    #[test]
    fn test_class_explicit_heading_and_custom_code() {
        let service = service(GeneratorOptions::default());
        let fill = TypeFill {
            imports: "import x;\n",
            properties: " a: string;",
            custom_head: "// head",
            custom_body: " b() {}",
            file_heading: Some(""),
            ..TypeFill::new("User")
        };
        assert_eq!(
            service.fill_class(&fill),
            "import x;\nclass User { a: string; b() {}}// head"
        );
    }

    #[test]
    fn test_interface_ignores_fields_without_tags() {
        let service = service(GeneratorOptions::default());
        let with_custom = TypeFill {
            custom_head: "ignored",
            custom_body: "ignored",
            imports: "ignored",
            ..TypeFill::new("Shape")
        };
        let without = TypeFill::new("Shape");

        assert_eq!(
            service.fill_interface(&with_custom),
            service.fill_interface(&without)
        );
    }

    #[test]
    fn test_interface_property_modifier() {
        let service = service(GeneratorOptions::default());
        assert_eq!(
            service.fill_interface_property("area", "number", true),
            "area?: number;"
        );
        assert_eq!(
            service.fill_interface_property("area", "number", false),
            "area: number;"
        );
    }

    #[test]
    fn test_enum_modifiers() {
        let service = service(GeneratorOptions::default());
        let fill = EnumFill {
            values: "A = 0,",
            is_const: true,
            file_heading: Some(""),
            ..EnumFill::new("Kind")
        };
        assert_eq!(service.fill_enum(&fill), "export const enum Kind {A = 0,}");

        let fill = EnumFill {
            is_const: false,
            ..fill
        };
        assert_eq!(service.fill_enum(&fill), "export enum Kind {A = 0,}");
    }

    #[test]
    fn test_enum_value_rendering() {
        let service = service(GeneratorOptions::new().single_quotes());
        assert_eq!(service.fill_enum_value("Five", EnumValue::Int(5)), "Five = 5,");
        assert_eq!(
            service.fill_enum_value("Red", EnumValue::Str("Red")),
            "Red = \"Red\","
        );
        assert_eq!(
            service.fill_enum_value("Neg", EnumValue::Int(-1)),
            "Neg = -1,"
        );
    }

    #[test]
    fn test_import_alias() {
        let service = service(GeneratorOptions::default());
        assert_eq!(
            service.fill_import("Foo", None, "./foo"),
            "import { Foo } from \"./foo\";"
        );
        assert_eq!(
            service.fill_import("Foo", Some(""), "./foo"),
            "import { Foo } from \"./foo\";"
        );
        assert_eq!(
            service.fill_import("Bar", Some("Foo"), "./bar"),
            "import { Bar as Foo } from \"./bar\";"
        );
    }

    #[test]
    fn test_quote_style_applies_to_quote_tag() {
        let single = service(GeneratorOptions::new().single_quotes());
        let double = service(GeneratorOptions::new());

        let out = single.fill_index_export("user");
        assert_eq!(out, "export * from './user';");
        assert!(!out.contains('"'));

        let out = double.fill_index_export("user");
        assert_eq!(out, "export * from \"./user\";");
        assert!(!out.contains('\''));
    }

    #[test]
    fn test_index() {
        let service = service(GeneratorOptions::default());
        assert_eq!(service.fill_index("a\nb\n"), "a\nb\n");
    }

    #[test]
    fn test_with_options_shares_templates() {
        let two = service(GeneratorOptions::new().tab_width(2));
        let four = two.with_options(GeneratorOptions::new().tab_width(4)).unwrap();

        assert_eq!(two.fill_class_property("", "a", "b"), "  a: b;");
        assert_eq!(four.fill_class_property("", "a", "b"), "    a: b;");
        assert!(Arc::ptr_eq(&two.templates, &four.templates));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let err = TemplateService::new(store(), GeneratorOptions::new().tab_width(40)).unwrap_err();
        assert!(matches!(err, Error::Options(_)));
    }

    #[test]
    fn test_lenient_mode_leaves_unknown_tags() {
        let store = store().with(TemplateName::IndexExport, "export * from './$tg{fileName}';");
        let service = TemplateService::new(store, GeneratorOptions::default()).unwrap();

        assert_eq!(
            service.fill_index_export("user"),
            "export * from './$tg{fileName}';"
        );
        let reports = service.unmatched_tags();
        let report = reports
            .iter()
            .find(|r| r.template == TemplateName::IndexExport)
            .unwrap();
        assert_eq!(report.unknown, vec!["fileName"]);
    }

    #[test]
    fn test_strict_mode_rejects_unknown_tags() {
        let store = store().with(TemplateName::IndexExport, "export * from './$tg{fileName}';");
        let err = TemplateService::new(store, GeneratorOptions::new().strict()).unwrap_err();

        match err {
            Error::UnknownTags { template, tags } => {
                assert_eq!(template, "indexExport");
                assert_eq!(tags, vec!["fileName"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_mode_allows_unused_fields() {
        // The test interface template omits imports and custom code tags.
        let service = TemplateService::new(store(), GeneratorOptions::new().strict());
        assert!(service.is_ok());
    }

    #[test]
    fn test_service_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateService>();
    }
}
