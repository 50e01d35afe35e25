//! TypeScript generator: turns manifest declarations into fill calls.

use std::path::Path;

use eyre::Result;
pub use typegen_core::INDEX_FILE;
use typegen_core::{File, WriteResult, to_kebab_case};
use typegen_manifest::{EnumDef, EnumMemberValue, Manifest, TypeDef, TypeKind};
use typegen_templates::{EnumFill, EnumValue, TemplateService, TypeFill};

use crate::imports::ImportCollector;

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files created or rewritten
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// Renders every type declared in a manifest into its own `.ts` file.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    templates: TemplateService,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest, templates: TemplateService) -> Self {
        Self {
            manifest,
            templates,
        }
    }

    /// Preview generated files without writing to disk.
    ///
    /// Type files come in declaration order (classes, interfaces, enums),
    /// followed by the index when enabled.
    pub fn preview(&self) -> Vec<PreviewFile> {
        let mut files = Vec::with_capacity(self.manifest.type_count() + 1);

        for (name, def) in &self.manifest.classes {
            files.push(self.type_file(name, self.render_class(name, def), TypeKind::Class));
        }
        for (name, def) in &self.manifest.interfaces {
            files.push(self.type_file(
                name,
                self.render_interface(name, def),
                TypeKind::Interface,
            ));
        }
        for (name, def) in &self.manifest.enums {
            files.push(self.type_file(name, self.render_enum(name, def), TypeKind::Enum));
        }

        if self.manifest.options.create_index && !files.is_empty() {
            let index = self.render_index(&files);
            files.push(PreviewFile {
                path: INDEX_FILE.to_string(),
                content: index,
            });
        }

        files
    }

    /// Generate all files into the specified output directory.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.preview() {
            match File::new(&file.path, file.content).write_to(output_dir)? {
                WriteResult::Written => result.written.push(file.path),
                WriteResult::Unchanged => result.unchanged.push(file.path),
            }
        }

        tracing::info!(
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            output = %output_dir.display(),
            "generation finished"
        );
        Ok(result)
    }

    fn type_file(&self, name: &str, content: String, kind: TypeKind) -> PreviewFile {
        let path = format!("{}.ts", to_kebab_case(name));
        tracing::debug!(type_name = name, kind = kind.as_str(), path = %path, "rendered type");
        PreviewFile { path, content }
    }

    fn file_heading(&self) -> Option<&str> {
        self.manifest.options.file_heading.as_deref()
    }

    /// Render the import block, followed by a blank line when not empty.
    fn render_imports(&self, imports: ImportCollector<'_>) -> String {
        let mut block: String = imports
            .into_imports()
            .into_iter()
            .map(|(name, alias, path)| self.templates.fill_import(name, alias, &path))
            .collect();
        if !block.is_empty() {
            block.push('\n');
        }
        block
    }

    fn collect_imports(&self, name: &'a str, def: &'a TypeDef) -> ImportCollector<'a> {
        let mut imports = ImportCollector::new(self.manifest, name);
        if let Some(base) = &def.extends {
            imports.reference(base);
        }
        for prop in def.properties.values() {
            imports.reference(&prop.ty);
        }
        imports.explicit(&def.imports);
        imports
    }

    fn extends(def: &TypeDef) -> String {
        def.extends
            .as_deref()
            .map(TemplateService::extends_text)
            .unwrap_or_default()
    }

    pub fn render_class(&self, name: &'a str, def: &'a TypeDef) -> String {
        let properties: String = def
            .properties
            .iter()
            .map(|(prop_name, prop)| {
                let modifiers = prop.modifier_text();
                match &prop.default {
                    Some(default) => self.templates.fill_class_property_with_default(
                        &modifiers, prop_name, &prop.ty, default,
                    ),
                    None => self
                        .templates
                        .fill_class_property(&modifiers, prop_name, &prop.ty),
                }
            })
            .collect();

        let imports = self.render_imports(self.collect_imports(name, def));
        let extends = Self::extends(def);

        self.templates.fill_class(&TypeFill {
            imports: &imports,
            name,
            extends: &extends,
            properties: &properties,
            custom_head: &def.custom_head,
            custom_body: &def.custom_body,
            file_heading: self.file_heading(),
        })
    }

    pub fn render_interface(&self, name: &'a str, def: &'a TypeDef) -> String {
        let properties: String = def
            .properties
            .iter()
            .map(|(prop_name, prop)| {
                let name = format!("{}{}", prop.modifier_text(), prop_name);
                self.templates
                    .fill_interface_property(&name, &prop.ty, prop.optional)
            })
            .collect();

        let imports = self.render_imports(self.collect_imports(name, def));
        let extends = Self::extends(def);

        self.templates.fill_interface(&TypeFill {
            imports: &imports,
            name,
            extends: &extends,
            properties: &properties,
            custom_head: &def.custom_head,
            custom_body: &def.custom_body,
            file_heading: self.file_heading(),
        })
    }

    pub fn render_enum(&self, name: &'a str, def: &'a EnumDef) -> String {
        let values: String = def
            .values
            .iter()
            .map(|(member, value)| {
                let value = match value {
                    EnumMemberValue::Int(i) => EnumValue::Int(*i),
                    EnumMemberValue::Str(s) => EnumValue::Str(s),
                };
                self.templates.fill_enum_value(member, value)
            })
            .collect();

        let mut imports = ImportCollector::new(self.manifest, name);
        imports.explicit(&def.imports);
        let imports = self.render_imports(imports);

        self.templates.fill_enum(&EnumFill {
            imports: &imports,
            name,
            values: &values,
            is_const: def.is_const,
            file_heading: self.file_heading(),
        })
    }

    /// Render the index re-exporting `files`, sorted by file name.
    fn render_index(&self, files: &[PreviewFile]) -> String {
        let mut stems: Vec<&str> = files
            .iter()
            .filter_map(|file| file.path.strip_suffix(".ts"))
            .collect();
        stems.sort_unstable();

        let exports: String = stems
            .into_iter()
            .map(|stem| self.templates.fill_index_export(stem))
            .collect();
        self.templates.fill_index(&exports)
    }
}
