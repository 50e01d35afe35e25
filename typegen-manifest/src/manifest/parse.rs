//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use typegen_core::{INDEX_FILE, to_kebab_case};

use super::{EnumDef, Manifest, TypeDef, TypeKind, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "typegen.toml")
    }
}

impl Manifest {
    /// Parse a typegen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a typegen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.options.tab_width > typegen_core::MAX_TAB_WIDTH {
        return Err(ctx.error_at(
            format!(
                "tab_width must be at most {}, got {}",
                typegen_core::MAX_TAB_WIDTH,
                manifest.options.tab_width
            ),
            "tab_width",
        ));
    }

    let mut seen: HashMap<&str, TypeKind> = HashMap::new();
    let mut files: HashMap<String, &str> = HashMap::new();
    for (name, kind) in manifest.type_names() {
        ctx.validate_name(name, kind.as_str())?;
        if let Some(first) = seen.insert(name, kind) {
            return Err(ctx.source_context().duplicate_type_error(
                name,
                first.as_str(),
                kind.as_str(),
                ctx.find_span(name),
            ));
        }
        let file = to_kebab_case(name);
        if manifest.options.create_index && format!("{}.ts", file) == INDEX_FILE {
            return Err(ctx.error_at(
                format!(
                    "'{}' would be written to {}, which is reserved for the generated index; \
                     rename the type or set create_index = false",
                    name, INDEX_FILE
                ),
                name,
            ));
        }
        if let Some(other) = files.insert(file.clone(), name) {
            return Err(ctx.error_at(
                format!("'{}' and '{}' would both be written to {}.ts", other, name, file),
                name,
            ));
        }
    }

    let classes = ctx.push("classes");
    for (name, def) in &manifest.classes {
        validate_type(&classes.push(name), name, def, TypeKind::Class)?;
    }

    let interfaces = ctx.push("interfaces");
    for (name, def) in &manifest.interfaces {
        validate_type(&interfaces.push(name), name, def, TypeKind::Interface)?;
    }

    let enums = ctx.push("enums");
    for (name, def) in &manifest.enums {
        validate_enum(&enums.push(name), def)?;
    }

    Ok(())
}

fn validate_type(ctx: &ParseContext<'_>, name: &str, def: &TypeDef, kind: TypeKind) -> Result<()> {
    if def.extends.as_deref() == Some(name) {
        return Err(ctx.error_at(
            format!("{} '{}' cannot extend itself", kind.as_str(), name),
            name,
        ));
    }

    for (prop_name, prop) in &def.properties {
        ctx.validate_name(prop_name, "property")?;

        if prop.ty.trim().is_empty() {
            return Err(ctx.error_at(
                format!("property '{}' has an empty type", prop_name),
                prop_name,
            ));
        }

        match kind {
            TypeKind::Class if prop.optional => {
                return Err(ctx.error_at(
                    format!(
                        "class property '{}' cannot be optional; give it a default instead",
                        prop_name
                    ),
                    prop_name,
                ));
            }
            TypeKind::Interface if prop.default.is_some() || prop.accessor.is_some() => {
                return Err(ctx.error_at(
                    format!(
                        "interface property '{}' cannot have a default value or accessor",
                        prop_name
                    ),
                    prop_name,
                ));
            }
            _ => {}
        }
    }

    for import in &def.imports {
        ctx.validate_name(&import.name, "import")?;
        if let Some(alias) = &import.alias {
            ctx.validate_name(alias, "import alias")?;
        }
    }

    Ok(())
}

fn validate_enum(ctx: &ParseContext<'_>, def: &EnumDef) -> Result<()> {
    for member in def.values.keys() {
        ctx.validate_name(member, "enum member")?;
    }
    for import in &def.imports {
        ctx.validate_name(&import.name, "import")?;
        if let Some(alias) = &import.alias {
            ctx.validate_name(alias, "import alias")?;
        }
    }
    Ok(())
}
