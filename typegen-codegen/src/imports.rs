//! Import collection for generated type files.

use typegen_core::{to_kebab_case, type_identifiers};
use typegen_manifest::{ImportDef, Manifest};

/// Collects the imports of one generated file, without duplicates.
///
/// Declared types referenced by the file come first, in order of first
/// reference, followed by the explicit imports from the manifest.
pub struct ImportCollector<'a> {
    manifest: &'a Manifest,
    owner: &'a str,
    referenced: Vec<&'a str>,
    explicit: Vec<&'a ImportDef>,
}

impl<'a> ImportCollector<'a> {
    /// Collector for the file generated for type `owner`.
    pub fn new(manifest: &'a Manifest, owner: &'a str) -> Self {
        Self {
            manifest,
            owner,
            referenced: Vec::new(),
            explicit: Vec::new(),
        }
    }

    /// Record every declared type mentioned in a type expression.
    pub fn reference(&mut self, ty: &'a str) {
        for ident in type_identifiers(ty) {
            if ident != self.owner
                && self.manifest.kind_of(ident).is_some()
                && !self.referenced.contains(&ident)
            {
                self.referenced.push(ident);
            }
        }
    }

    pub fn explicit(&mut self, imports: &'a [ImportDef]) {
        self.explicit.extend(imports);
    }

    /// The imports as `(name, alias, path)` triples, in render order.
    pub fn into_imports(self) -> Vec<(&'a str, Option<&'a str>, String)> {
        let explicit_names: Vec<&'a str> = self
            .explicit
            .iter()
            .copied()
            .map(|import| import.alias.as_deref().unwrap_or(&import.name))
            .collect();

        let derived = self
            .referenced
            .into_iter()
            .filter(|name| !explicit_names.contains(name))
            .map(|name| (name, None, format!("./{}", to_kebab_case(name))));

        let explicit = self.explicit.into_iter().map(|import| {
            (
                import.name.as_str(),
                import.alias.as_deref(),
                import.path.clone(),
            )
        });

        derived.chain(explicit).collect()
    }
}
