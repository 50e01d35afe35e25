//! TypeScript file generation for typegen.
//!
//! Walks the types declared in a [`Manifest`](typegen_manifest::Manifest),
//! composes the template fill calls for each one (properties, imports,
//! extends clause, enum values) and produces one `.ts` file per type plus an
//! optional `index.ts` barrel.
//!
//! ```ignore
//! use typegen_codegen::{Generator, load_templates};
//! use typegen_manifest::TypegenToml;
//!
//! let file = TypegenToml::open("typegen.toml")?;
//! let manifest = file.manifest();
//! let templates = load_templates(
//!     file.templates_dir().as_deref(),
//!     manifest.options.generator_options(),
//! )?;
//! let generator = Generator::new(manifest, templates);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/models"))?;
//! ```

mod generator;
mod imports;
mod templates;

pub use generator::{GenerateResult, Generator, INDEX_FILE, PreviewFile};
pub use imports::ImportCollector;
pub use templates::load_templates;
