//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Tracks the path through the manifest (e.g. `classes.User`) so that error
/// messages can say where a bad name was found.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["classes", "User"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` with the current path, e.g. "property in 'classes.User'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Create a validation error located at `name`.
    pub fn error_at(&self, message: impl Into<String>, name: &str) -> Box<crate::Error> {
        self.source
            .validation_error(message, self.find_span(name))
    }

    /// Validate that a name is a usable TypeScript identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_reserved_word(name) {
            return Err(self.source.reserved_word_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// TypeScript reserved words that cannot name a type or member
pub(crate) const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with",
    // Strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield",
];

pub(crate) fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
///
/// Looks for table headers (`[classes.User]`, `[classes.User.properties]`),
/// then keys (`id = ` or `{ id = `).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let header_patterns = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &header_patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    let key_patterns = [
        (format!("\n{} =", name), 1usize),
        (format!("\n{}=", name), 1usize),
        (format!("{{ {} =", name), 2usize),
        (format!(", {} =", name), 2usize),
    ];

    for (pattern, skip) in &key_patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    None
}

/// Returns None if `name` is a valid identifier, Some(reason) otherwise
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_digit() => return Some("name cannot start with a digit"),
        Some(c) if !is_identifier_char(c) => {
            return Some("name must start with a letter, '_' or '$'");
        }
        Some(_) => {}
    }

    if chars.any(|c| !is_identifier_char(c)) {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
