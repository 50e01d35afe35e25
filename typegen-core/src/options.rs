//! Formatting options shared by every template fill.

use std::{fmt, str::FromStr};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest tab width accepted by [`GeneratorOptions::validate`].
pub const MAX_TAB_WIDTH: u8 = 16;

/// Quote character used for string literals in generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `'`
    Single,
    /// `"`
    #[default]
    Double,
}

impl QuoteStyle {
    /// Returns the style identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStyle::Single => "single",
            QuoteStyle::Double => "double",
        }
    }

    /// The quote character this style renders.
    pub fn as_char(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuoteStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "'" => Ok(QuoteStyle::Single),
            "double" | "\"" => Ok(QuoteStyle::Double),
            _ => Err(format!(
                "unknown quote style '{}', expected 'single' or 'double'",
                s
            )),
        }
    }
}

/// How tag/field mismatches between a template and its fill operation are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Unmatched tags are left alone and unused fields are ignored.
    #[default]
    Lenient,
    /// Templates with tags their construct never fills are rejected at load time.
    Strict,
}

/// Options violating the formatting contract.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum OptionsError {
    #[error("tab width {width} is too large")]
    #[diagnostic(
        code(typegen::invalid_tab_width),
        help("use a tab width between 0 and {max}")
    )]
    InvalidTabWidth { width: u8, max: u8 },
}

/// Formatting preferences for one generation run.
///
/// The value is bound into a template service when it is built, so every
/// fill made through that service sees the same options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Number of spaces rendered for one `tab` tag.
    pub tab_width: u8,
    /// Quote character rendered for the `quot` tag.
    pub quote_style: QuoteStyle,
    /// Tag validation mode.
    pub strictness: Strictness,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            tab_width: 2,
            quote_style: QuoteStyle::Double,
            strictness: Strictness::Lenient,
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab_width(mut self, width: u8) -> Self {
        self.tab_width = width;
        self
    }

    pub fn quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Shorthand for single quotes.
    pub fn single_quotes(self) -> Self {
        self.quote_style(QuoteStyle::Single)
    }

    /// Shorthand for strict tag validation.
    pub fn strict(self) -> Self {
        self.strictness(Strictness::Strict)
    }

    /// Whether strict tag validation is enabled.
    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }

    /// Indentation text for one `tab` tag.
    pub fn tab_text(&self) -> String {
        " ".repeat(usize::from(self.tab_width))
    }

    /// Quote text for one `quot` tag.
    pub fn quote_text(&self) -> &'static str {
        match self.quote_style {
            QuoteStyle::Single => "'",
            QuoteStyle::Double => "\"",
        }
    }

    /// Reject options that would produce malformed output.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.tab_width > MAX_TAB_WIDTH {
            return Err(OptionsError::InvalidTabWidth {
                width: self.tab_width,
                max: MAX_TAB_WIDTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_style_from_str() {
        assert_eq!(QuoteStyle::from_str("single").unwrap(), QuoteStyle::Single);
        assert_eq!(QuoteStyle::from_str("Double").unwrap(), QuoteStyle::Double);
        assert_eq!(QuoteStyle::from_str("'").unwrap(), QuoteStyle::Single);
        assert_eq!(QuoteStyle::from_str("\"").unwrap(), QuoteStyle::Double);
        assert!(QuoteStyle::from_str("backtick").is_err());
    }

    #[test]
    fn test_quote_style_deserialize() {
        let single: QuoteStyle = serde_json::from_str(r#""single""#).unwrap();
        assert_eq!(single, QuoteStyle::Single);
        assert!(serde_json::from_str::<QuoteStyle>(r#""fancy""#).is_err());
    }

    #[test]
    fn test_tab_text() {
        assert_eq!(GeneratorOptions::new().tab_width(4).tab_text(), "    ");
        assert_eq!(GeneratorOptions::new().tab_width(0).tab_text(), "");
    }

    #[test]
    fn test_quote_text() {
        assert_eq!(GeneratorOptions::new().quote_text(), "\"");
        assert_eq!(GeneratorOptions::new().single_quotes().quote_text(), "'");
    }

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.tab_width, 2);
        assert_eq!(options.quote_style, QuoteStyle::Double);
        assert!(!options.is_strict());
    }

    #[test]
    fn test_validate_rejects_wide_tabs() {
        assert!(GeneratorOptions::new().tab_width(16).validate().is_ok());
        assert_eq!(
            GeneratorOptions::new().tab_width(17).validate(),
            Err(OptionsError::InvalidTabWidth { width: 17, max: 16 })
        );
    }
}
