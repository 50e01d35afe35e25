//! The `$tg{name}` tag syntax and its substitution primitive.

use typegen_core::GeneratorOptions;

/// Prefix that opens every tag token.
pub const TAG_PREFIX: &str = "$tg{";

/// Indentation tag, replaced during normalization.
pub const TAB_TAG: &str = "tab";

/// Quote tag, replaced during normalization.
pub const QUOTE_TAG: &str = "quot";

/// Build the literal token for a tag name.
pub fn tag(name: &str) -> String {
    format!("{TAG_PREFIX}{name}}}")
}

/// Replace every occurrence of `tag_name`'s token in `template`.
///
/// The replacement is inserted verbatim and never re-scanned.
pub fn substitute(template: &str, tag_name: &str, replacement: &str) -> String {
    template.replace(&tag(tag_name), replacement)
}

/// Replace the `tab` and `quot` tags according to `options`.
///
/// Idempotent: the output contains no special tags to match again.
pub fn normalize(template: &str, options: &GeneratorOptions) -> String {
    let normalized = substitute(template, TAB_TAG, &options.tab_text());
    substitute(&normalized, QUOTE_TAG, options.quote_text())
}

/// Distinct tag names in `template`, in order of first occurrence.
pub fn find_tags(template: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(TAG_PREFIX) {
        let after = &rest[start + TAG_PREFIX.len()..];
        let Some(end) = after.find('}') else {
            break;
        };
        let name = &after[..end];
        if !name.is_empty() && !tags.contains(&name) {
            tags.push(name);
        }
        rest = &after[end + 1..];
    }

    tags
}
