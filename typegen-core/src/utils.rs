//! Shared string helpers for naming generated output.

/// Convert a type name to kebab-case (e.g., "HttpClientConfig" -> "http-client-config")
///
/// Runs of capitals are kept together, so "HTTPServer" becomes "http-server".
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('-') {
                result.push('-');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Split a type expression into the identifiers it mentions
/// (e.g., "Array<User | null>" -> ["Array", "User", "null"])
pub fn type_identifiers(ty: &str) -> impl Iterator<Item = &str> {
    ty.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .filter(|part| !part.is_empty())
        .filter(|part| !part.starts_with(|c: char| c.is_ascii_digit()))
}
