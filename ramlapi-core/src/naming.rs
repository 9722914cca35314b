//! Identifier helpers shared by the walker and the generators.

/// Normalise a RAML display name into a code identifier.
///
/// Every whitespace-separated word gets its first character upper-cased, then
/// everything outside `[A-Za-z0-9]` is dropped. No separators are put back, so
/// `"get me"` becomes `"GetMe"` and `"a!!b"` becomes `"Ab"`.
///
/// The result may be empty (e.g. for `"!!!"`); callers that need a usable
/// identifier check it with [`is_identifier`].
pub fn variableize(s: &str) -> String {
    s.split_whitespace()
        .flat_map(|word| {
            let mut chars = word.chars();
            chars.next().map(title_case).into_iter().chain(chars)
        })
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Upper-case a character only when that yields a single character.
///
/// `'ß'` would become `"SS"`; it is kept as is and later dropped as non-ASCII.
fn title_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Check that a name can be used verbatim as an identifier in a C-like language.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
