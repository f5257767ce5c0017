//! Casing helpers shared by the normalizer and the emitters.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld").
///
/// Segments are separated by `_` or spaces. Only the first character of each
/// segment is touched, so an already PascalCase token comes back unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a PascalCase token to camelCase by lowercasing its first character.
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Lowercase a string and replace whitespace and hyphens with underscores
/// (e.g., "Rio Grande-do Sul" -> "rio_grande_do_sul").
pub fn to_underscore(s: &str) -> String {
    s.chars()
        .flat_map(|c| {
            let replaced = if c == '-' || c.is_whitespace() { '_' } else { c };
            replaced.to_lowercase()
        })
        .collect()
}
