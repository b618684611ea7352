//! Identifier helpers used to derive type and method names from catalog keys.

/// `snake_case_key` -> `snakeCaseKey`. Only an underscore followed by a lowercase ascii letter
/// is collapsed, anything else is kept as is.
pub fn snake_to_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(next)) if next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

/// Uppercase the first character.
pub fn make_exported(s: &str) -> String {
    map_first(s, |c| c.to_uppercase().collect())
}

/// Lowercase the first character.
pub fn make_unexported(s: &str) -> String {
    map_first(s, |c| c.to_lowercase().collect())
}

/// Replace characters that can't appear in an identifier with `_`.
pub fn sanitize_identifier(s: &str) -> String {
    s.replace(['-', '/', '.'], "_")
}

fn map_first(s: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => f(first) + chars.as_str(),
    }
}
