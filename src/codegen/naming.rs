//! Identifier casing transforms for the target conventions.

/// Lowercase exactly the first character of an identifier.
///
/// This is the Convention-B (TypeScript) transform. It is deliberately narrow:
/// only the leading character changes, everything after it is preserved. It is
/// not a multi-word camel-case conversion, and downstream consumers depend on
/// that exact output shape.
///
/// # Example
///
/// ```rust
/// use fluentgen::codegen::naming::lower_first;
///
/// assert_eq!(lower_first("FirstName"), "firstName");
/// assert_eq!(lower_first("HTMLBody"), "hTMLBody");
/// assert_eq!(lower_first("age"), "age");
/// ```
pub fn lower_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_only_the_leading_character() {
        assert_eq!(lower_first("Age"), "age");
        assert_eq!(lower_first("FirstName"), "firstName");
        // Not a full camel-case pass: the second uppercase run is untouched
        assert_eq!(lower_first("HTMLBody"), "hTMLBody");
    }

    #[test]
    fn test_already_lowercase_is_unchanged() {
        assert_eq!(lower_first("age"), "age");
        assert_eq!(lower_first("first_name"), "first_name");
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(lower_first(""), "");
        assert_eq!(lower_first("A"), "a");
        assert_eq!(lower_first("_Private"), "_Private");
        assert_eq!(lower_first("1Bad"), "1Bad");
    }
}
