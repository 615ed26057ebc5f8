//! Shared naming functions for identifier normalization.

/// Returns true if the key contains an underscore (e.g., "user_id").
pub fn is_snake_case(key: &str) -> bool {
    key.contains('_')
}

/// Convert a snake_case key to camelCase (e.g., "user_id" -> "userId").
///
/// Only an underscore followed by a lowercase letter is collapsed; keys
/// without such a pair come back unchanged. Idempotent on its own output.
pub fn to_camel_case(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_'
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            result.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a key to PascalCase (e.g., "hello_world" -> "HelloWorld").
///
/// Splits on underscores, spaces, and hyphens. Used to derive class and
/// struct names from JSON keys.
pub fn to_pascal_case(key: &str) -> String {
    key.split(['_', ' ', '-']).map(capitalize_first).collect()
}

/// Uppercase only the first character (e.g., "items" -> "Items").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_snake_case() {
        assert!(is_snake_case("user_id"));
        assert!(is_snake_case("_leading"));
        assert!(!is_snake_case("userId"));
        assert!(!is_snake_case(""));
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_id"), "userId");
        assert_eq!(to_camel_case("first_name_initial"), "firstNameInitial");
        assert_eq!(to_camel_case("alreadyCamel"), "alreadyCamel");
        assert_eq!(to_camel_case("_hidden"), "Hidden");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_camel_case_idempotent() {
        for key in ["user_id", "userId", "a_b_c", "plain"] {
            let once = to_camel_case(key);
            assert_eq!(to_camel_case(&once), once);
        }
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo-bar-baz"), "FooBarBaz");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_idempotent() {
        for key in ["hello_world", "HelloWorld", "foo-bar"] {
            let once = to_pascal_case(key);
            assert_eq!(to_pascal_case(&once), once);
        }
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("items"), "Items");
        assert_eq!(capitalize_first("Items"), "Items");
        assert_eq!(capitalize_first(""), "");
    }
}
