//! Custom assertion macros
//!
//! Shape checks for JSON responses.

/// Assert that a JSON object has exactly the given keys
#[macro_export]
macro_rules! assert_keys {
    ($value:expr, [$($key:expr),* $(,)?]) => {{
        let object = $value
            .as_object()
            .unwrap_or_else(|| panic!("Expected a JSON object, got: {}", $value));
        let mut actual: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        actual.sort_unstable();
        let mut expected: Vec<&str> = vec![$($key),*];
        expected.sort_unstable();
        assert_eq!(actual, expected, "Unexpected keys in {}", $value);
    }};
}

/// Assert that every value of a JSON object is a non-negative integer
#[macro_export]
macro_rules! assert_all_counts {
    ($value:expr) => {{
        let object = $value
            .as_object()
            .unwrap_or_else(|| panic!("Expected a JSON object, got: {}", $value));
        for (key, count) in object {
            assert!(count.is_u64(), "Count '{}' is not a non-negative integer: {}", key, count);
        }
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
