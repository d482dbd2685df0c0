//! Small text helpers used by search.

/// Case-insensitive substring test.
///
/// Both sides are lowercased with full Unicode case mapping before
/// comparing. An empty needle matches any haystack.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Empty or whitespace-only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
