//! Identifier spelling conversions
//!
//! URL parameters are usually spelled with hyphens (`page-size`) while
//! Rust identifiers and form field names use underscores (`page_size`).
//! These helpers swap one character for the other and nothing else: the
//! input is not interpreted as a path, URL or identifier.

/// Replace all hyphens with underscores
///
/// Existing underscores are left untouched, so mixed input cannot be
/// restored with [`snake_to_hyphen`].
///
/// # Arguments
/// * `hyphenated` - String to convert
///
/// # Example
/// ```rust,ignore
/// assert_eq!(hyphen_to_snake("page-size"), "page_size");
/// ```
pub fn hyphen_to_snake(hyphenated: &str) -> String {
    hyphenated.replace('-', "_")
}

/// Replace all underscores with hyphens
///
/// # Arguments
/// * `snaked` - String to convert
///
/// # Example
/// ```rust,ignore
/// assert_eq!(snake_to_hyphen("page_size"), "page-size");
/// ```
pub fn snake_to_hyphen(snaked: &str) -> String {
    snaked.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_to_snake() {
        assert_eq!(hyphen_to_snake("a-b-c"), "a_b_c");
        assert_eq!(hyphen_to_snake("--lead-and-trail--"), "__lead_and_trail__");
        assert_eq!(hyphen_to_snake("no_hyphens here"), "no_hyphens here");
        assert_eq!(hyphen_to_snake(""), "");
    }

    #[test]
    fn test_snake_to_hyphen() {
        assert_eq!(snake_to_hyphen("a_b_c"), "a-b-c");
        assert_eq!(snake_to_hyphen("__init__"), "--init--");
        assert_eq!(snake_to_hyphen("no-underscores"), "no-underscores");
        assert_eq!(snake_to_hyphen(""), "");
    }

    #[test]
    fn test_only_ascii_hyphen_is_replaced() {
        // En dash, non-breaking hyphen and fullwidth low line stay as they are
        assert_eq!(hyphen_to_snake("a\u{2013}b\u{2011}c"), "a\u{2013}b\u{2011}c");
        assert_eq!(snake_to_hyphen("a\u{FF3F}b"), "a\u{FF3F}b");
    }

    #[test]
    fn test_mixed_input_loses_distinction() {
        let mixed = "user-profile_id";
        assert_eq!(hyphen_to_snake(mixed), "user_profile_id");
        assert_eq!(snake_to_hyphen(&hyphen_to_snake(mixed)), "user-profile-id");
    }

    #[test]
    fn test_round_trip_without_target_character() {
        assert_eq!(snake_to_hyphen(&hyphen_to_snake("page-size")), "page-size");
        assert_eq!(hyphen_to_snake(&snake_to_hyphen("page_size")), "page_size");
    }
}
