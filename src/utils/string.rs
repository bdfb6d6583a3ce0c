//! String cleaning utilities for RustF Text
//!
//! This module provides text cleaning functions used when processing
//! external content, such as text scraped from web pages before storage.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Check whether a character belongs to a Unicode "other" category
///
/// Returns `true` for every general category starting with `C`:
/// control (Cc), format (Cf), surrogate (Cs), private use (Co) and
/// unassigned (Cn). Surrogates cannot occur in a Rust `char`, but the
/// category is listed for completeness.
///
/// # Example
/// ```rust,ignore
/// assert!(is_control_character('\u{0000}'));
/// assert!(is_control_character('\u{200B}')); // zero width space (Cf)
/// assert!(!is_control_character('a'));
/// ```
pub fn is_control_character(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// Remove hidden control characters from a string
///
/// Drops every character whose Unicode general category starts with `C`
/// (see [`is_control_character`]). Retained characters keep their order
/// and are never altered. Note that line breaks and tabs are control
/// characters too and are removed.
///
/// Helpful when parsing scraped web pages.
///
/// # Arguments
/// * `input` - String to clean
///
/// # Example
/// ```rust,ignore
/// let cleaned = remove_control_characters("a\u{0000}b\u{001F}c");
/// assert_eq!(cleaned, "abc");
/// ```
pub fn remove_control_characters(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut removed = 0usize;

    for ch in input.chars() {
        if is_control_character(ch) {
            removed += 1;
        } else {
            result.push(ch);
        }
    }

    if removed > 0 {
        log::trace!("Removed {} control characters from input", removed);
    }

    result
}

/// Capitalize all words in a string
///
/// Splits on single spaces, lowercases each word and uppercases its first
/// character. Runs of spaces are preserved as-is.
///
/// # Arguments
/// * `input` - String to capitalize
///
/// # Example
/// ```rust,ignore
/// assert_eq!(capitalize("this is a test"), "This Is A Test");
/// assert_eq!(capitalize("THIS IS A TEST"), "This Is A Test");
/// ```
pub fn capitalize(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
