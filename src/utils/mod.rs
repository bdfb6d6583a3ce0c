//! Global utilities module for RustF Text
//!
//! This module provides the text helpers, accessible globally through the
//! `U` namespace (similar to Total.js Utils).
//!
//! # Usage
//! ```rust
//! use rustf_text::U;
//!
//! let cleaned = U::remove_control_characters("a\u{0000}b");
//! let field = U::hyphen_to_snake("page-size");
//! assert_eq!(cleaned, "ab");
//! assert_eq!(field, "page_size");
//! ```

pub mod naming;
pub mod string;

/// Global utilities module - the main entry point for all text helpers
///
/// It follows the Total.js convention of providing utilities through a
/// global `U` namespace.
#[allow(non_snake_case)]
pub mod U {
    use super::*;
    use std::string::String as StdString;

    /// String utilities namespace
    pub mod String {
        pub use super::super::string::*;
    }

    /// Naming utilities namespace
    pub mod Naming {
        pub use super::super::naming::*;
    }

    // String utilities

    /// Remove hidden control characters (Unicode categories `C*`)
    ///
    /// # Example
    /// ```rust,ignore
    /// let text = U::remove_control_characters("scraped\u{200B} text");
    /// assert_eq!(text, "scraped text");
    /// ```
    pub fn remove_control_characters(input: &str) -> StdString {
        string::remove_control_characters(input)
    }

    /// Capitalize all space-separated words
    pub fn capitalize(input: &str) -> StdString {
        string::capitalize(input)
    }

    // Naming utilities

    /// Convert URL param spelling to identifier spelling (`-` to `_`)
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::hyphen_to_snake("sort-by"), "sort_by");
    /// ```
    pub fn hyphen_to_snake(hyphenated: &str) -> StdString {
        naming::hyphen_to_snake(hyphenated)
    }

    /// Convert identifier spelling to URL param spelling (`_` to `-`)
    pub fn snake_to_hyphen(snaked: &str) -> StdString {
        naming::snake_to_hyphen(snaked)
    }
}
