//! RustF Text - string helpers shared by RustF pipelines
//!
//! RustF Text provides small, pure text transforms:
//! - Removal of hidden Unicode control characters (e.g. from scraped pages)
//! - Hyphen/underscore swaps between URL params and identifiers
//! - Word capitalization
//! - Configurable pipelines chaining the transforms above

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod error;
pub mod pipeline;
pub mod utils;

// Re-export main types for public API
pub use error::{Error, Result};
pub use pipeline::{TextPipeline, Transform};
pub use utils::naming::{hyphen_to_snake, snake_to_hyphen};
pub use utils::string::{capitalize, is_control_character, remove_control_characters};
pub use utils::U;
