//! Configurable text pipelines
//!
//! A [`TextPipeline`] is an ordered list of [`Transform`]s applied left to
//! right. Pipelines can be built in code or loaded from configuration:
//!
//! ```toml
//! steps = ["remove-control-characters", "hyphen-to-snake"]
//! ```

use crate::error::{Error, Result};
use crate::utils::{naming, string};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A single text transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    RemoveControlCharacters,
    HyphenToSnake,
    SnakeToHyphen,
    Capitalize,
}

impl Transform {
    /// All available transforms
    pub const ALL: [Transform; 4] = [
        Transform::RemoveControlCharacters,
        Transform::HyphenToSnake,
        Transform::SnakeToHyphen,
        Transform::Capitalize,
    ];

    /// Configuration name of the transform
    pub fn name(&self) -> &'static str {
        match self {
            Transform::RemoveControlCharacters => "remove-control-characters",
            Transform::HyphenToSnake => "hyphen-to-snake",
            Transform::SnakeToHyphen => "snake-to-hyphen",
            Transform::Capitalize => "capitalize",
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Transform::RemoveControlCharacters => string::remove_control_characters(input),
            Transform::HyphenToSnake => naming::hyphen_to_snake(input),
            Transform::SnakeToHyphen => naming::snake_to_hyphen(input),
            Transform::Capitalize => string::capitalize(input),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Transform::ALL
            .into_iter()
            .find(|transform| transform.name() == s)
            .ok_or_else(|| Error::config(format!("Unknown text transform '{}'", s)))
    }
}

/// Ordered chain of text transforms
///
/// An empty pipeline returns its input unchanged.
///
/// # Example
/// ```rust,ignore
/// let pipeline = TextPipeline::new()
///     .then(Transform::RemoveControlCharacters)
///     .then(Transform::HyphenToSnake);
/// assert_eq!(pipeline.apply("page-\u{0000}size"), "page_size");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextPipeline {
    #[serde(default)]
    steps: Vec<Transform>,
}

impl TextPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_steps(steps: Vec<Transform>) -> Self {
        Self { steps }
    }

    /// Append a step to the pipeline
    pub fn then(mut self, step: Transform) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order over `input`
    pub fn apply(&self, input: &str) -> String {
        let mut current = input.to_string();
        for step in &self.steps {
            log::trace!("Applying text transform: {}", step);
            current = step.apply(&current);
        }
        current
    }

    /// Parse a pipeline from a TOML document
    ///
    /// Requires the `config` feature.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let pipeline: TextPipeline = toml::from_str(content).map_err(|e| {
            Error::config(format!(
                "Failed to parse pipeline TOML: {}. Check TOML syntax.",
                e
            ))
        })?;

        log::debug!("Loaded text pipeline from TOML with {} steps", pipeline.steps.len());
        Ok(pipeline)
    }

    /// Parse a pipeline from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let pipeline: TextPipeline = serde_json::from_str(content)?;

        log::debug!("Loaded text pipeline from JSON with {} steps", pipeline.steps.len());
        Ok(pipeline)
    }

    /// Load a pipeline from a `.toml` or `.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let extension = path_ref.extension().and_then(|ext| ext.to_str());
        if !matches!(extension, Some("toml") | Some("json")) {
            return Err(Error::config(format!(
                "Unsupported pipeline file '{}'. Expected a .toml or .json extension.",
                path_ref.display()
            )));
        }

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::config(format!(
                "Failed to read pipeline file '{}': {}. Make sure the file exists and is readable.",
                path_ref.display(),
                e
            ))
        })?;

        let pipeline = if extension == Some("toml") {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        log::debug!(
            "Successfully loaded text pipeline from: {}",
            path_ref.display()
        );
        Ok(pipeline)
    }
}

impl FromIterator<Transform> for TextPipeline {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self::with_steps(iter.into_iter().collect())
    }
}

// TOML support
#[cfg(not(feature = "config"))]
mod toml {
    use crate::error::Error;
    use serde::de::DeserializeOwned;

    pub fn from_str<T: DeserializeOwned>(_: &str) -> Result<T, Error> {
        Err(Error::config(
            "TOML support not enabled. Add 'config' feature.",
        ))
    }
}
