use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for RustF Text
///
/// The text transforms themselves are total; only pipeline configuration
/// loading can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
