use std::io;
use std::time::Duration;
use thiserror::Error;

/// Error type for probe and platform failures.
///
/// Every variant means "this piece of data is unavailable"; the collector
/// turns them into the `Unknown` sentinel instead of aborting.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Command '{program}' exited with {status}")]
    CommandFailed { program: String, status: String },

    #[error("Command '{program}' timed out after {timeout:?}")]
    CommandTimeout { program: String, timeout: Duration },

    #[error("Environment variable not set: {0}")]
    MissingEnv(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not supported on this platform: {0}")]
    Unsupported(String),

    #[error("Battery error: {0}")]
    Battery(#[from] battery::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for omnifetch
pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        FetchError::Parse(msg.into())
    }

    /// Create a not-found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        FetchError::NotFound(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(what: S) -> Self {
        FetchError::Unsupported(what.into())
    }

    pub fn missing_env<S: Into<String>>(var: S) -> Self {
        FetchError::MissingEnv(var.into())
    }
}
