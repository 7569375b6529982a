//! Error types for the analyzer

use thiserror::Error;

/// Errors that can occur during analysis
///
/// Malformed texts never produce an error: they degrade to an `unknown`
/// result with zero confidence. Only wrong-typed input and misconfiguration
/// surface here.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Caller passed a value that cannot be degraded gracefully
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Modern data buffer is not valid UTF-8
    #[error("Decoding error: {0}")]
    Decoding(#[from] std::str::Utf8Error),

    /// Trained model queried before training completed
    #[error("Classifier used before training completed")]
    NotTrained,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(e: toml::de::Error) -> Self {
        AnalyzerError::Config(format!("Failed to parse TOML: {}", e))
    }
}

impl From<toml::ser::Error> for AnalyzerError {
    fn from(e: toml::ser::Error) -> Self {
        AnalyzerError::Config(format!("Failed to serialize to TOML: {}", e))
    }
}
