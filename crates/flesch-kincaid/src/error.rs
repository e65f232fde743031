//! Error types for flesch-kincaid.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during readability analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input has no sentences or no words, so both formulas divide by zero.
    #[error("no scorable text in input")]
    EmptyInput,

    /// A syntax-analysis response could not be parsed.
    #[error("invalid syntax response: {0}")]
    SyntaxResponse(#[from] serde_json::Error),

    /// An annotator backend could not load its tokenizer.
    #[error("failed to load tokenizer from {path}: {message}")]
    Tokenizer {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Description of the underlying failure.
        message: String,
    },

    /// No tokenizer path is configured.
    #[error("no tokenizer configured (set tokenizer_path)")]
    TokenizerNotConfigured,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
