//! Error types for nextword

use thiserror::Error;

/// Result type alias for nextword operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern for rule '{rule}': {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Malformed rule file: {0}")]
    RuleFile(#[from] toml::de::Error),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("{0}")]
    Usage(String),
}
