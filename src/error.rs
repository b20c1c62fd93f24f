use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing houses, parsing shapes or loading plans.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Unknown shape: '{0}' (expected circle, rectangle or square)")]
    UnknownShape(String),

    #[error("Failed to parse {format} plan: {message}")]
    Parse { format: String, message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl PatternError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        PatternError::parse("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::parse("TOML", err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
