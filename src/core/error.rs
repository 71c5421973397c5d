//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level outside the valid range, or an unknown level name
    #[error("Invalid level: {level}")]
    InvalidLevel { level: String },

    /// Sink descriptor could not be opened
    #[error("Unsupported output '{output}': {source}")]
    UnsupportedOutput {
        output: String,
        #[source]
        source: std::io::Error,
    },

    /// Underlying sink write failed
    #[error("Sink write failed: {0}")]
    SinkWrite(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(level: impl ToString) -> Self {
        LoggerError::InvalidLevel {
            level: level.to_string(),
        }
    }

    /// Create an unsupported output error
    pub fn unsupported_output(output: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::UnsupportedOutput {
            output: output.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
