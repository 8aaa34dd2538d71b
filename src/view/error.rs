//! Error types for the view-projection engine.

use thiserror::Error;

/// Problems detected while building the schema tree, before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A field references a format identifier that is not registered
    #[error("field '{field}' uses unknown formatter '{formatter}'")]
    UnknownFormatter { field: String, formatter: String },
}

/// Failure reported by a formatter for one specific value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for FormatError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for FormatError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Any failure surfaced through a renderer's `error()` accessor.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Rendering stopped at this field; rows written before it stay in the sink
    #[error("failed to format field '{field}': {source}")]
    Format {
        field: String,
        #[source]
        source: FormatError,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
