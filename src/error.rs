//! Error types for the kreport CLI and library entry points.

use crate::view::{SchemaError, ViewError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KreportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    View(#[from] ViewError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("Invalid formatter alias: {0}")]
    InvalidAlias(#[from] SchemaError),
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to read layout {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse layout {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to parse JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML input: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Record index {index} is out of range ({len} records)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, KreportError>;
