//! Error types for the brand book.

use std::path::PathBuf;
use thiserror::Error;

/// A style change rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleChangeError {
    /// No element id was given.
    #[error("style change is missing an element id")]
    MissingElementId,

    /// No property name was given.
    #[error("style change for '{element_id}' is missing a property name")]
    MissingProperty { element_id: String },

    /// The property is computed from other properties.
    #[error("'{property}' is derived and cannot be set directly")]
    DerivedProperty { property: String },
}

/// Errors loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file requested with `--config` does not exist.
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the config file.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for the expected shape.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors copying to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The system clipboard rejected the write.
    #[error("system clipboard unavailable: {0}")]
    System(#[from] arboard::Error),

    /// Writing the OSC 52 sequence to the terminal failed.
    #[error("failed to write OSC 52 sequence: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Top-level errors of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to set up logging at {path}: {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
