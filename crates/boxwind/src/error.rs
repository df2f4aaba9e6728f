//! Error types for loading style sheets.
//!
//! Translation itself never fails; problems in property strings are reported
//! as diagnostics. These errors only cover reading and decoding sheet files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a [`StyleSheet`](crate::StyleSheet).
#[derive(Debug, Error)]
pub enum SheetError {
    /// The sheet file could not be read.
    #[error("failed to read style sheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML decoding failed.
    #[error("invalid YAML style sheet: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON decoding failed.
    #[error("invalid JSON style sheet: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;
