//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Every variant names the stage that failed (read, parse, write) so the CLI can
//! report it verbatim.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// Parse errors convert via `From`; IO errors are built explicitly because the
/// path they relate to is part of the message.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The input document could not be read.
    #[from(ignore)]
    #[display("Failed to read input document {path:?}: {source}")]
    Read {
        /// Path of the input document.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// The input document is not well-formed JSON for the expected shape.
    #[display("Failed to parse input document as JSON: {_0}")]
    Json(serde_json::Error),

    /// The input document is not well-formed YAML for the expected shape.
    #[display("Failed to parse input document as YAML: {_0}")]
    Yaml(serde_yaml::Error),

    /// The output directory could not be created.
    #[from(ignore)]
    #[display("Failed to create output directory {path:?}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[from(ignore)]
    #[display("Failed to write output file {path:?}: {source}")]
    Write {
        /// Target file.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Read { source, .. }
            | AppError::CreateDir { source, .. }
            | AppError::Write { source, .. } => Some(source),
            AppError::Json(e) => Some(e),
            AppError::Yaml(e) => Some(e),
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
