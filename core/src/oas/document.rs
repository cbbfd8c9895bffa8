#![deny(missing_docs)]

//! # Document Loading
//!
//! Reads an API description from disk and parses it into an [`ApiDocument`].
//! JSON is the primary input; YAML maps onto the same model.

use crate::error::{AppError, AppResult};
use crate::oas::models::ApiDocument;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Serialization format of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// JSON (`.json` and anything unrecognised).
    #[default]
    Json,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
}

impl InputFormat {
    /// Infers the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            other => Err(format!("unknown input format `{}` (expected json or yaml)", other)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Json => write!(f, "json"),
            InputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parses document content in the given format.
pub fn parse_api_document(content: &str, format: InputFormat) -> AppResult<ApiDocument> {
    let document: ApiDocument = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(document)
}

/// Reads and parses the document at `path`.
///
/// When `format` is `None` it is inferred with [`InputFormat::from_path`].
pub fn load_api_document(path: &Path, format: Option<InputFormat>) -> AppResult<ApiDocument> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    tracing::debug!(path = %path.display(), %format, "reading input document");

    let content = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_api_document(&content, format)
}
