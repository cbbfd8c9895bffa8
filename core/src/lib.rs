#![deny(missing_docs)]

//! # OAS2AsciiDoc Core
//!
//! Converts an OpenAPI 3 document into four AsciiDoc files:
//! `overview.adoc`, `paths.adoc`, `definitions.adoc` and `security.adoc`.
//!
//! The pipeline is load → render → write; see [`convert_file`].

use std::path::{Path, PathBuf};

/// Shared error types.
pub mod error;

/// OpenAPI document model and loading.
pub mod oas;

/// Section renderers.
pub mod render;

/// Writing rendered sections to disk.
pub mod output;

pub use error::{AppError, AppResult};
pub use oas::{load_api_document, parse_api_document, ApiDocument, InputFormat};
pub use output::write_sections;
pub use render::{
    default_renderers, render_documentation, render_section, DefinitionsRenderer,
    OverviewRenderer, PathsRenderer, RenderedSection, SectionRenderer, SecurityRenderer,
};

/// Reads `input`, renders every section and writes them into `output_dir`.
///
/// `format` overrides extension-based format detection. Returns the written paths.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    format: Option<InputFormat>,
) -> AppResult<Vec<PathBuf>> {
    let document = load_api_document(input, format)?;
    let sections = render_documentation(&document);
    let written = write_sections(output_dir, &sections)?;

    tracing::info!(
        input = %input.display(),
        output = %output_dir.display(),
        operations = document.operations().count(),
        schemas = document.schemas().count(),
        "converted API description"
    );

    Ok(written)
}
