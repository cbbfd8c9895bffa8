#![deny(missing_docs)]

//! # Section Renderers
//!
//! Each renderer turns (a part of) the [`ApiDocument`] into the lines of one
//! `.adoc` file. Renderers are pure and independent of each other.

use crate::oas::ApiDocument;

pub mod definitions;
pub mod markup;
pub mod overview;
pub mod paths;
pub mod security;

pub use definitions::DefinitionsRenderer;
pub use overview::OverviewRenderer;
pub use paths::{select_example, PathsRenderer};
pub use security::SecurityRenderer;

/// A renderer for one output file.
pub trait SectionRenderer {
    /// Name of the file the section is written to (e.g. `overview.adoc`).
    fn file_name(&self) -> &'static str;

    /// Produces the section as a sequence of lines.
    fn render(&self, document: &ApiDocument) -> Vec<String>;
}

/// The rendered content of one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    /// Target file name inside the output directory.
    pub file_name: &'static str,
    /// Lines joined with `\n`, without a trailing newline.
    pub content: String,
}

/// The standard renderers: overview, paths, definitions, security.
pub fn default_renderers() -> Vec<Box<dyn SectionRenderer>> {
    vec![
        Box::new(OverviewRenderer),
        Box::new(PathsRenderer),
        Box::new(DefinitionsRenderer),
        Box::new(SecurityRenderer),
    ]
}

/// Runs a single renderer and joins its lines.
pub fn render_section(renderer: &dyn SectionRenderer, document: &ApiDocument) -> RenderedSection {
    let lines = renderer.render(document);
    tracing::debug!(
        file = renderer.file_name(),
        lines = lines.len(),
        "rendered section"
    );
    RenderedSection {
        file_name: renderer.file_name(),
        content: lines.join("\n"),
    }
}

/// Renders every standard section of `document`.
pub fn render_documentation(document: &ApiDocument) -> Vec<RenderedSection> {
    default_renderers()
        .iter()
        .map(|renderer| render_section(renderer.as_ref(), document))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_documentation_file_names() {
        let sections = render_documentation(&ApiDocument::default());
        let names: Vec<_> = sections.iter().map(|s| s.file_name).collect();
        assert_eq!(
            names,
            vec!["overview.adoc", "paths.adoc", "definitions.adoc", "security.adoc"]
        );
    }

    #[test]
    fn test_empty_document_content() {
        let sections = render_documentation(&ApiDocument::default());
        assert_eq!(
            sections[0].content,
            "= API Documentation\n\n\nNo description provided."
        );
        assert_eq!(sections[3].content, "== Security\n");
    }
}
