//! # Definitions Section
//!
//! One subsection per entry of `components.schemas`, with a property table when the
//! schema declares `properties`.

use crate::oas::ApiDocument;
use crate::render::markup::{heading, table};
use crate::render::SectionRenderer;

/// Renders `definitions.adoc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionsRenderer;

impl SectionRenderer for DefinitionsRenderer {
    fn file_name(&self) -> &'static str {
        "definitions.adoc"
    }

    fn render(&self, document: &ApiDocument) -> Vec<String> {
        let mut lines = vec![heading(2, "Definitions"), String::new()];
        for (name, schema) in document.schemas() {
            lines.push(heading(3, name));
            lines.push(schema.description().to_string());
            lines.push(String::new());

            // An empty `properties` object still gets a (header-only) table.
            if let Some(properties) = &schema.properties {
                let rows = properties
                    .iter()
                    .map(|(prop, meta)| (prop.as_str(), meta.type_label()));
                lines.extend(table(("Property", "Type"), rows));
                lines.push(String::new());
            }
        }
        lines
    }
}
