//! # Overview Section
//!
//! Title, version and description from the `info` object.

use crate::oas::ApiDocument;
use crate::render::markup::heading;
use crate::render::SectionRenderer;

/// Renders `overview.adoc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewRenderer;

impl SectionRenderer for OverviewRenderer {
    fn file_name(&self) -> &'static str {
        "overview.adoc"
    }

    fn render(&self, document: &ApiDocument) -> Vec<String> {
        let info = document.info();
        let mut lines = vec![heading(1, info.title()), String::new()];
        if let Some(version) = &info.version {
            lines.push(format!("Version: {}", version));
        }
        lines.push(String::new());
        lines.push(info.description().to_string());
        lines
    }
}
