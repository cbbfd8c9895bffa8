//! # Security Section
//!
//! One subsection per entry of `components.securitySchemes`.

use crate::oas::ApiDocument;
use crate::render::markup::{bullet, heading};
use crate::render::SectionRenderer;

/// Renders `security.adoc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityRenderer;

impl SectionRenderer for SecurityRenderer {
    fn file_name(&self) -> &'static str {
        "security.adoc"
    }

    fn render(&self, document: &ApiDocument) -> Vec<String> {
        let mut lines = vec![heading(2, "Security"), String::new()];
        for (name, scheme) in document.security_schemes() {
            lines.push(heading(3, name));
            lines.push(bullet(&format!("Type: {}", scheme.kind())));
            lines.push(scheme.description().to_string());
            lines.push(String::new());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::{parse_api_document, InputFormat};

    #[test]
    fn test_schemes_in_document_order() {
        let doc = parse_api_document(
            r#"{"components": {"securitySchemes": {
                "zToken": {"type": "apiKey", "description": "Header token."},
                "basic": {"type": "http"}
            }}}"#,
            InputFormat::Json,
        )
        .unwrap();

        assert_eq!(
            SecurityRenderer.render(&doc),
            vec![
                "== Security",
                "",
                "=== zToken",
                "* Type: apiKey",
                "Header token.",
                "",
                "=== basic",
                "* Type: http",
                "",
                "",
            ]
        );
    }

    #[test]
    fn test_missing_type() {
        let doc = parse_api_document(
            r#"{"components": {"securitySchemes": {"odd": {}}}}"#,
            InputFormat::Json,
        )
        .unwrap();
        assert_eq!(SecurityRenderer.render(&doc)[3], "* Type: ");
    }
}
