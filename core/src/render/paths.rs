//! # Paths Section
//!
//! One subsection per operation, in document order of paths and then methods:
//! identity bullets, description, consumed media types, responses, and the first
//! example payload found among the responses.

use crate::oas::{ApiDocument, Operation, Response};
use crate::render::markup::{bullet, code, heading, json_block};
use crate::render::SectionRenderer;
use serde_json::Value;

/// Renders `paths.adoc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathsRenderer;

impl SectionRenderer for PathsRenderer {
    fn file_name(&self) -> &'static str {
        "paths.adoc"
    }

    fn render(&self, document: &ApiDocument) -> Vec<String> {
        let mut lines = vec![heading(2, "API Paths"), String::new()];
        for (path, method, operation) in document.operations() {
            render_operation(&mut lines, path, method, operation);
        }
        lines
    }
}

fn render_operation(lines: &mut Vec<String>, path: &str, method: &str, operation: &Operation) {
    lines.push(heading(3, &operation.heading(method, path)));
    lines.push(bullet(&format!("Method: {}", code(&method.to_uppercase()))));
    lines.push(bullet(&format!("Path: {}", code(path))));
    lines.push(bullet(&format!("Tags: {}", operation.tags_label())));
    lines.push(String::new());
    lines.push(operation.description().to_string());
    lines.push(String::new());

    let consumes: Vec<&str> = operation.consumes().collect();
    if !consumes.is_empty() {
        lines.push(heading(4, "Consumes"));
        lines.extend(consumes.into_iter().map(|mime| bullet(&code(mime))));
        lines.push(String::new());
    }

    let mut responses = operation.responses().peekable();
    if responses.peek().is_some() {
        lines.push(heading(4, "Responses"));
        lines.extend(responses.map(|(status, response)| {
            bullet(&format!("{}: {}", code(status), response.description()))
        }));
        lines.push(String::new());
    }

    if let Some(example) = select_example(operation.responses().map(|(_, r)| r)) {
        lines.push(heading(4, "Example Response"));
        lines.extend(json_block(example));
        lines.push(String::new());
    }
}

/// Finds the example payload to show for an operation.
///
/// Responses are scanned in order. Only the first content entry of each response is
/// inspected: its `examples` map (first entry's `value`) takes precedence over its
/// singular `example`. The first non-null payload wins; responses that yield nothing
/// do not stop the scan.
pub fn select_example<'a, I>(responses: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = &'a Response>,
{
    for response in responses {
        let Some(media) = response.first_content() else {
            continue;
        };

        let candidate = match &media.examples {
            Some(examples) => examples
                .values()
                .next()
                .and_then(Option::as_ref)
                .and_then(|ex| ex.value.as_ref()),
            None => media.example.as_ref(),
        };

        if let Some(example) = candidate.filter(|v| !v.is_null()) {
            return Some(example);
        }
    }
    None
}
