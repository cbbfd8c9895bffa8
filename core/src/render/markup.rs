//! # AsciiDoc Markup
//!
//! Line builders for the subset of AsciiDoc the renderers emit.

use serde_json::Value;

/// Section heading, `level` equals signs deep (`= Title`, `== Section`, ...).
pub fn heading(level: usize, text: &str) -> String {
    format!("{} {}", "=".repeat(level), text)
}

/// Unordered list item.
pub fn bullet(text: &str) -> String {
    format!("* {}", text)
}

/// Inline code span.
pub fn code(text: &str) -> String {
    format!("`{}`", text)
}

/// `[source,json]` listing block holding `value` pretty-printed with two-space indent.
pub fn json_block(value: &Value) -> Vec<String> {
    vec![
        "[source,json]".to_string(),
        "----".to_string(),
        format!("{:#}", value),
        "----".to_string(),
    ]
}

/// Two-column table with a header row.
pub fn table<'a, I>(header: (&str, &str), rows: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut lines = vec![
        "[cols=\"1,1\", options=\"header\"]".to_string(),
        "|===".to_string(),
        format!("| {} | {}", header.0, header.1),
    ];
    lines.extend(rows.into_iter().map(|(a, b)| format!("| {} | {}", a, b)));
    lines.push("|===".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_builders() {
        assert_eq!(heading(1, "T"), "= T");
        assert_eq!(heading(4, "Consumes"), "==== Consumes");
        assert_eq!(bullet(&format!("Path: {}", code("/x"))), "* Path: `/x`");
    }

    #[test]
    fn test_json_block_pretty_prints() {
        let lines = json_block(&json!({"ok": true, "items": [1, 2]}));
        assert_eq!(lines[0], "[source,json]");
        assert_eq!(lines[1], "----");
        assert_eq!(lines[2], "{\n  \"ok\": true,\n  \"items\": [\n    1,\n    2\n  ]\n}");
        assert_eq!(lines[3], "----");
    }

    #[test]
    fn test_table_layout() {
        let lines = table(("Property", "Type"), [("id", "integer")]);
        assert_eq!(
            lines,
            vec![
                "[cols=\"1,1\", options=\"header\"]",
                "|===",
                "| Property | Type",
                "| id | integer",
                "|===",
            ]
        );
    }
}
