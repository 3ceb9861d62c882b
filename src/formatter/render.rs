//! The nested formatting widget: pretty-prints a JSON value into plain text
//! and colorizable span markup
//!
//! Span classes (`json-key`, `json-string`, `json-number`, `json-literal`)
//! match what the dashboard stylesheet colors; the plain text is standard
//! two-space-indented pretty JSON.

use serde_json::Value;

const INDENT: &str = "  ";

/// Output of one rendering pass; both fields are produced from the same
/// parsed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Pretty-printed text content
    pub plain: String,
    /// Span-annotated markup for the same content
    pub markup: String,
}

/// Render a parsed JSON value
pub fn render(value: &Value) -> Rendered {
    let plain = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    let mut markup = String::new();
    write_value(&mut markup, value, 0);
    Rendered { plain, markup }
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => span(out, "json-literal", "null"),
        Value::Bool(b) => span(out, "json-literal", if *b { "true" } else { "false" }),
        Value::Number(n) => span(out, "json-number", &n.to_string()),
        Value::String(s) => span(out, "json-string", &quote(s)),
        Value::Array(items) => write_array(out, items, depth),
        Value::Object(map) => write_object(out, map, depth),
    }
}

fn write_array(out: &mut String, items: &[Value], depth: usize) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        indent(out, depth + 1);
        write_value(out, item, depth + 1);
        if i + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    indent(out, depth);
    out.push(']');
}

fn write_object(out: &mut String, map: &serde_json::Map<String, Value>, depth: usize) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    for (i, (key, item)) in map.iter().enumerate() {
        indent(out, depth + 1);
        span(out, "json-key", &quote(key));
        out.push_str(": ");
        write_value(out, item, depth + 1);
        if i + 1 < map.len() {
            out.push(',');
        }
        out.push('\n');
    }
    indent(out, depth);
    out.push('}');
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&escape(text));
    out.push_str("</span>");
}

/// JSON-quote a string (adds the surrounding quotes and escapes)
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// Escape markup-significant characters
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
