//! Rendering of JSON values as GraphQL literal text.
//!
//! Literals are written with `", "` between items and `": "` between keys
//! and values, so `{"a": 1}` stays `{"a": 1}` rather than the compact
//! `{"a":1}`.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Format used for date-valued arguments. The offset is always UTC.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

/// Renders a value as a JSON literal.
///
/// # Example
///
/// ```rust
/// use pipefy_api::query::render_literal;
/// use serde_json::json;
///
/// assert_eq!(render_literal(&json!("123")), r#""123""#);
/// assert_eq!(render_literal(&json!(["a", 1])), r#"["a", 1]"#);
/// ```
#[must_use]
pub fn render_literal(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, false);
    out
}

/// Renders a mapping as a GraphQL input object.
///
/// Keys lose their quotes, values are written as JSON literals. Nested
/// objects (including those inside lists) are rendered the same way. A key
/// that is empty or contains whitespace cannot be written bare and keeps its
/// quotes.
///
/// # Example
///
/// ```rust
/// use pipefy_api::query::render_input_object;
/// use serde_json::json;
///
/// let rendered = render_input_object(&json!({"a": 1, "b": "x"}));
/// assert_eq!(rendered, r#"{a: 1, b: "x"}"#);
/// ```
#[must_use]
pub fn render_input_object(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, true);
    out
}

/// Renders a list of values as comma-joined literals, without brackets.
///
/// An empty list renders as an empty string, so a template of
/// `[ ${ids} ]` becomes `[  ]`.
#[must_use]
pub fn render_list(values: &[Value]) -> String {
    values
        .iter()
        .map(render_literal)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders an optional timestamp as a quoted ISO-8601 string or `null`.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use pipefy_api::query::render_datetime;
///
/// let due = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
/// assert_eq!(render_datetime(Some(&due)), r#""2024-03-01T12:30:00+00:00""#);
/// assert_eq!(render_datetime(None), "null");
/// ```
#[must_use]
pub fn render_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(
        || "null".to_string(),
        |at| format!("\"{}\"", at.format(DATETIME_FORMAT)),
    )
}

fn write_value(out: &mut String, value: &Value, bare_keys: bool) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item, bare_keys);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_key(out, key, bare_keys);
                out.push_str(": ");
                write_value(out, item, bare_keys);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_key(out: &mut String, key: &str, bare: bool) {
    let quoted = Value::from(key).to_string();
    let inner = &quoted[1..quoted.len() - 1];
    if bare && !inner.is_empty() && !inner.chars().any(char::is_whitespace) {
        out.push_str(inner);
    } else {
        out.push_str(&quoted);
    }
}
