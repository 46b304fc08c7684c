pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The per-year rows of a simulation envelope, if present.
pub(crate) fn yearly_rows(value: &Value) -> Option<&Vec<Value>> {
    value
        .get("result")
        .and_then(|r| r.get("yearly_results"))
        .and_then(Value::as_array)
}

/// Column order for a row object: `year` leads, the rest keep map order.
pub(crate) fn ordered_headers(first: &Map<String, Value>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(first.len());
    if first.contains_key("year") {
        headers.push("year".to_string());
    }
    headers.extend(first.keys().filter(|k| k.as_str() != "year").cloned());
    headers
}

/// Render a scalar JSON value as plain text.
pub(crate) fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(plain).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
