use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{ordered_headers, plain};

/// Format the envelope as tables using the tabled crate.
///
/// Row arrays (yearly results, breakdown) become one table each, scalar and
/// nested-object fields become Field/Value tables.
pub fn print_table(value: &Value) {
    match value.get("result") {
        Some(Value::Object(result)) => {
            print_result_tables(result);
            print_footer(value);
        }
        Some(other) => println!("{}", plain(other)),
        None => println!("{}", plain(value)),
    }
}

fn print_result_tables(result: &Map<String, Value>) {
    let mut scalars = Builder::default();
    scalars.push_record(["Field", "Value"]);
    let mut has_scalars = false;

    for (key, val) in result {
        match val {
            Value::Array(rows) if rows.iter().all(Value::is_object) && !rows.is_empty() => {
                println!("{}", title(key));
                println!("{}", rows_table(rows));
            }
            Value::Object(map) => {
                println!("{}", title(key));
                println!("{}", field_table(map));
            }
            _ => {
                scalars.push_record([key.as_str(), &plain(val)]);
                has_scalars = true;
            }
        }
    }

    if has_scalars {
        println!("{}", Table::from(scalars));
    }
}

fn rows_table(rows: &[Value]) -> Table {
    let headers = match rows.first() {
        Some(Value::Object(first)) => ordered_headers(first),
        _ => Vec::new(),
    };
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| title(h)));
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| row.get(h.as_str()).map(plain).unwrap_or_default())
            .collect();
        builder.push_record(cells);
    }
    Table::from(builder)
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([title(key), plain(val)]);
    }
    Table::from(builder)
}

fn print_footer(envelope: &Value) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// `total_wealth` -> `Total Wealth`
fn title(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
