use serde_json::Value;

use super::{plain, yearly_rows};

/// Print just the final year's total wealth.
///
/// Falls back to the last chart point, then to the whole result.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result = value.get("result").unwrap_or(value);

    if let Some(v) = result
        .get("summary")
        .and_then(|s| s.get("final_wealth"))
        .filter(|v| !v.is_null())
    {
        return plain(v);
    }

    if let Some(last) = yearly_rows(value).and_then(|rows| rows.last()) {
        if let Some(v) = last.get("total_wealth") {
            return plain(v);
        }
    }

    if let Some(last) = result
        .get("data")
        .and_then(Value::as_array)
        .and_then(|d| d.last())
    {
        return plain(last);
    }

    plain(result)
}
