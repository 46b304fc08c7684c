use serde_json::Value;
use std::io;

use super::{ordered_headers, plain, yearly_rows};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    if let Err(e) = write_csv(&mut wtr, value) {
        eprintln!("CSV write error: {}", e);
    }
}

/// Yearly results become `year,total_wealth` rows; a chart series becomes
/// `year,value` rows; anything else falls back to `field,value`.
fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    let result = value.get("result").unwrap_or(value);

    if let Some(rows) = yearly_rows(value) {
        write_rows(wtr, rows)?;
    } else if let (Some(Value::Array(labels)), Some(Value::Array(data))) =
        (result.get("labels"), result.get("data"))
    {
        wtr.write_record(["year", "value"])?;
        for (label, point) in labels.iter().zip(data) {
            wtr.write_record([plain(label), plain(point)])?;
        }
    } else if let Value::Object(map) = result {
        wtr.write_record(["field", "value"])?;
        for (key, val) in map {
            wtr.write_record([key.as_str(), &plain(val)])?;
        }
    } else {
        wtr.write_record([plain(result)])?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        return Ok(());
    };
    let headers = ordered_headers(first);
    wtr.write_record(&headers)?;
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| row.get(h.as_str()).map(plain).unwrap_or_default())
            .collect();
        wtr.write_record(&cells)?;
    }
    Ok(())
}
