//! CSV output preserving the input column order.
//!
//! Records are written in the order given by the header list, not by map
//! iteration, so the output schema matches the input exactly. Fields are
//! double-quoted whenever they contain the delimiter, quotes, or line
//! breaks (which every multi-paragraph testimonial does).

use serde_json::Value;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::WriteResult;

/// Write records as comma-delimited CSV, header row first.
///
/// An existing file at `path` is overwritten. Values missing from a record
/// are written as empty strings. Output is always UTF-8.
pub fn write_csv_file(path: &Path, headers: &[String], records: &[Value]) -> WriteResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    writer.write_record(headers)?;

    for record in records {
        let row: Vec<&str> = headers
            .iter()
            .map(|h| record.get(h.as_str()).and_then(Value::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
