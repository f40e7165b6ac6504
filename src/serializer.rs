//! Serializer Module
//!
//! Projects each table row into a JSON record (cleaned column name to cell
//! value, in column order) and renders the ordered record sequence as a
//! JSON array, pretty-printed or compact.

use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;

use crate::error::Xl2JsonError;
use crate::types::{CellValue, Table};

/// Projects every row into an ordered name-to-value record.
///
/// serde_json is built with `preserve_order`, so the record keys keep the
/// table's column order in the output.
pub fn to_records(table: &Table) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .zip(row)
                .map(|(col, cell)| (col.name.clone(), cell_to_json(cell)))
                .collect()
        })
        .collect()
}

/// Converts one cell into a JSON value.
///
/// After normalization a table holds no `Empty` or `DateTime` cells; those
/// arms still serialize to `""` and the canonical date string so the
/// projection stays total over any `Table`. Non-finite floats have no JSON
/// representation and fall back to their text form.
fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Int(i) => Value::Number(Number::from(*i)),
        CellValue::Float(f) => match Number::from_f64(*f) {
            Some(n) => Value::Number(n),
            None => Value::String(f.to_string()),
        },
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::DateTime(_) | CellValue::Empty => Value::String(cell.as_text()),
    }
}

/// Serializes the table as a JSON array of records.
///
/// # Arguments
///
/// * `pretty` - multi-line output with 2-space indentation when `true`,
///   single-line output when `false`
///
/// Non-ASCII characters are preserved literally in both modes.
pub fn to_json(table: &Table, pretty: bool) -> Result<String, Xl2JsonError> {
    let records: Vec<Value> = to_records(table).into_iter().map(Value::Object).collect();

    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };

    Ok(json)
}

/// Serializes the table and writes the JSON to a file.
///
/// The file is created or truncated and written as UTF-8. A write failure
/// propagates as `Xl2JsonError::Io`; no partial-write recovery is
/// attempted.
///
/// # Side effects
///
/// Prints a saved-to confirmation to stdout.
pub fn write_json(table: &Table, path: &Path, pretty: bool) -> Result<String, Xl2JsonError> {
    let json = to_json(table, pretty)?;
    fs::write(path, json.as_bytes())?;
    println!("✓ JSON saved to: {}", path.display());
    Ok(json)
}
