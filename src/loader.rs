//! Loader Module
//!
//! Opens a spreadsheet file through calamine's format auto-detection
//! (XLS/XLSX/XLSB/ODS) and materializes the selected sheet into a `Table`.
//! Source-native typing is preserved; no coercion happens here.

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::path::Path;

use crate::error::Xl2JsonError;
use crate::types::{CellValue, Column, ColumnType, Table};

/// Loads one sheet of a spreadsheet file into a `Table`.
///
/// The first row of the sheet's used range is taken as the header row;
/// every subsequent row becomes a data row, padded with empty cells up to
/// the header width. Column types are inferred from the loaded values.
///
/// # Arguments
///
/// * `path` - path to the spreadsheet file
/// * `sheet` - sheet name to read; `None` selects the first sheet in
///   document order
///
/// # Errors
///
/// * `Xl2JsonError::NotFound` - the path does not exist
/// * `Xl2JsonError::Parse` - calamine cannot interpret the file, or the
///   workbook contains no sheets
/// * `Xl2JsonError::SheetNotFound` - the named sheet is absent
///
/// # Side effects
///
/// Prints a read confirmation, the row/column counts and the column names
/// to stdout.
pub fn load_table(path: &Path, sheet: Option<&str>) -> Result<Table, Xl2JsonError> {
    if !path.exists() {
        return Err(Xl2JsonError::NotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(Xl2JsonError::Parse(calamine::Error::Msg(
            "workbook contains no sheets",
        )));
    }

    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|n| n == name) {
                return Err(Xl2JsonError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => sheet_names[0].clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Xl2JsonError::Parse(e.into()))?;

    let table = build_table(&range);

    match sheet {
        Some(name) => println!("✓ Sheet '{}' read from {}", name, path.display()),
        None => println!("✓ Spreadsheet read: {}", path.display()),
    }
    println!(
        "  - Rows: {}, Columns: {}",
        table.row_count(),
        table.column_count()
    );
    println!("  - Columns: {:?}", table.column_names());

    for col in &table.columns {
        log::debug!("inferred column '{}' as {}", col.name, col.ty);
    }

    Ok(table)
}

/// Builds a `Table` from a calamine cell range.
///
/// The first row supplies the header names (rendered to text verbatim);
/// the rest become data rows. An empty range yields an empty table.
fn build_table(range: &calamine::Range<Data>) -> Table {
    let mut rows = range.rows();

    let columns: Vec<Column> = match rows.next() {
        Some(header) => header
            .iter()
            .map(|cell| Column::new(data_to_cell(cell).as_text(), ColumnType::Empty))
            .collect(),
        None => Vec::new(),
    };

    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row.iter().map(data_to_cell).collect());
    }

    // Infer each column's type from the data rows now that they are all in
    for idx in 0..table.column_count() {
        table.columns[idx].ty = ColumnType::infer(table.rows.iter().map(|row| &row[idx]));
    }

    table
}

/// Maps one calamine cell into the crate's value model.
///
/// Date cells arrive either as Excel serial values (`Data::DateTime`) or as
/// ISO strings (`Data::DateTimeIso`, ODS); both become
/// `CellValue::DateTime`. Error cells (`#DIV/0!`, ...) keep their error
/// code as text.
fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match serial_to_datetime(dt.as_f64()) {
            Some(naive) => CellValue::DateTime(naive),
            // Serial outside chrono's representable range; keep the number
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match parse_iso_datetime(s) {
            Some(naive) => CellValue::DateTime(naive),
            None => CellValue::Text(s.clone()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

/// Converts an Excel serial date value into a `NaiveDateTime`.
///
/// Uses the 1900 epoch system: day 0 is 1899-12-30, which absorbs Excel's
/// historical 1900 leap-year bug for every date from 1900-03-01 onward.
/// The fractional part is the time of day in 1/86400ths.
fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let mut days = serial.floor() as i64;
    let mut secs = ((serial - serial.floor()) * 86_400.0).round() as i64;
    if secs >= 86_400 {
        days += 1;
        secs = 0;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = epoch.checked_add_signed(Duration::try_days(days)?)?;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::try_seconds(secs)?)
}

/// Parses an ISO 8601 date or datetime string (as emitted for ODS cells).
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}
