//! Normalizer Module
//!
//! Cleans a loaded `Table` for JSON output: fills empty cells with `""`,
//! sanitizes header names into `[A-Za-z0-9_]`, and canonicalizes date
//! columns into their fixed textual form.

use std::collections::HashMap;

use crate::error::Xl2JsonError;
use crate::types::{CellValue, ColumnType, Table};

/// Sanitizes one header name.
///
/// Spaces are replaced with underscores first, then every remaining
/// character outside `[A-Za-z0-9_]` is removed (not replaced). The order
/// matters: `"A B-C"` becomes `"A_BC"`. Non-ASCII letters are stripped, so
/// `"Código"` becomes `"Cdigo"`; a known limitation inherited from the
/// ingestion format, not a bug.
///
/// The transformation is idempotent.
pub fn sanitize_header(name: &str) -> String {
    name.replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Normalizes a table in three steps.
///
/// 1. **Empty fill** - every empty cell becomes the text value `""`,
///    regardless of the column's type (a missing number becomes `""`,
///    never `0`).
/// 2. **Header sanitation** - each column name goes through
///    [`sanitize_header`]. If two columns collide after cleaning the table
///    is rejected with `Xl2JsonError::DuplicateColumn` instead of letting
///    one silently shadow the other in the record projection.
/// 3. **Date canonicalization** - every cell in a column whose inferred
///    type is `DateTime` has its date values replaced by their
///    `%Y-%m-%d %H:%M:%S` text form (e.g. `"2025-06-18 00:00:00"`).
///    Detection uses the type inferred at load time, so header rewriting
///    cannot change which columns are treated as dates.
///
/// # Side effects
///
/// When any header actually changed, prints the before/after column-name
/// listing to stdout.
pub fn normalize(mut table: Table) -> Result<Table, Xl2JsonError> {
    let original_names: Vec<String> = table.columns.iter().map(|c| c.name.clone()).collect();

    // Step A: empty fill
    for row in &mut table.rows {
        for cell in row.iter_mut() {
            if cell.is_empty() {
                *cell = CellValue::Text(String::new());
            }
        }
    }

    // Step B: header sanitation, with collision detection
    let mut seen: HashMap<String, String> = HashMap::new();
    for col in &mut table.columns {
        let cleaned = sanitize_header(&col.name);
        if let Some(first) = seen.get(&cleaned) {
            return Err(Xl2JsonError::DuplicateColumn {
                first: first.clone(),
                second: col.name.clone(),
                cleaned,
            });
        }
        seen.insert(cleaned.clone(), col.name.clone());
        col.name = cleaned;
    }

    // Step C: date canonicalization, judged against the load-time type
    for (idx, col) in table.columns.iter().enumerate() {
        if col.ty != ColumnType::DateTime {
            continue;
        }
        for row in &mut table.rows {
            if let CellValue::DateTime(dt) = &row[idx] {
                row[idx] = CellValue::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string());
            }
        }
    }

    println!("✓ Table normalized");
    let changed = table
        .columns
        .iter()
        .zip(&original_names)
        .any(|(col, original)| &col.name != original);
    if changed {
        println!("  - Original columns: {:?}", original_names);
        println!("  - Cleaned columns: {:?}", table.column_names());
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;
    use chrono::NaiveDate;

    fn table_with(columns: Vec<Column>, rows: Vec<Vec<CellValue>>) -> Table {
        let mut table = Table::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    #[test]
    fn test_sanitize_header_space_to_underscore() {
        assert_eq!(sanitize_header("Clave SAT"), "Clave_SAT");
    }

    #[test]
    fn test_sanitize_header_space_before_strip() {
        // space -> underscore happens first, then the hyphen is removed
        assert_eq!(sanitize_header("A B-C"), "A_BC");
        assert_eq!(sanitize_header("Fecha (ISO)"), "Fecha_ISO");
    }

    #[test]
    fn test_sanitize_header_strips_non_ascii() {
        assert_eq!(sanitize_header("Código"), "Cdigo");
        assert_eq!(sanitize_header("Año"), "Ao");
    }

    #[test]
    fn test_sanitize_header_idempotent() {
        for name in ["Clave SAT", "Fecha (ISO)", "Código", "A B-C", "", "ya_limpio"] {
            let once = sanitize_header(name);
            assert_eq!(sanitize_header(&once), once);
        }
    }

    #[test]
    fn test_empty_fill_is_total() {
        let table = table_with(
            vec![
                Column::new("Descripcion", ColumnType::Text),
                Column::new("Cantidad", ColumnType::Integer),
            ],
            vec![
                vec![CellValue::Empty, CellValue::Int(3)],
                vec![CellValue::Text("x".to_string()), CellValue::Empty],
            ],
        );

        let normalized = normalize(table).unwrap();
        for row in &normalized.rows {
            for cell in row {
                assert!(!cell.is_empty());
            }
        }
        // A missing number becomes "", not 0
        assert_eq!(normalized.rows[1][1], CellValue::Text(String::new()));
    }

    #[test]
    fn test_headers_are_cleaned() {
        let table = table_with(
            vec![
                Column::new("Clave SAT", ColumnType::Text),
                Column::new("Código", ColumnType::Text),
            ],
            vec![],
        );

        let normalized = normalize(table).unwrap();
        assert_eq!(normalized.column_names(), vec!["Clave_SAT", "Cdigo"]);
    }

    #[test]
    fn test_duplicate_columns_after_cleaning_are_rejected() {
        let table = table_with(
            vec![
                Column::new("A B", ColumnType::Text),
                Column::new("A_B", ColumnType::Text),
            ],
            vec![],
        );

        match normalize(table) {
            Err(Xl2JsonError::DuplicateColumn {
                first,
                second,
                cleaned,
            }) => {
                assert_eq!(first, "A B");
                assert_eq!(second, "A_B");
                assert_eq!(cleaned, "A_B");
            }
            other => panic!("Expected DuplicateColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_date_column_canonicalized() {
        let dt = NaiveDate::from_ymd_opt(2025, 6, 18)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let table = table_with(
            vec![Column::new("Fecha", ColumnType::DateTime)],
            vec![vec![CellValue::DateTime(dt)], vec![CellValue::Empty]],
        );

        let normalized = normalize(table).unwrap();
        assert_eq!(
            normalized.rows[0][0],
            CellValue::Text("2025-06-18 00:00:00".to_string())
        );
        // The empty cell in the date column was filled, not date-formatted
        assert_eq!(normalized.rows[1][0], CellValue::Text(String::new()));
    }

    #[test]
    fn test_mixed_date_column_leaves_text_cells_alone() {
        let dt = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let table = table_with(
            vec![Column::new("Fecha", ColumnType::DateTime)],
            vec![
                vec![CellValue::DateTime(dt)],
                vec![CellValue::Text("pendiente".to_string())],
            ],
        );

        let normalized = normalize(table).unwrap();
        assert_eq!(
            normalized.rows[0][0],
            CellValue::Text("2025-01-01 12:30:00".to_string())
        );
        assert_eq!(
            normalized.rows[1][0],
            CellValue::Text("pendiente".to_string())
        );
    }

    #[test]
    fn test_non_date_columns_untouched_by_step_c() {
        let table = table_with(
            vec![Column::new("Cantidad", ColumnType::Integer)],
            vec![vec![CellValue::Int(45826)]],
        );

        // A number that would be a valid date serial stays a number
        let normalized = normalize(table).unwrap();
        assert_eq!(normalized.rows[0][0], CellValue::Int(45826));
    }

    #[test]
    fn test_normalize_preserves_row_and_column_counts() {
        let table = table_with(
            vec![
                Column::new("Uno Dos", ColumnType::Text),
                Column::new("Tres", ColumnType::Integer),
            ],
            vec![
                vec![CellValue::Text("a".to_string()), CellValue::Int(1)],
                vec![CellValue::Empty, CellValue::Empty],
                vec![CellValue::Text("b".to_string()), CellValue::Int(2)],
            ],
        );

        let normalized = normalize(table).unwrap();
        assert_eq!(normalized.row_count(), 3);
        assert_eq!(normalized.column_count(), 2);
    }
}
