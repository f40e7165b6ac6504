//! Types Module
//!
//! Common data model shared by the loader, normalizer and serializer: a
//! `Table` of ordered columns and rows, with cell values kept as a closed
//! tagged enum so every stage can match exhaustively instead of inspecting
//! types at runtime.

use chrono::NaiveDateTime;
use std::fmt;

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text
    Text(String),

    /// Integer number
    Int(i64),

    /// Floating-point number
    Float(f64),

    /// Logical value
    Bool(bool),

    /// Date/time value (timezone-naive, as stored in the workbook)
    DateTime(NaiveDateTime),

    /// Empty cell
    Empty,
}

impl CellValue {
    /// Returns `true` for an empty cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Renders the value as plain text.
    ///
    /// Date/time values use the canonical `%Y-%m-%d %H:%M:%S` form (for
    /// example `2025-06-18 00:00:00`); empty cells render as `""`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

/// Inferred type of a column, derived from its loaded cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// At least one non-numeric, non-date text value
    Text,

    /// All non-empty values are integers
    Integer,

    /// All non-empty values are numeric, at least one fractional
    Float,

    /// All non-empty values are logical
    Boolean,

    /// At least one date/time value
    DateTime,

    /// Column contains no values at all
    Empty,
}

impl ColumnType {
    /// Infers a column type from its cell values.
    ///
    /// A single date/time cell marks the whole column as `DateTime` so the
    /// normalizer's date canonicalization covers mixed columns the same way
    /// a datetime64 column would behave. Mixing any other kinds degrades to
    /// `Text`.
    pub fn infer<'a>(cells: impl Iterator<Item = &'a CellValue>) -> Self {
        let mut seen = None;
        for cell in cells {
            let kind = match cell {
                CellValue::Empty => continue,
                CellValue::DateTime(_) => return ColumnType::DateTime,
                CellValue::Text(_) => ColumnType::Text,
                CellValue::Int(_) => ColumnType::Integer,
                CellValue::Float(_) => ColumnType::Float,
                CellValue::Bool(_) => ColumnType::Boolean,
            };

            seen = Some(match (seen, kind) {
                (None, k) => k,
                (Some(s), k) if s == k => s,
                // Int and Float mix into Float, anything else into Text
                (Some(ColumnType::Integer), ColumnType::Float)
                | (Some(ColumnType::Float), ColumnType::Integer) => ColumnType::Float,
                _ => ColumnType::Text,
            });
        }
        seen.unwrap_or(ColumnType::Empty)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::DateTime => "datetime",
            ColumnType::Empty => "empty",
        };
        write!(f, "{}", name)
    }
}

/// A column definition: header name plus inferred type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header name (verbatim from the sheet until the normalizer cleans it)
    pub name: String,

    /// Type inferred from the loaded cell values
    pub ty: ColumnType,
}

impl Column {
    /// Creates a new column definition.
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// In-memory representation of one spreadsheet sheet.
///
/// Invariant: every row holds exactly one value per column, in column
/// order. `push_row` pads short rows with `CellValue::Empty` to keep the
/// invariant over ragged source data.
///
/// The table is owned by a single pipeline invocation: the loader creates
/// it, the normalizer rebuilds it, the serializer reads and discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered column definitions
    pub columns: Vec<Column>,

    /// Ordered data rows, one `CellValue` per column
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Creates an empty table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a data row, padding with `Empty` up to the column count.
    ///
    /// Extra cells beyond the header width are dropped; a header-less
    /// trailing value has no name to be projected under.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Renders the first `limit` rows plus the inferred column types as a
    /// human-readable block for the `--preview` flag.
    ///
    /// Diagnostic only; the produced JSON is unaffected.
    pub fn preview(&self, limit: usize) -> String {
        let mut out = String::new();

        out.push_str("  ");
        out.push_str(&self.column_names().join(" | "));
        out.push('\n');

        for row in self.rows.iter().take(limit) {
            let cells: Vec<String> = row.iter().map(|c| c.as_text()).collect();
            out.push_str("  ");
            out.push_str(&cells.join(" | "));
            out.push('\n');
        }

        if self.row_count() > limit {
            out.push_str(&format!("  ... ({} rows total)\n", self.row_count()));
        }

        out.push_str("Column types:\n");
        for col in &self.columns {
            out.push_str(&format!("  {}: {}\n", col.name, col.ty));
        }

        out
    }
}
