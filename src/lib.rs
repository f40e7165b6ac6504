//! xl2json - Spreadsheet to JSON converter
//!
//! This crate reads a spreadsheet file (XLS/XLSX/XLSB/ODS), normalizes its
//! tabular data and serializes it as a JSON array of records; one object
//! per row, keyed by sanitized column names. It is meant for quick local
//! previews of spreadsheet contents before loading the same data into a
//! document database.
//!
//! The pipeline is three sequential stages with no shared state:
//! load -> normalize -> serialize.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), xl2json::Xl2JsonError> {
//!     // Read the first sheet and print pretty JSON
//!     let json = xl2json::convert_path(Path::new("catalogo.xlsx"), None, true)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! # Stage by stage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use xl2json::{loader, normalizer, serializer};
//!
//! # fn main() -> Result<(), xl2json::Xl2JsonError> {
//! let table = loader::load_table(Path::new("catalogo.xlsx"), Some("Hoja1"))?;
//! let table = normalizer::normalize(table)?;
//! let json = serializer::write_json(&table, Path::new("catalogo.json"), true)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod normalizer;
pub mod serializer;
pub mod types;

pub use error::Xl2JsonError;
pub use types::{CellValue, Column, ColumnType, Table};

use std::path::Path;

/// Runs the whole pipeline on one file and returns the JSON string.
///
/// Convenience composition of [`loader::load_table`],
/// [`normalizer::normalize`] and [`serializer::to_json`]; no file output.
///
/// # Arguments
///
/// * `path` - input spreadsheet path
/// * `sheet` - sheet name, `None` for the first sheet
/// * `pretty` - indented output when `true`
pub fn convert_path(
    path: &Path,
    sheet: Option<&str>,
    pretty: bool,
) -> Result<String, Xl2JsonError> {
    let table = loader::load_table(path, sheet)?;
    let table = normalizer::normalize(table)?;
    serializer::to_json(&table, pretty)
}
