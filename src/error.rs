//! Error Types Module
//!
//! Structured error type for the whole crate, built with `thiserror` so the
//! underlying causes convert automatically through `?`.

use std::path::PathBuf;
use thiserror::Error;

/// Error type used across the xl2json crate.
///
/// Every failure in the pipeline is terminal: there is no internal recovery,
/// no retry and no partial output. The CLI maps all variants to a non-zero
/// exit status.
///
/// # Variants
///
/// - `NotFound`: the input path does not exist or is not accessible
/// - `Parse`: the file exists but calamine cannot interpret it as a workbook
/// - `SheetNotFound`: the requested sheet name is absent from the workbook
/// - `DuplicateColumn`: two headers collide after sanitization
/// - `Io`: output write or other I/O failure
/// - `Json`: JSON serialization failure
#[derive(Error, Debug)]
pub enum Xl2JsonError {
    /// The input spreadsheet path does not exist.
    ///
    /// Checked before calamine is invoked so the user gets a message naming
    /// the missing path instead of a generic parse failure.
    #[error("Spreadsheet file not found: {0}")]
    NotFound(PathBuf),

    /// The input exists but could not be parsed as a spreadsheet.
    ///
    /// `#[from]` converts `calamine::Error` automatically, so the message
    /// carries the underlying cause (corrupt archive, wrong format, ...).
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// The workbook was parsed but the requested sheet name is absent.
    #[error("Sheet '{0}' not found in workbook")]
    SheetNotFound(String),

    /// Two input headers map to the same name after sanitization.
    ///
    /// The original columns would silently shadow each other in the record
    /// projection, so the pipeline rejects the table instead.
    #[error("Columns '{first}' and '{second}' both sanitize to '{cleaned}'")]
    DuplicateColumn {
        /// First input header involved in the collision.
        first: String,
        /// Second input header involved in the collision.
        second: String,
        /// The sanitized name both headers map to.
        cleaned: String,
    },

    /// I/O failure, typically while writing the output JSON file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
