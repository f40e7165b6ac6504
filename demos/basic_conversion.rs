//! Basic Conversion Example
//!
//! Reads a catalog spreadsheet, normalizes it and writes the JSON next to
//! it. Run with:
//!
//! ```text
//! cargo run --example basic_conversion -- catalogos/catCFDI.xlsx
//! ```

use std::path::{Path, PathBuf};
use xl2json::{loader, normalizer, serializer, Xl2JsonError};

fn main() -> Result<(), Xl2JsonError> {
    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("catalogo.xlsx"));
    let output = input.with_extension("json");

    let table = loader::load_table(&input, None)?;
    let table = normalizer::normalize(table)?;
    serializer::write_json(&table, Path::new(&output), true)?;

    println!("Conversion finished!");
    Ok(())
}
