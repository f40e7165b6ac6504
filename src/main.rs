//! Command-line entry point for xl2json.
//!
//! Single command, no subcommands: read a spreadsheet, normalize it, emit
//! JSON to stdout or a file. Any failure prints a `✗` message and exits
//! with status 1.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use xl2json::{loader, normalizer, serializer, Xl2JsonError};

#[derive(Parser)]
#[command(name = "xl2json")]
#[command(version)]
#[command(about = "Convert a spreadsheet file to JSON")]
#[command(long_about = "Convert a spreadsheet file (.xls, .xlsx, .xlsb, .ods) to a JSON \
array of records, one object per row keyed by sanitized column names.

Intended as a quick local preview of spreadsheet contents before loading
the same data into a document database.

EXAMPLES:
  xl2json catalogo.xlsx                     # pretty JSON to stdout
  xl2json catalogo.xlsx -s Hoja2            # read a named sheet
  xl2json catalogo.xlsx -o catalogo.json    # write to a file
  xl2json catalogo.xlsx --compact           # single-line JSON
  xl2json catalogo.xlsx --preview           # dump rows and types first")]
struct Cli {
    /// Path to the input spreadsheet file
    file: PathBuf,

    /// Sheet to read (default: first sheet in the document)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Destination file for the JSON result (default: print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON instead of the default indented form
    #[arg(long)]
    compact: bool,

    /// Print the first rows and inferred column types before converting
    #[arg(long)]
    preview: bool,
}

/// Rows shown by `--preview`.
const PREVIEW_ROWS: usize = 5;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    println!("Spreadsheet to JSON converter");
    println!("{}", "=".repeat(30));
    println!("Input file: {}", cli.file.display());
    println!(
        "Sheet: {}",
        cli.sheet.as_deref().unwrap_or("first sheet")
    );
    if let Some(output) = &cli.output {
        println!("Output: {}", output.display());
    }
    println!();

    if let Err(e) = run(&cli) {
        report_error(&e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Xl2JsonError> {
    let table = loader::load_table(&cli.file, cli.sheet.as_deref())?;

    if cli.preview {
        println!("\n📋 Data preview:");
        print!("{}", table.preview(PREVIEW_ROWS));
        println!();
    }

    let table = normalizer::normalize(table)?;

    let pretty = !cli.compact;
    let json = match &cli.output {
        Some(path) => serializer::write_json(&table, path, pretty)?,
        None => serializer::to_json(&table, pretty)?,
    };

    if cli.output.is_none() {
        println!("\n📄 JSON output:");
        println!("{}", json);
    }

    println!("\n✅ Spreadsheet converted to JSON");
    println!("   Records: {}", table.row_count());
    println!("   Fields: {}", table.column_count());

    Ok(())
}

/// Prints a user-facing message for every failure kind.
///
/// The process signals plain success/failure only; no distinct exit codes
/// per variant.
fn report_error(error: &Xl2JsonError) {
    match error {
        Xl2JsonError::NotFound(path) => {
            eprintln!("✗ Spreadsheet file not found: {}", path.display());
        }
        Xl2JsonError::Parse(cause) => {
            eprintln!("✗ Error reading the spreadsheet: {}", cause);
        }
        Xl2JsonError::SheetNotFound(name) => {
            eprintln!("✗ Sheet not found in workbook: {}", name);
        }
        Xl2JsonError::DuplicateColumn { .. } => {
            eprintln!("✗ {}", error);
            eprintln!("  Rename one of the columns so the cleaned names stay unique.");
        }
        Xl2JsonError::Io(cause) => {
            eprintln!("✗ I/O error: {}", cause);
        }
        Xl2JsonError::Json(cause) => {
            eprintln!("✗ JSON serialization error: {}", cause);
        }
    }
}
