//! CLI entry point for `xlsx2sql`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use xlsx2sql::error::ConvertError;
use xlsx2sql::generator::statement;
use xlsx2sql::normalizer::columns;
use xlsx2sql::output::formatter::{self, OutputTarget};
use xlsx2sql::reader::sheet::ReadOptions;
use xlsx2sql::reader::workbook;

#[derive(Parser)]
#[command(
    name = "xlsx2sql",
    about = "Generate SQL INSERT statements from a spreadsheet file"
)]
struct Cli {
    /// Path to the spreadsheet, or a bare filename if --input-folder is used
    excel_file: PathBuf,

    /// SQL table name
    #[arg(short, long)]
    table: String,

    /// Column names to include (default: auto-detect columns with data)
    #[arg(short, long, num_args = 1..)]
    columns: Vec<String>,

    /// Sheet name or 0-based index (default: first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Output SQL file (default: stdout, or auto-generated if --output-folder is used)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Folder where the input spreadsheet lives
    #[arg(short, long)]
    input_folder: Option<PathBuf>,

    /// Folder where output SQL files are saved
    #[arg(short = 'd', long)]
    output_folder: Option<PathBuf>,

    /// Row to use as column names (0-indexed)
    #[arg(long, default_value_t = 0)]
    header: usize,

    /// Number of rows to skip at the start
    #[arg(long, default_value_t = 0)]
    skip_rows: usize,
}

fn main() {
    let cli = Cli::parse();

    // Resolve the input path
    let input_path = if let Some(folder) = &cli.input_folder {
        if !folder.is_dir() {
            eprintln!("Error: {}", ConvertError::FileNotFound(folder.clone()));
            process::exit(2);
        }
        folder.join(&cli.excel_file)
    } else {
        cli.excel_file.clone()
    };
    if !input_path.is_file() {
        eprintln!("Error: {}", ConvertError::FileNotFound(input_path));
        process::exit(2);
    }

    // Resolve the output target
    let target = if let Some(folder) = &cli.output_folder {
        match formatter::ensure_output_folder(folder) {
            Ok(true) => eprintln!("Created output folder: {}", folder.display()),
            Ok(false) => {}
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(2);
            }
        }
        match &cli.output {
            Some(name) => OutputTarget::File(folder.join(name)),
            None => {
                let name = formatter::auto_file_name(&input_path, &cli.table);
                eprintln!("Auto-generated output filename: {name}");
                OutputTarget::File(folder.join(name))
            }
        }
    } else if let Some(output) = &cli.output {
        OutputTarget::File(output.clone())
    } else {
        OutputTarget::Stdout
    };

    // Stage 1: Read the workbook
    eprintln!("Reading spreadsheet: {}", input_path.display());
    let options = ReadOptions {
        sheet: cli.sheet.clone(),
        header: cli.header,
        skip_rows: cli.skip_rows,
    };
    let table = match workbook::load_table(&input_path, &options) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    if table.is_empty() {
        eprintln!("Warning: spreadsheet is empty or contains no data.");
        return;
    }

    eprintln!(
        "Found {} rows and {} columns",
        table.rows.len(),
        table.headers.len()
    );
    eprintln!("Columns: {}", table.headers.join(", "));

    // Stage 2: Normalize cells and select columns
    let canonical = columns::normalize_table(&table);
    let selection = match columns::select_columns(&canonical, &cli.columns) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };
    let rows = columns::project_rows(&canonical, &selection);

    // Stage 3: Generate INSERT statements
    let statements = match statement::build_statements(&cli.table, &selection.names, &rows) {
        Ok(statements) => statements,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    // Stage 4: Write output
    if let Err(e) = formatter::write_statements(&target, &statements) {
        eprintln!("Error: {e}");
        process::exit(2);
    }
    if let OutputTarget::File(path) = &target {
        eprintln!();
        eprintln!("Generated {} INSERT statements", statements.len());
        eprintln!("Output saved to: {}", path.display());
    }
}
