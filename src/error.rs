use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Every variant terminates the run; nothing is retried. Cell-level type
/// ambiguity never reaches this enum: a malformed cell degrades to text in
/// the normalizer instead of failing.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input spreadsheet, or the configured input folder, is missing.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The requested sheet name or index is absent from the workbook.
    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    /// Explicitly requested columns are absent from the header row.
    #[error("columns not found in sheet: {}", .0.join(", "))]
    ColumnNotFound(Vec<String>),

    /// A row's length differs from the selected column count.
    #[error("row has {found} values but {expected} columns were selected")]
    ColumnMismatch {
        /// Number of selected columns.
        expected: usize,
        /// Number of values the row actually carries.
        found: usize,
    },

    /// No columns were selected, explicitly or by auto-detection.
    #[error("no columns to insert: the column selection is empty")]
    EmptyColumnSpec,

    /// The workbook could not be opened or read.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The output folder could not be created.
    #[error("cannot create output folder '{}': {}", .path.display(), .source)]
    CreateOutputFolder {
        /// Folder that was being created.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("cannot write output to '{}': {}", .path.display(), .source)]
    WriteOutput {
        /// File that was being written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
}
