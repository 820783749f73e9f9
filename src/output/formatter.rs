use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Where the generated statements go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print to standard output.
    Stdout,
    /// Write to the file at this path.
    File(PathBuf),
}

/// Derive the filename used when an output folder is configured without an
/// explicit output name: `{input_stem}_{table}.sql`.
pub fn auto_file_name(input: &Path, table: &str) -> String {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    format!("{stem}_{table}.sql")
}

/// Ensure the output folder exists, creating it and its parents when
/// missing.
///
/// Returns `true` when the folder had to be created.
pub fn ensure_output_folder(path: &Path) -> Result<bool, ConvertError> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path).map_err(|source| ConvertError::CreateOutputFolder {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Write the statements to the resolved target.
///
/// Files get the statements joined with newlines and no trailing newline,
/// written in one scoped operation so the handle closes on every exit path.
/// Stdout gets the same text plus the final newline.
pub fn write_statements(
    target: &OutputTarget,
    statements: &[String],
) -> Result<(), ConvertError> {
    let content = statements.join("\n");
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, &content).map_err(|source| ConvertError::WriteOutput {
                path: path.clone(),
                source,
            })
        }
    }
}
