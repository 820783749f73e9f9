use std::path::Path;

use calamine::{open_workbook_auto, Reader};

use crate::error::ConvertError;
use crate::normalizer::raw_cell::RawCell;
use crate::reader::cells::raw_cell_from;
use crate::reader::sheet::{self, ReadOptions, SheetTable};

/// Open the workbook at `path` and load the selected sheet as a table.
///
/// The caller is expected to have checked that the file exists; any open or
/// read failure surfaces as a workbook error. A workbook with no sheets has
/// nothing to select and reports sheet-not-found.
pub fn load_table(path: &Path, options: &ReadOptions) -> Result<SheetTable, ConvertError> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = sheet::resolve_sheet_name(&sheet_names, options.sheet.as_deref())?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let rows: Vec<Vec<RawCell>> = range
        .rows()
        .map(|row| row.iter().map(raw_cell_from).collect())
        .collect();

    Ok(sheet::table_from_rows(sheet_name, rows, options))
}
