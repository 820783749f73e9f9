use crate::error::ConvertError;
use crate::normalizer::raw_cell::RawCell;

/// How to read a worksheet into a table.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Sheet to read: an exact name, else a 0-based index; `None` means the
    /// first sheet.
    pub sheet: Option<String>,
    /// 0-indexed header row, counted after `skip_rows`.
    pub header: usize,
    /// Rows to skip before the header row.
    pub skip_rows: usize,
}

/// One worksheet flattened into header names plus raw data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    /// Name of the sheet the table came from.
    pub name: String,
    /// Header names in sheet order (string form of the header-row cells).
    pub headers: Vec<String>,
    /// Data rows below the header row.
    pub rows: Vec<Vec<RawCell>>,
}

impl SheetTable {
    /// True when there are no data rows to emit.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolve the requested sheet against the workbook's sheet names.
///
/// An exact name match wins; otherwise a selector that parses as a number
/// picks the sheet at that 0-based index, so a sheet literally named `"2"`
/// stays reachable. `None` selects the first sheet.
pub fn resolve_sheet_name(
    names: &[String],
    selector: Option<&str>,
) -> Result<String, ConvertError> {
    let Some(wanted) = selector else {
        return names
            .first()
            .cloned()
            .ok_or_else(|| ConvertError::SheetNotFound("0".to_string()));
    };

    if let Some(name) = names.iter().find(|name| name.as_str() == wanted) {
        return Ok(name.clone());
    }
    if let Ok(index) = wanted.parse::<usize>() {
        if let Some(name) = names.get(index) {
            return Ok(name.clone());
        }
    }
    Err(ConvertError::SheetNotFound(wanted.to_string()))
}

/// Window a sheet's rows into a table.
///
/// Skips `skip_rows` rows, takes the row at `header` (relative to what
/// remains) as the header row, and keeps everything after it as data. A
/// header index beyond the available rows yields an empty table.
pub fn table_from_rows(
    name: String,
    rows: Vec<Vec<RawCell>>,
    options: &ReadOptions,
) -> SheetTable {
    let mut remaining = rows.into_iter().skip(options.skip_rows);
    match remaining.nth(options.header) {
        None => SheetTable {
            name,
            headers: Vec::new(),
            rows: Vec::new(),
        },
        Some(header_row) => SheetTable {
            name,
            headers: header_row.iter().map(header_name).collect(),
            rows: remaining.collect(),
        },
    }
}

/// String form of a header cell.
///
/// Numeric headers take their decimal text form so that `-c` matching works
/// on what the user sees.
fn header_name(cell: &RawCell) -> String {
    match cell {
        RawCell::Empty => String::new(),
        RawCell::Text(text) => text.clone(),
        RawCell::Float(value) => value.to_string(),
        RawCell::Int(value) => value.to_string(),
        RawCell::Bool(value) => value.to_string(),
        RawCell::DateTime(datetime) => datetime.date().to_string(),
    }
}
