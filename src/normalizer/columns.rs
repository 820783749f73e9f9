use crate::error::ConvertError;
use crate::normalizer::canonical::{normalize, CanonicalValue};
use crate::reader::sheet::SheetTable;

/// A sheet with every cell normalized, ready for column selection and row
/// serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalTable {
    /// Header names in sheet order.
    pub headers: Vec<String>,
    /// Normalized data rows, one value per header.
    pub rows: Vec<Vec<CanonicalValue>>,
}

/// The resolved column selection: names in output order plus their indices
/// into the sheet header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    /// Column names in the order the INSERT statements will use.
    pub names: Vec<String>,
    /// Index of each selected column in the sheet's header row.
    pub indices: Vec<usize>,
}

/// Normalize every cell of the sheet in one pass.
///
/// Column auto-detection and row serialization both read the result, so each
/// cell's ambiguity is resolved exactly once.
pub fn normalize_table(table: &SheetTable) -> CanonicalTable {
    CanonicalTable {
        headers: table.headers.clone(),
        rows: table
            .rows
            .iter()
            .map(|row| row.iter().map(normalize).collect())
            .collect(),
    }
}

/// Resolve the columns the INSERT statements will target.
///
/// With an explicit request, every name must appear among the headers and
/// the requested order is kept; all missing names are reported together.
/// Without one, every column holding at least one non-null cell is selected
/// in sheet order. Duplicate header names resolve to their first occurrence.
pub fn select_columns(
    table: &CanonicalTable,
    requested: &[String],
) -> Result<ColumnSelection, ConvertError> {
    if requested.is_empty() {
        return Ok(columns_with_data(table));
    }

    let mut indices = Vec::with_capacity(requested.len());
    let mut missing = Vec::new();
    for name in requested {
        match table.headers.iter().position(|header| header == name) {
            Some(index) => indices.push(index),
            None => missing.push(name.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(ConvertError::ColumnNotFound(missing));
    }

    Ok(ColumnSelection {
        names: requested.to_vec(),
        indices,
    })
}

/// Project each row onto the selected columns, in selection order.
///
/// Cells beyond the end of a short row count as null.
pub fn project_rows(
    table: &CanonicalTable,
    selection: &ColumnSelection,
) -> Vec<Vec<CanonicalValue>> {
    table
        .rows
        .iter()
        .map(|row| {
            selection
                .indices
                .iter()
                .map(|&index| row.get(index).cloned().unwrap_or(CanonicalValue::Null))
                .collect()
        })
        .collect()
}

/// Columns that contain data: at least one cell normalizing to non-null
/// across all rows.
fn columns_with_data(table: &CanonicalTable) -> ColumnSelection {
    let mut names = Vec::new();
    let mut indices = Vec::new();
    for (index, name) in table.headers.iter().enumerate() {
        let has_data = table
            .rows
            .iter()
            .any(|row| row.get(index).is_some_and(|value| !value.is_null()));
        if has_data {
            names.push(name.clone());
            indices.push(index);
        }
    }
    ColumnSelection { names, indices }
}
