use crate::error::ConvertError;
use crate::generator::row::serialize_row;
use crate::normalizer::canonical::CanonicalValue;

/// Build one INSERT statement per row against `table`.
///
/// Table and column names are interpolated verbatim, with no identifier
/// quoting or escaping: callers must supply trusted identifiers. Zero rows
/// produce an empty list, not an error.
pub fn build_statements(
    table: &str,
    columns: &[String],
    rows: &[Vec<CanonicalValue>],
) -> Result<Vec<String>, ConvertError> {
    if columns.is_empty() {
        return Err(ConvertError::EmptyColumnSpec);
    }

    let column_list = columns.join(", ");
    let mut statements = Vec::with_capacity(rows.len());
    for row in rows {
        let values = serialize_row(row, columns.len())?;
        statements.push(format!(
            "INSERT INTO {table} ({column_list}) VALUES {values};"
        ));
    }
    Ok(statements)
}
