use crate::error::ConvertError;
use crate::generator::literal::format_literal;
use crate::normalizer::canonical::CanonicalValue;

/// Serialize one row into a parenthesized SQL value list.
///
/// The length check against the selected column count runs before any value
/// is formatted, so a mismatched row never produces partial output.
pub fn serialize_row(
    row: &[CanonicalValue],
    column_count: usize,
) -> Result<String, ConvertError> {
    if row.len() != column_count {
        return Err(ConvertError::ColumnMismatch {
            expected: column_count,
            found: row.len(),
        });
    }

    let literals: Vec<String> = row.iter().map(format_literal).collect();
    Ok(format!("({})", literals.join(", ")))
}
