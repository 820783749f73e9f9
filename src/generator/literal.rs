use crate::normalizer::canonical::CanonicalValue;

/// Render a canonical value as a single SQL literal token.
///
/// Nulls become the bare `NULL` keyword, numbers stay unquoted, and text and
/// dates are single-quoted with embedded quotes doubled. The result is never
/// empty: empty text renders as `''`.
pub fn format_literal(value: &CanonicalValue) -> String {
    match value {
        CanonicalValue::Null => "NULL".to_string(),
        CanonicalValue::Number(number) => number.clone(),
        CanonicalValue::Text(text) | CanonicalValue::Date(text) => quote_string(text),
    }
}

/// Single-quote `text` for SQL, doubling embedded single quotes.
///
/// No other character is escaped; backslashes pass through literally
/// (standard SQL string syntax, not a backslash-escaping dialect).
pub fn quote_string(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
