use chrono::NaiveDateTime;

/// A spreadsheet cell value as extracted from the workbook, before
/// normalization.
///
/// This is the only cell representation the reader hands to the rest of the
/// pipeline: whatever the spreadsheet library reports is resolved into one of
/// these shapes at the boundary, and `normalize` is the single place that
/// decides what each shape means.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Missing or empty cell.
    Empty,
    /// Plain text content, including the `"?"` no-data sentinel.
    Text(String),
    /// Floating-point numeric cell.
    Float(f64),
    /// Integer numeric cell.
    Int(i64),
    /// Boolean cell.
    Bool(bool),
    /// Date, timestamp, or datetime cell.
    DateTime(NaiveDateTime),
}
