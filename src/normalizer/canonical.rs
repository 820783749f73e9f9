use chrono::NaiveDate;

use crate::normalizer::raw_cell::RawCell;

/// Rendering used for every `CanonicalValue::Date` payload.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text format the original data uses for dates typed into text cells.
const TEXT_DATE_FORMAT: &str = "%d-%m-%Y";

/// A cell containing exactly `?` (after trimming) means "no data".
const NULL_SENTINEL: &str = "?";

/// The normalized form of a cell, independent of the spreadsheet type it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalValue {
    /// No data: a missing cell, empty text, or the `"?"` sentinel.
    Null,
    /// Text content, kept verbatim.
    Text(String),
    /// Numeric content as decimal text, without locale grouping separators.
    Number(String),
    /// Calendar date as `YYYY-MM-DD`; any time-of-day is already discarded.
    Date(String),
}

impl CanonicalValue {
    /// True when the value carries no data.
    pub fn is_null(&self) -> bool {
        matches!(self, CanonicalValue::Null)
    }
}

/// Resolve a raw cell into its canonical form.
///
/// Rules:
/// - missing cells, text that is empty after trimming, the `"?"` sentinel,
///   and NaN numerics map to `Null`
/// - date and timestamp cells map to `Date` as `YYYY-MM-DD`
/// - text whose trimmed form matches `DD-MM-YYYY` is reinterpreted as a date
/// - numeric cells map to `Number` in decimal text form
/// - everything else, including non-finite numerics, degrades to `Text`
///
/// Never fails: a cell the rules cannot place becomes best-effort text.
pub fn normalize(raw: &RawCell) -> CanonicalValue {
    match raw {
        RawCell::Empty => CanonicalValue::Null,
        RawCell::Text(text) => normalize_text(text),
        RawCell::Float(value) => normalize_float(*value),
        RawCell::Int(value) => CanonicalValue::Number(value.to_string()),
        RawCell::Bool(value) => CanonicalValue::Text(value.to_string()),
        RawCell::DateTime(datetime) => {
            CanonicalValue::Date(datetime.date().format(DATE_FORMAT).to_string())
        }
    }
}

/// Normalize a text cell.
///
/// Only the emptiness, sentinel, and date checks look at the trimmed form;
/// text that stays text keeps its original whitespace.
fn normalize_text(text: &str) -> CanonicalValue {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == NULL_SENTINEL {
        return CanonicalValue::Null;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, TEXT_DATE_FORMAT) {
        return CanonicalValue::Date(date.format(DATE_FORMAT).to_string());
    }
    CanonicalValue::Text(text.to_string())
}

/// Normalize a floating-point cell.
///
/// `f64`'s display form already renders integral values without a fractional
/// part and never uses scientific notation, which is exactly the decimal
/// text the SQL literal needs.
fn normalize_float(value: f64) -> CanonicalValue {
    if value.is_nan() {
        return CanonicalValue::Null;
    }
    if value.is_infinite() {
        return CanonicalValue::Text(value.to_string());
    }
    CanonicalValue::Number(value.to_string())
}
