use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};

use crate::normalizer::raw_cell::RawCell;

/// Resolve a calamine cell into the boundary representation.
///
/// Typed date cells become `DateTime`, and ISO datetime text becomes
/// `DateTime` when it carries a calendar date. Duration and error cells have
/// no canonical counterpart and degrade to their text form.
pub fn raw_cell_from(data: &Data) -> RawCell {
    match data {
        Data::Empty => RawCell::Empty,
        Data::String(text) => RawCell::Text(text.clone()),
        Data::Float(value) => RawCell::Float(*value),
        Data::Int(value) => RawCell::Int(*value),
        Data::Bool(value) => RawCell::Bool(*value),
        Data::DateTime(datetime) => match datetime.as_datetime() {
            Some(resolved) => RawCell::DateTime(resolved),
            None => RawCell::Text(datetime.as_f64().to_string()),
        },
        Data::DateTimeIso(text) => match iso_datetime(text) {
            Some(resolved) => RawCell::DateTime(resolved),
            None => RawCell::Text(text.clone()),
        },
        Data::DurationIso(text) => RawCell::Text(text.clone()),
        Data::Error(error) => RawCell::Text(error.to_string()),
    }
}

/// Parse an ISO 8601 datetime string, keeping the time of day when present.
///
/// Date-only strings resolve to midnight. Time-only strings have no
/// calendar date to extract and return `None`.
fn iso_datetime(text: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
