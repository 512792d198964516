/// Utilities for date parsing and formatting
///
/// Backend payloads carry dates either as calendar dates ("2024-03-15") or
/// as ISO-8601 timestamps ("2024-03-15T00:00:00Z"). Forms always work with
/// the calendar date; timestamps are read in UTC.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date or timestamp into the UTC calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    value
        .get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, DATE_INPUT_FORMAT).ok())
}

/// Value for an `<input type="date">`: "2024-03-15T00:00:00Z" -> "2024-03-15".
/// Unparseable input yields an empty string.
pub fn to_date_input(value: &str) -> String {
    parse_date(value)
        .map(date_input)
        .unwrap_or_default()
}

/// Format a date as `YYYY-MM-DD`
pub fn date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// Midnight UTC of the given date as a full ISO timestamp:
/// "2024-03-15" -> "2024-03-15T00:00:00.000Z"
pub fn to_iso_timestamp(value: &str) -> Option<String> {
    let date = parse_date(value)?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Display format M/D/YYYY.
/// Example: "2024-03-15T14:02:26Z" -> "3/15/2024"
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        None => value.to_string(),
    }
}
