// src/formatting/date.rs
//! Publication-date formatting in the site's fixed locale.

use crate::error::AppError;
use chrono::{DateTime, Datelike, NaiveDate};

/// Brazilian-Portuguese month abbreviations, the site's fixed locale.
const PT_BR_MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Render an ISO 8601 date as `dd Mon yyyy`, e.g. `05 jan 2023`.
///
/// Accepts RFC 3339 date-times (what the source delivers) and bare
/// `YYYY-MM-DD` dates. Pure; fails with `InvalidDate` on anything else,
/// and no fallback date is ever substituted.
pub fn format_publication_date(iso: &str) -> Result<String, AppError> {
    let date = parse_date(iso).ok_or_else(|| AppError::InvalidDate(iso.to_string()))?;

    let month = PT_BR_MONTH_ABBREVIATIONS[date.month0() as usize];
    Ok(format!("{:02} {} {}", date.day(), month, date.year()))
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }
    // The source emits `+0000` offsets, which RFC 3339 rejects.
    if let Ok(datetime) = DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(datetime.date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
