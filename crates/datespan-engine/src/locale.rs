//! Locale-aware parsing of parenthesized date literals.

use chrono::{NaiveDate, NaiveDateTime};

/// Parses free-form date/time literal text, as found between parentheses in
/// an expression such as `(2024-05-06 17:00) +3D`.
///
/// The engine itself only understands the fixed `YYYY-MM-DD` shapes; text
/// wrapped in parentheses is delegated here so callers can plug in their own
/// locale conventions (day-first dates, month names, and so on).
pub trait Locale {
    /// Parse literal text to a local datetime, or `None` if unrecognized.
    fn parse_literal(&self, text: &str) -> Option<NaiveDateTime>;
}

/// Datetime formats [`IsoLocale`] tries, most specific first.
const LITERAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// ISO-8601-flavoured literal parsing.
///
/// Accepts a small set of unambiguous year-first formats; a bare date
/// resolves to midnight. Callers needing regional formats supply their own
/// [`Locale`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoLocale;

impl Locale for IsoLocale {
    fn parse_literal(&self, text: &str) -> Option<NaiveDateTime> {
        for format in LITERAL_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
                return Some(dt);
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)
    }
}
