//! Resolution of the leading base instant of a timestamp expression.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::clock::Clock;
use crate::error::{Result, SpanError};
use crate::locale::Locale;
use crate::split::SPLITTERS;

/// How the base instant was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnchorKind {
    /// The `NOW` keyword: the clock's current local instant.
    Now,
    /// The `TODAY` keyword: the current instant's date at midnight.
    Today,
    /// A `YYYY-MM-DD{T| }H:MM[:SS]` pattern.
    ExplicitDateTime,
    /// A `YYYY-MM-DD` pattern.
    ExplicitDate,
    /// A parenthesized literal handed to the locale collaborator.
    LocaleLiteral,
}

/// A resolved base instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    /// The base instant all modifiers apply to.
    pub value: NaiveDateTime,
    /// Input bytes the anchor consumed; parsing resumes right after.
    pub consumed: usize,
    /// Which anchor form matched.
    pub kind: AnchorKind,
}

/// Recognizes and consumes the leading anchor of `s` (already trimmed).
///
/// Forms are tried in order, first match wins: keyword, parenthesized
/// literal, date-and-time pattern, date-only pattern. The resolver stops at
/// the first character it cannot consume; trailing modifiers and offsets are
/// someone else's problem. The clock is sampled once at most, only when a
/// keyword matches.
pub(crate) fn resolve_anchor(
    s: &str,
    locale: &impl Locale,
    clock: &impl Clock,
) -> Result<Anchor> {
    if keyword_at_start(s, "TODAY") {
        return Ok(Anchor {
            value: midnight(clock.now()),
            consumed: 5,
            kind: AnchorKind::Today,
        });
    }
    if keyword_at_start(s, "NOW") {
        return Ok(Anchor {
            value: clock.now(),
            consumed: 3,
            kind: AnchorKind::Now,
        });
    }

    if s.starts_with('(') {
        return resolve_literal(s, locale);
    }

    if let Some(anchor) = match_datetime(s) {
        return Ok(anchor);
    }
    if let Some(anchor) = match_date_only(s) {
        return Ok(anchor);
    }

    Err(SpanError::NoStartingDate)
}

fn midnight(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(chrono::NaiveTime::MIN)
}

/// `word` at the start, followed by end of input or a separator.
fn keyword_at_start(s: &str, word: &str) -> bool {
    match s.strip_prefix(word) {
        Some(rest) => rest.is_empty() || rest.starts_with(SPLITTERS),
        None => false,
    }
}

/// `(<text>)` — the text between the first `(` and its matching `)` goes to
/// the locale collaborator; consumption runs through the closing `)`.
fn resolve_literal(s: &str, locale: &impl Locale) -> Result<Anchor> {
    let close = s[1..]
        .find(')')
        .map(|rel| rel + 1)
        .ok_or_else(|| SpanError::UnmatchedParen(s.to_string()))?;
    let literal = s[1..close].trim();
    let value = locale
        .parse_literal(literal)
        .ok_or_else(|| SpanError::BadLiteral(literal.to_string()))?;
    Ok(Anchor {
        value,
        consumed: close + 1,
        kind: AnchorKind::LocaleLiteral,
    })
}

fn all_digits(bytes: &[u8], from: usize, count: usize) -> bool {
    bytes.len() >= from + count && bytes[from..from + count].iter().all(u8::is_ascii_digit)
}

/// The matched run must stop at end of input or at a separator or `Z`, so a
/// malformed tail like `2024-01-0100:00` is not half-consumed.
fn at_boundary(bytes: &[u8], at: usize) -> bool {
    match bytes.get(at) {
        None => true,
        Some(b) => matches!(b, b' ' | b'Z' | b'+' | b'-'),
    }
}

fn parse_number(s: &str, from: usize, count: usize) -> Option<u32> {
    s.get(from..from + count)?.parse().ok()
}

/// `YYYY-MM-DD` at the start of `s`, returning day-month-year and the fixed
/// 10-byte length.
fn match_date_prefix(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if !(all_digits(bytes, 0, 4)
        && bytes.get(4) == Some(&b'-')
        && all_digits(bytes, 5, 2)
        && bytes.get(7) == Some(&b'-')
        && all_digits(bytes, 8, 2))
    {
        return None;
    }
    let year = s.get(0..4)?.parse().ok()?;
    let month = parse_number(s, 5, 2)?;
    let day = parse_number(s, 8, 2)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `YYYY-MM-DD{T| }H:MM[:SS]` with a 1–2 digit hour. Format disambiguation
/// (separator, seconds) comes from the matched text's shape.
fn match_datetime(s: &str) -> Option<Anchor> {
    let date = match_date_prefix(s)?;
    let bytes = s.as_bytes();
    if !matches!(bytes.get(10), Some(b'T' | b' ')) {
        return None;
    }

    // Prefer a two-digit hour, fall back to one.
    let (hour_digits, colon_at) = if all_digits(bytes, 11, 2) && bytes.get(13) == Some(&b':') {
        (2, 13)
    } else if all_digits(bytes, 11, 1) && bytes.get(12) == Some(&b':') {
        (1, 12)
    } else {
        return None;
    };
    if !all_digits(bytes, colon_at + 1, 2) {
        return None;
    }
    let mut end = colon_at + 3;

    let mut second = 0;
    if bytes.get(end) == Some(&b':') && all_digits(bytes, end + 1, 2) {
        second = parse_number(s, end + 1, 2)?;
        end += 3;
    }
    if !at_boundary(bytes, end) {
        return None;
    }

    let hour = parse_number(s, 11, hour_digits)?;
    let minute = parse_number(s, colon_at + 1, 2)?;
    let value = date.and_hms_opt(hour, minute, second)?;
    Some(Anchor {
        value,
        consumed: end,
        kind: AnchorKind::ExplicitDateTime,
    })
}

/// `YYYY-MM-DD` consuming exactly 10 characters.
fn match_date_only(s: &str) -> Option<Anchor> {
    let date = match_date_prefix(s)?;
    if !at_boundary(s.as_bytes(), 10) {
        return None;
    }
    Some(Anchor {
        value: date.and_time(chrono::NaiveTime::MIN),
        consumed: 10,
        kind: AnchorKind::ExplicitDate,
    })
}
