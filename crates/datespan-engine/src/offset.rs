//! Trailing zone-offset parsing for zoned expressions.

use chrono::FixedOffset;

use crate::error::{Result, SpanError};

/// Legal offset magnitude from UTC, inclusive.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Parses the reserved trailing token: `Z` or `(+|-)?H[:MM]` with 1–2 digit
/// hours and 2-digit minutes.
///
/// Syntax failures and range failures are distinct: `+5:3` is not an offset
/// at all, `+15` is a well-formed offset outside the legal range.
pub(crate) fn parse_offset(token: &str) -> Result<FixedOffset> {
    if token == "Z" {
        return make_offset(token, 0);
    }

    let bad = || SpanError::BadOffset(token.to_string());
    let bytes = token.as_bytes();

    let (negative, mut idx) = match bytes.first() {
        Some(b'+') => (false, 1),
        Some(b'-') => (true, 1),
        _ => (false, 0),
    };

    let hour_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let hour_digits = idx - hour_start;
    if hour_digits == 0 || hour_digits > 2 {
        return Err(bad());
    }
    let hours: i32 = token[hour_start..idx].parse().map_err(|_| bad())?;

    let minutes: i32 = if idx == bytes.len() {
        0
    } else {
        if bytes[idx] != b':' || bytes.len() != idx + 3 {
            return Err(bad());
        }
        let minute_text = &token[idx + 1..];
        if !minute_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        minute_text.parse().map_err(|_| bad())?
    };

    if minutes > 59 {
        return Err(SpanError::OffsetOutOfRange(token.to_string()));
    }

    let mut total = hours * 60 + minutes;
    if negative {
        total = -total;
    }
    make_offset(token, total)
}

fn make_offset(token: &str, minutes: i32) -> Result<FixedOffset> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(SpanError::OffsetOutOfRange(token.to_string()));
    }
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| SpanError::OffsetOutOfRange(token.to_string()))
}
