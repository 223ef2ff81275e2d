//! The three parsing entry points.
//!
//! All three are pure functions of their input string and supplied
//! collaborators; no shared mutable state is touched during a call, and the
//! clock is sampled at most once. The first error aborts the whole parse.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone};

use crate::anchor::resolve_anchor;
use crate::calendar::apply_modifier;
use crate::clock::Clock;
use crate::duration::accumulate;
use crate::error::{Result, SpanError};
use crate::locale::Locale;
use crate::modifier::parse_modifier;
use crate::offset::parse_offset;
use crate::split::split_tokens;

/// Inputs longer than this after trimming are rejected before any parsing.
const MAX_INPUT_LEN: usize = 200;

/// Parses a timestamp expression: an anchor plus ordered modifiers.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use datespan_engine::{parse_timestamp, FixedClock, IsoLocale};
///
/// let clock = FixedClock(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(15, 30, 0).unwrap(),
/// );
/// let dt = parse_timestamp(&IsoLocale, "TODAY +1D -2h", &clock).unwrap();
/// assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(22, 0, 0).unwrap());
/// ```
///
/// # Errors
///
/// Any [`SpanError`] except the offset variants, which belong to
/// [`parse_zoned_timestamp`].
pub fn parse_timestamp(
    locale: &impl Locale,
    text: &str,
    clock: &impl Clock,
) -> Result<NaiveDateTime> {
    let text = guard_input(text)?;
    let (value, _) = evaluate(locale, text, clock, false)?;
    Ok(value)
}

/// Parses a zoned timestamp expression: anchor, modifiers, and a mandatory
/// trailing `Z` or numeric offset.
///
/// The result combines the offset-naive calendar value with the parsed
/// offset as written; the instant is not re-based to UTC.
///
/// # Examples
///
/// ```
/// use datespan_engine::{parse_zoned_timestamp, IsoLocale, SystemClock};
///
/// let zoned = parse_zoned_timestamp(&IsoLocale, "2024-01-01T00:00 +05:30", &SystemClock).unwrap();
/// assert_eq!(zoned.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
/// ```
///
/// # Errors
///
/// Any [`SpanError`]; a missing trailer is [`SpanError::MissingOffset`].
pub fn parse_zoned_timestamp(
    locale: &impl Locale,
    text: &str,
    clock: &impl Clock,
) -> Result<DateTime<FixedOffset>> {
    let text = guard_input(text)?;
    let (value, offset_token) = evaluate(locale, text, clock, true)?;
    let token = offset_token.ok_or(SpanError::MissingOffset)?;
    let offset = parse_offset(&token)?;
    offset
        .from_local_datetime(&value)
        .single()
        .ok_or(SpanError::OffsetOutOfRange(token))
}

/// Parses a duration expression: modifiers only, no anchor.
///
/// Years and months are the fixed 365-day and 30-day approximations here;
/// there is no calendar awareness in this mode.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use datespan_engine::parse_duration;
///
/// assert_eq!(parse_duration("+1D -12h").unwrap(), Duration::hours(12));
/// assert_eq!(parse_duration("+1Y").unwrap(), Duration::days(365));
/// ```
///
/// # Errors
///
/// [`SpanError::InvalidModifier`] for grammar failures, the overflow
/// variants for magnitudes and totals out of range.
pub fn parse_duration(text: &str) -> Result<Duration> {
    let text = guard_input(text)?;
    let mut modifiers = Vec::new();
    for token in split_tokens(text) {
        modifiers.push(parse_modifier(&token)?);
    }
    accumulate(modifiers.iter())
}

fn guard_input(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.chars().count() > MAX_INPUT_LEN {
        return Err(SpanError::InputTooLong);
    }
    Ok(text)
}

/// Shared timestamp evaluation: anchor, then modifier loop. In zoned mode
/// the splitter's final token is reserved for the offset parser and is
/// never treated as a modifier.
fn evaluate(
    locale: &impl Locale,
    text: &str,
    clock: &impl Clock,
    with_offset: bool,
) -> Result<(NaiveDateTime, Option<String>)> {
    let anchor = resolve_anchor(text, locale, clock)?;
    let rest = text[anchor.consumed..].trim();

    let mut tokens = split_tokens(rest);
    let offset_token = if with_offset { tokens.pop() } else { None };

    let mut value = anchor.value;
    for token in &tokens {
        let modifier = parse_modifier(token)?;
        value = apply_modifier(value, &modifier)?;
    }
    Ok((value, offset_token))
}
