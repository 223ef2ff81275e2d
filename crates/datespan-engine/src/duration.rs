//! Stand-alone duration accumulation (duration-only mode).
//!
//! Every marker maps to a fixed linear unit here: a year is always 365 days
//! and a month always 30, deliberate approximations with no calendar
//! awareness. Modifiers convert independently, then sum in written order.

use chrono::Duration;

use crate::calendar::parse_i64;
use crate::error::{Result, SpanError};
use crate::modifier::{Marker, Modifier};

/// Fixed day counts for the two approximated units.
const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// Converts one modifier to its linear duration.
///
/// A magnitude whose converted value leaves the representable duration range
/// is reported against that modifier; overflow of the running total is the
/// accumulator's distinct error.
pub(crate) fn modifier_duration(modifier: &Modifier) -> Result<Duration> {
    let value = parse_i64(modifier)?;
    let too_large = || SpanError::SpanTooLarge(modifier.magnitude.clone());
    match modifier.marker {
        Marker::Year => value
            .checked_mul(DAYS_PER_YEAR)
            .and_then(Duration::try_days)
            .ok_or_else(too_large),
        Marker::Month => value
            .checked_mul(DAYS_PER_MONTH)
            .and_then(Duration::try_days)
            .ok_or_else(too_large),
        Marker::Day => Duration::try_days(value).ok_or_else(too_large),
        Marker::Hour => Duration::try_hours(value).ok_or_else(too_large),
        Marker::Minute => Duration::try_minutes(value).ok_or_else(too_large),
        Marker::Second => Duration::try_seconds(value).ok_or_else(too_large),
        Marker::Millisecond => Duration::try_milliseconds(value).ok_or_else(too_large),
        Marker::Tick => Ok(Duration::nanoseconds(value)),
    }
}

/// Sums modifier durations in written order.
pub(crate) fn accumulate<'a>(
    modifiers: impl IntoIterator<Item = &'a Modifier>,
) -> Result<Duration> {
    let mut total = Duration::zero();
    for modifier in modifiers {
        let part = modifier_duration(modifier)?;
        total = total.checked_add(&part).ok_or(SpanError::SpanOutOfRange)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::parse_modifier;

    fn convert(token: &str) -> Result<Duration> {
        modifier_duration(&parse_modifier(token).unwrap())
    }

    #[test]
    fn year_and_month_use_fixed_day_counts() {
        assert_eq!(convert("+1Y").unwrap(), Duration::days(365));
        assert_eq!(convert("+1M").unwrap(), Duration::days(30));
        assert_eq!(convert("-2Y").unwrap(), Duration::days(-730));
    }

    #[test]
    fn literal_units_convert_directly() {
        assert_eq!(convert("+1D").unwrap(), Duration::days(1));
        assert_eq!(convert("-3h").unwrap(), Duration::hours(-3));
        assert_eq!(convert("+90m").unwrap(), Duration::minutes(90));
        assert_eq!(convert("+10s").unwrap(), Duration::seconds(10));
        assert_eq!(convert("+250ms").unwrap(), Duration::milliseconds(250));
        assert_eq!(convert("+100t").unwrap(), Duration::nanoseconds(100));
    }

    #[test]
    fn single_modifier_overflow_names_the_magnitude() {
        assert_eq!(
            convert("+99999999999D"),
            Err(SpanError::SpanTooLarge("+99999999999".to_string()))
        );
    }

    #[test]
    fn accumulation_overflow_is_distinct() {
        // Each term converts fine; the running total does not.
        let term = parse_modifier("+9999999999D").unwrap();
        let terms: Vec<_> = std::iter::repeat(term).take(11).collect();
        assert_eq!(accumulate(terms.iter()), Err(SpanError::SpanOutOfRange));
    }

    #[test]
    fn sums_in_order_with_mixed_signs() {
        let modifiers: Vec<_> = ["+1D", "+1D", "-12h"]
            .iter()
            .map(|t| parse_modifier(t).unwrap())
            .collect();
        assert_eq!(accumulate(modifiers.iter()).unwrap(), Duration::hours(36));
    }
}
