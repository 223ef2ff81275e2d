//! Ordered application of modifiers to a running timestamp.
//!
//! Year and Month mutate calendar fields (variable month lengths, leap
//! years, month-end clamping); smaller units add linear offsets. Application
//! order is the written order and is semantically significant —
//! `2024-01-30 +1D+1M` and `2024-01-30 +1M+1D` land on different days.

use std::num::IntErrorKind;

use chrono::{Duration, Months, NaiveDateTime};

use crate::error::{Result, SpanError};
use crate::modifier::{Marker, Modifier};

/// Applies one modifier to `dt`.
///
/// Numeric width in the magnitude parse is per unit: `i32` for Year/Month,
/// `f64` for the linear units, `i64` for Tick. Overflow in that parse and
/// overflow of the resulting timestamp are reported as distinct errors;
/// nothing wraps or clamps.
pub(crate) fn apply_modifier(dt: NaiveDateTime, modifier: &Modifier) -> Result<NaiveDateTime> {
    let too_large = || SpanError::SpanTooLarge(modifier.magnitude.clone());
    match modifier.marker {
        Marker::Year => {
            let years = parse_i32(modifier)?;
            let months = years.checked_mul(12).ok_or_else(too_large)?;
            shift_months(dt, months).ok_or_else(too_large)
        }
        Marker::Month => {
            let months = parse_i32(modifier)?;
            shift_months(dt, months).ok_or_else(too_large)
        }
        Marker::Day => apply_linear(dt, modifier, 86_400_000.0),
        Marker::Hour => apply_linear(dt, modifier, 3_600_000.0),
        Marker::Minute => apply_linear(dt, modifier, 60_000.0),
        Marker::Second => apply_linear(dt, modifier, 1_000.0),
        Marker::Millisecond => apply_linear(dt, modifier, 1.0),
        Marker::Tick => {
            let ticks = parse_i64(modifier)?;
            dt.checked_add_signed(Duration::nanoseconds(ticks))
                .ok_or_else(too_large)
        }
    }
}

/// Adds a fractional-capable magnitude as a linear offset, rounded to the
/// nearest millisecond.
fn apply_linear(
    dt: NaiveDateTime,
    modifier: &Modifier,
    millis_per_unit: f64,
) -> Result<NaiveDateTime> {
    let too_large = || SpanError::SpanTooLarge(modifier.magnitude.clone());
    let value = parse_f64(modifier)?;
    let millis = (value * millis_per_unit).round();
    if !millis.is_finite() || millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(too_large());
    }
    let offset = Duration::try_milliseconds(millis as i64).ok_or_else(too_large)?;
    dt.checked_add_signed(offset).ok_or_else(too_large)
}

/// Calendar-aware month shift with month-end clamping, in either direction.
fn shift_months(dt: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    if months >= 0 {
        dt.checked_add_months(Months::new(months as u32))
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

pub(crate) fn parse_i32(modifier: &Modifier) -> Result<i32> {
    modifier
        .magnitude
        .parse()
        .map_err(|e: std::num::ParseIntError| int_error(modifier, e.kind(), "i32"))
}

pub(crate) fn parse_i64(modifier: &Modifier) -> Result<i64> {
    modifier
        .magnitude
        .parse()
        .map_err(|e: std::num::ParseIntError| int_error(modifier, e.kind(), "i64"))
}

fn int_error(modifier: &Modifier, kind: &IntErrorKind, width: &'static str) -> SpanError {
    match kind {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SpanError::MagnitudeOutOfRange {
            text: modifier.magnitude.clone(),
            width,
        },
        _ => SpanError::InvalidModifier(modifier.to_string()),
    }
}

fn parse_f64(modifier: &Modifier) -> Result<f64> {
    let value: f64 = modifier
        .magnitude
        .parse()
        .map_err(|_| SpanError::InvalidModifier(modifier.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SpanError::MagnitudeOutOfRange {
            text: modifier.magnitude.clone(),
            width: "f64",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::parse_modifier;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn apply(dt: NaiveDateTime, token: &str) -> Result<NaiveDateTime> {
        apply_modifier(dt, &parse_modifier(token).unwrap())
    }

    #[test]
    fn month_addition_clamps_to_month_end() {
        // Leap year: Jan 31 + 1M is Feb 29, not Jan 31 + 30 days.
        assert_eq!(
            apply(at(2024, 1, 31, 0, 0, 0), "+1M").unwrap(),
            at(2024, 2, 29, 0, 0, 0)
        );
        assert_eq!(
            apply(at(2023, 1, 31, 0, 0, 0), "+1M").unwrap(),
            at(2023, 2, 28, 0, 0, 0)
        );
    }

    #[test]
    fn year_addition_clamps_leap_day() {
        assert_eq!(
            apply(at(2024, 2, 29, 12, 0, 0), "+1Y").unwrap(),
            at(2025, 2, 28, 12, 0, 0)
        );
        assert_eq!(
            apply(at(2024, 2, 29, 12, 0, 0), "+4Y").unwrap(),
            at(2028, 2, 29, 12, 0, 0)
        );
    }

    #[test]
    fn negative_calendar_shifts() {
        assert_eq!(
            apply(at(2024, 3, 31, 0, 0, 0), "-1M").unwrap(),
            at(2024, 2, 29, 0, 0, 0)
        );
        assert_eq!(
            apply(at(2024, 1, 1, 0, 0, 0), "-1Y").unwrap(),
            at(2023, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn linear_units_accept_fractions() {
        assert_eq!(
            apply(at(2024, 1, 1, 0, 0, 0), "+1.5D").unwrap(),
            at(2024, 1, 2, 12, 0, 0)
        );
        assert_eq!(
            apply(at(2024, 1, 1, 0, 0, 0), "-0.5h").unwrap(),
            at(2023, 12, 31, 23, 30, 0)
        );
    }

    #[test]
    fn ticks_are_nanoseconds() {
        let base = at(2024, 1, 1, 0, 0, 0);
        let shifted = apply(base, "+1500t").unwrap();
        assert_eq!((shifted - base).num_nanoseconds(), Some(1500));
    }

    #[test]
    fn application_order_is_significant() {
        let base = at(2024, 1, 30, 0, 0, 0);
        let day_then_month = apply(apply(base, "+1D").unwrap(), "+1M").unwrap();
        let month_then_day = apply(apply(base, "+1M").unwrap(), "+1D").unwrap();
        assert_eq!(day_then_month, at(2024, 2, 29, 0, 0, 0));
        assert_eq!(month_then_day, at(2024, 3, 1, 0, 0, 0));
        assert_ne!(day_then_month, month_then_day);
    }

    #[test]
    fn year_magnitude_past_i32_is_an_overflow_error() {
        assert_eq!(
            apply(at(2024, 1, 1, 0, 0, 0), "+99999999999Y"),
            Err(SpanError::MagnitudeOutOfRange {
                text: "+99999999999".to_string(),
                width: "i32",
            })
        );
    }

    #[test]
    fn out_of_range_results_do_not_wrap() {
        // Parses as i32, overflows when scaled to months.
        assert_eq!(
            apply(at(2024, 1, 1, 0, 0, 0), "+2000000000Y"),
            Err(SpanError::SpanTooLarge("+2000000000".to_string()))
        );
        // Parses as i32 but pushes the date past the calendar range.
        assert_eq!(
            apply(at(2024, 1, 1, 0, 0, 0), "+300000Y"),
            Err(SpanError::SpanTooLarge("+300000".to_string()))
        );
        assert_eq!(
            apply(at(2024, 1, 1, 0, 0, 0), "+99999999999D"),
            Err(SpanError::SpanTooLarge("+99999999999".to_string()))
        );
    }
}
