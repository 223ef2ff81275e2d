//! The unit-modifier grammar: `(+|-)<1..=11 digits>[.<digits>]<marker>`.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SpanError};

/// Lexical cap on integer digits in a magnitude. Numeric range is checked
/// later per unit, with its own error.
const MAX_MAGNITUDE_DIGITS: usize = 11;

/// The eight recognized unit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Marker {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Tick,
}

/// Marker spellings, longest first so `ms` wins over `m` followed by a
/// stray `s`, and matched case-sensitively (`D` is days, `d` is nothing).
const MARKERS: &[(&str, Marker)] = &[
    ("ms", Marker::Millisecond),
    ("Y", Marker::Year),
    ("M", Marker::Month),
    ("D", Marker::Day),
    ("h", Marker::Hour),
    ("m", Marker::Minute),
    ("s", Marker::Second),
    ("t", Marker::Tick),
];

impl Marker {
    /// Units applied as linear time offsets; these accept fractional
    /// magnitudes in timestamp mode. `Y`/`M` are calendar-aware and `t` is
    /// an integral count, so all three are integer-only.
    pub fn is_linear(self) -> bool {
        matches!(
            self,
            Marker::Day | Marker::Hour | Marker::Minute | Marker::Second | Marker::Millisecond
        )
    }

    /// The textual code, as written in expressions.
    pub fn code(self) -> &'static str {
        match self {
            Marker::Year => "Y",
            Marker::Month => "M",
            Marker::Day => "D",
            Marker::Hour => "h",
            Marker::Minute => "m",
            Marker::Second => "s",
            Marker::Millisecond => "ms",
            Marker::Tick => "t",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One decoded non-anchor, non-offset token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modifier {
    /// Signed magnitude text as written, e.g. `-2` or `+1.5`.
    pub magnitude: String,
    /// The unit the magnitude applies to.
    pub marker: Marker,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.marker)
    }
}

/// Validates one token against the modifier grammar.
///
/// The magnitude keeps its sign and is not numerically interpreted here;
/// the applier and accumulator parse it with their per-unit widths.
pub(crate) fn parse_modifier(token: &str) -> Result<Modifier> {
    let invalid = || SpanError::InvalidModifier(token.to_string());
    let bytes = token.as_bytes();

    if !matches!(bytes.first(), Some(b'+' | b'-')) {
        return Err(invalid());
    }

    let mut idx = 1;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let integer_digits = idx - 1;
    if integer_digits == 0 || integer_digits > MAX_MAGNITUDE_DIGITS {
        return Err(invalid());
    }

    let mut fractional = false;
    if idx < bytes.len() && bytes[idx] == b'.' {
        let fraction_start = idx + 1;
        idx = fraction_start;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx == fraction_start {
            return Err(invalid());
        }
        fractional = true;
    }

    let marker_text = &token[idx..];
    let marker = MARKERS
        .iter()
        .find(|(code, _)| *code == marker_text)
        .map(|(_, marker)| *marker)
        .ok_or_else(invalid)?;

    if fractional && !marker.is_linear() {
        return Err(invalid());
    }

    Ok(Modifier {
        magnitude: token[..idx].to_string(),
        marker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(token: &str) -> Modifier {
        parse_modifier(token).unwrap()
    }

    #[test]
    fn recognizes_all_eight_markers() {
        let cases = [
            ("+1Y", Marker::Year),
            ("+1M", Marker::Month),
            ("+1D", Marker::Day),
            ("+1h", Marker::Hour),
            ("+1m", Marker::Minute),
            ("+1s", Marker::Second),
            ("+1ms", Marker::Millisecond),
            ("+1t", Marker::Tick),
        ];
        for (token, marker) in cases {
            assert_eq!(modifier(token).marker, marker, "{token}");
        }
    }

    #[test]
    fn millisecond_beats_minute_then_second() {
        assert_eq!(modifier("+5ms").marker, Marker::Millisecond);
        assert_eq!(modifier("+5m").marker, Marker::Minute);
        assert_eq!(modifier("+5s").marker, Marker::Second);
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert!(parse_modifier("+1y").is_err());
        assert!(parse_modifier("+1d").is_err());
        assert!(parse_modifier("+1H").is_err());
        assert!(parse_modifier("+1MS").is_err());
    }

    #[test]
    fn sign_is_mandatory() {
        assert!(parse_modifier("1D").is_err());
        assert!(parse_modifier("D").is_err());
    }

    #[test]
    fn magnitude_keeps_its_sign() {
        assert_eq!(modifier("-2h").magnitude, "-2");
        assert_eq!(modifier("+30m").magnitude, "+30");
    }

    #[test]
    fn digit_count_is_capped_at_eleven() {
        assert!(parse_modifier("+99999999999D").is_ok());
        assert!(parse_modifier("+999999999999D").is_err());
    }

    #[test]
    fn fractions_are_linear_only() {
        assert_eq!(modifier("+1.5D").magnitude, "+1.5");
        assert!(parse_modifier("+1.5Y").is_err());
        assert!(parse_modifier("+1.5M").is_err());
        assert!(parse_modifier("+1.5t").is_err());
        assert!(parse_modifier("+1.D").is_err());
    }

    #[test]
    fn error_names_the_token() {
        assert_eq!(
            parse_modifier("+1Z"),
            Err(SpanError::InvalidModifier("+1Z".to_string()))
        );
    }

    #[test]
    fn display_round_trips_the_token() {
        for token in ["+1D", "-2h", "+1.5s", "-300ms", "+7t"] {
            assert_eq!(modifier(token).to_string(), token);
        }
    }
}
