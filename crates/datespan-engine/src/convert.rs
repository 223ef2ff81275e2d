//! Type-specific value converters over the three entry points.
//!
//! Fixture- and configuration-binding frameworks look converters up by
//! target type and hand each one a raw cell. Only the three date/time
//! converters live here; converters for primitives, enumerations, colors,
//! and identifiers are unrelated 1:1 conversions and belong elsewhere.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};

use crate::clock::Clock;
use crate::error::{Result, SpanError};
use crate::locale::Locale;
use crate::parse::{parse_duration, parse_timestamp, parse_zoned_timestamp};

/// Converts the textual representation of one value type.
///
/// A `None` input is reported as [`SpanError::MissingInput`] rather than
/// panicking, so a missing cell surfaces like any other bad value.
pub trait Converter {
    /// The target value type.
    type Value;

    /// Convert `text` or report why it cannot be converted.
    fn convert(&self, text: Option<&str>) -> Result<Self::Value>;
}

/// Converts timestamp expressions, carrying its own clock and locale.
#[derive(Debug, Clone)]
pub struct TimestampConverter<L, C> {
    pub locale: L,
    pub clock: C,
}

impl<L: Locale, C: Clock> Converter for TimestampConverter<L, C> {
    type Value = NaiveDateTime;

    fn convert(&self, text: Option<&str>) -> Result<NaiveDateTime> {
        let text = text.ok_or(SpanError::MissingInput)?;
        parse_timestamp(&self.locale, text, &self.clock)
    }
}

/// Converts zoned timestamp expressions.
#[derive(Debug, Clone)]
pub struct ZonedTimestampConverter<L, C> {
    pub locale: L,
    pub clock: C,
}

impl<L: Locale, C: Clock> Converter for ZonedTimestampConverter<L, C> {
    type Value = DateTime<FixedOffset>;

    fn convert(&self, text: Option<&str>) -> Result<DateTime<FixedOffset>> {
        let text = text.ok_or(SpanError::MissingInput)?;
        parse_zoned_timestamp(&self.locale, text, &self.clock)
    }
}

/// Converts duration expressions; needs neither clock nor locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationConverter;

impl Converter for DurationConverter {
    type Value = Duration;

    fn convert(&self, text: Option<&str>) -> Result<Duration> {
        let text = text.ok_or(SpanError::MissingInput)?;
        parse_duration(text)
    }
}
