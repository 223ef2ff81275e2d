//! Error types for expression parsing.

use thiserror::Error;

/// Failure modes of the expression engine.
///
/// Malformed-but-expected input is always reported through one of these
/// variants, never through a panic. Each variant carries the offending
/// substring where one exists; the first error encountered aborts the
/// whole parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// The value to convert was absent (converter boundary only).
    #[error("cannot parse a missing value")]
    MissingInput,

    /// The trimmed input exceeds the 200-character limit.
    #[error("string is too long")]
    InputTooLong,

    /// No anchor keyword, literal, or calendar pattern at the start.
    #[error("value has no starting date or starting date cannot be parsed")]
    NoStartingDate,

    /// A parenthesized literal was opened but never closed.
    #[error("unmatched '(' in '{0}'")]
    UnmatchedParen(String),

    /// The locale collaborator rejected a parenthesized literal.
    #[error("'{0}' is not a recognizable date or time literal")]
    BadLiteral(String),

    /// A token does not match `(+|-)<digits><marker>`.
    #[error("'{0}' is not a valid time span modifier")]
    InvalidModifier(String),

    /// A modifier magnitude exceeds its unit's numeric width.
    #[error("value {text} is out of range for {width}")]
    MagnitudeOutOfRange {
        /// The signed magnitude text as written.
        text: String,
        /// The numeric width the unit parses with (`i32`, `i64`, or `f64`).
        width: &'static str,
    },

    /// Applying or converting a single modifier left the supported range.
    #[error("value {0} is too large to be used as a time span")]
    SpanTooLarge(String),

    /// Summing modifier durations overflowed the representable total.
    #[error("value expression results in a time span out of valid range")]
    SpanOutOfRange,

    /// Zoned mode requires a trailing `Z` or offset token, and none was left.
    #[error("string does not end with Z or time offset")]
    MissingOffset,

    /// The trailing token is not `Z` and not a well-formed offset.
    #[error("string does not end with Z or time offset: '{0}'")]
    BadOffset(String),

    /// A well-formed offset outside the legal range from UTC.
    #[error("invalid offset '{0}'")]
    OffsetOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, SpanError>;
