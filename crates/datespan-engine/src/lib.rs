//! # datespan-engine
//!
//! A compact date/time/duration expression language for human-authored
//! strings: test fixtures, configuration values, data seeding.
//!
//! An expression is an optional anchor (`NOW`, `TODAY`, an explicit
//! `YYYY-MM-DD[THH:MM[:SS]]`, or a parenthesized locale literal), followed by
//! signed unit modifiers applied strictly in written order, and — in zoned
//! mode — a trailing `Z` or numeric UTC offset:
//!
//! ```text
//! TODAY +1M -2h            2024-01-31+1M        NOW+1.5D
//! (6 May 2024) +3D         2024-01-01T00:00Z    +1Y -30m      (duration)
//! ```
//!
//! Calendar units (`Y`, `M`) honor month lengths and leap years in timestamp
//! mode; duration mode uses fixed 365/30-day approximations instead. The
//! caller supplies the clock and the literal-parsing locale, so every parse
//! is a pure, reproducible function of its inputs.
//!
//! ## Modules
//!
//! - [`parse`] — the three entry points: timestamp, zoned timestamp, duration
//! - [`anchor`] — base-instant resolution
//! - [`modifier`] — the unit-modifier grammar and the eight markers
//! - [`clock`] — the clock capability (`NOW`/`TODAY` source)
//! - [`locale`] — parenthesized-literal parsing collaborator
//! - [`convert`] — type-specific value converters over the entry points
//! - [`error`] — error types

pub mod anchor;
pub mod clock;
pub mod convert;
pub mod error;
pub mod locale;
pub mod modifier;
pub mod parse;

mod calendar;
mod duration;
mod offset;
mod split;

pub use anchor::{Anchor, AnchorKind};
pub use clock::{Clock, FixedClock, SystemClock};
pub use convert::{Converter, DurationConverter, TimestampConverter, ZonedTimestampConverter};
pub use error::{Result, SpanError};
pub use locale::{IsoLocale, Locale};
pub use modifier::{Marker, Modifier};
pub use parse::{parse_duration, parse_timestamp, parse_zoned_timestamp};
