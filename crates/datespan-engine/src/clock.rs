//! Clock capability supplying the current local instant.
//!
//! The engine never reads the system clock directly — the caller passes a
//! [`Clock`] so that `NOW`/`TODAY` anchors stay testable and reproducible.

use chrono::{Local, NaiveDateTime};

/// Source of "now" for `NOW` and `TODAY` anchors.
///
/// Implementations must be safe to share across concurrent parses. Within a
/// single parse the clock is sampled at most once, so an expression anchored
/// at `NOW` sees one instant for its whole evaluation.
pub trait Clock {
    /// The current local wall-clock instant.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant, for tests and reproducible fixture runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
