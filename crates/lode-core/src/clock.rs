//! Clock capability.
//!
//! Every date or time stamp written into a vault document flows through this
//! trait, so workflows stay deterministic under test and the vault never
//! reads ambient time.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Today's date stamp, `YYYY-MM-DD`.
    fn date_stamp(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }

    /// Current time-of-day stamp, `HH:MM:SS`.
    fn time_stamp(&self) -> String {
        self.now().format("%H:%M:%S").to_string()
    }
}

/// System wall-clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for tests — always returns the instant it was built with.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A fixed clock at the given RFC 3339 instant. Panics on a bad literal,
    /// which is acceptable in the test setups this exists for.
    #[must_use]
    pub fn at(rfc3339: &str) -> Self {
        Self(
            DateTime::parse_from_rfc3339(rfc3339)
                .expect("valid RFC 3339 literal")
                .with_timezone(&Utc),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
