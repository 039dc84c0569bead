//! `std` backed time source and delay for host simulation.

use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Newtype wrapper for `std::time::Duration` to implement [`TimeDuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StdDuration(pub Duration);

impl TimeDuration for StdDuration {
    const ZERO: Self = StdDuration(Duration::ZERO);

    fn as_millis(&self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }

    fn as_micros(&self) -> u64 {
        u64::try_from(self.0.as_micros()).unwrap_or(u64::MAX)
    }

    fn from_millis(millis: u64) -> Self {
        StdDuration(Duration::from_millis(millis))
    }
}

/// Newtype wrapper for `std::time::Instant` to implement [`TimeInstant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StdInstant(pub Instant);

impl TimeInstant for StdInstant {
    type Duration = StdDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        StdDuration(self.0.saturating_duration_since(earlier.0))
    }
}

/// Monotonic time source backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTimeSource;

impl StdTimeSource {
    /// Creates a new std time source.
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource<StdInstant> for StdTimeSource {
    fn now(&self) -> StdInstant {
        StdInstant(Instant::now())
    }
}

/// Blocking delay that puts the current thread to sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}
