//! Elapsed-time reference point.

use crate::time::TimeInstant;

/// Measures time since an explicitly reset reference instant.
///
/// Always holds a valid reference: it starts at the instant it was created
/// with and only moves on [`reset`](Stopwatch::reset).
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch<I: TimeInstant> {
    reference: I,
}

impl<I: TimeInstant> Stopwatch<I> {
    /// Creates a stopwatch referenced at `now`.
    pub fn started_at(now: I) -> Self {
        Self { reference: now }
    }

    /// Moves the reference point to `now`.
    pub fn reset(&mut self, now: I) {
        self.reference = now;
    }

    /// Returns the time from the reference point to `now`.
    pub fn elapsed(&self, now: I) -> I::Duration {
        now.duration_since(self.reference)
    }

    /// Returns the reference instant.
    pub fn reference(&self) -> I {
        self.reference
    }
}
