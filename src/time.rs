//! Time abstraction traits for platform-agnostic timing.
//!
//! The blocking and awaitable delays used to confirm a release are not defined
//! here: buttons take any [`embedded_hal::delay::DelayNs`] or
//! [`embedded_hal_async::delay::DelayNs`] implementation.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds, truncating.
    fn as_millis(&self) -> u64;

    /// Converts duration to microseconds, truncating. Saturates at `u64::MAX`.
    fn as_micros(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Converts milliseconds to scheduler ticks for a tick rate of `tick_hz`.
///
/// Truncates like the RTOS `ms -> ticks` macro. Saturates at `u64::MAX` only
/// when the tick count itself does not fit.
#[inline]
pub fn millis_to_ticks(millis: u64, tick_hz: u32) -> u64 {
    let ticks = u128::from(millis) * u128::from(tick_hz) / 1000;
    u64::try_from(ticks).unwrap_or(u64::MAX)
}

/// Clamps a duration to the `u32` microsecond range accepted by `DelayNs::delay_us`.
#[inline]
pub(crate) fn delay_micros<D: TimeDuration>(duration: D) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}
