//! Async debounced push button.
//!
//! Same semantics as [`Button`](crate::Button), but the release check awaits
//! an [`embedded_hal_async::delay::DelayNs`] instead of blocking, so it fits
//! cooperative executors such as Embassy.

use embedded_hal_async::delay::DelayNs;

use crate::button::ButtonCore;
use crate::config::ButtonConfig;
use crate::debounce::{ButtonState, Sample};
use crate::line::{DigitalLine, Input};
use crate::time::{TimeInstant, TimeSource};

/// Debounced, edge-triggered digital input with an awaitable release check.
///
/// The only suspension point is the release confirmation inside
/// [`poll`](AsyncButton::poll). It is not cancellation safe: dropping the
/// future mid-wait leaves the press latched, and the next `poll` starts a
/// fresh release check.
pub struct AsyncButton<'t, I: TimeInstant, L: DigitalLine, T: TimeSource<I>, D: DelayNs> {
    core: ButtonCore<'t, I, L, T>,
    delay: D,
}

impl<'t, I: TimeInstant, L: DigitalLine, T: TimeSource<I>, D: DelayNs>
    AsyncButton<'t, I, L, T, D>
{
    /// Creates an idle button with its timing reference at construction.
    pub fn new(line: L, config: ButtonConfig<I::Duration>, time_source: &'t T, delay: D) -> Self {
        Self {
            core: ButtonCore::new(line, config, time_source),
            delay,
        }
    }

    /// Samples the line and returns `true` if a new press was detected.
    ///
    /// Suspends for the debounce interval only while confirming a release.
    pub async fn poll(&mut self) -> bool {
        match self.core.sample() {
            Sample::Edge => true,
            Sample::Held | Sample::Idle => false,
            Sample::ConfirmRelease => {
                self.delay.delay_us(self.core.release_wait_us()).await;
                self.core.confirm_release();
                false
            }
        }
    }

    /// Moves the timing reference to now.
    pub fn reset_timing(&mut self) {
        self.core.reset_timing();
    }

    /// Returns the time since the last reset, or since construction.
    pub fn elapsed(&self) -> I::Duration {
        self.core.elapsed()
    }

    /// Reads the current active level without touching the latch.
    pub fn is_active(&mut self) -> bool {
        self.core.is_active()
    }

    /// Returns the latched state.
    pub fn state(&self) -> ButtonState {
        self.core.state()
    }

    /// Returns true while a reported press has not been confirmed released.
    pub fn is_locked(&self) -> bool {
        self.core.state() == ButtonState::Pressed
    }

    /// Returns the configured debounce interval.
    pub fn debounce(&self) -> I::Duration {
        self.core.debounce()
    }

    /// Returns the pull-mode aware input.
    pub fn input(&self) -> &Input<L> {
        self.core.input()
    }

    /// Consumes the button and returns the line and delay.
    pub fn release(self) -> (L, D) {
        (self.core.into_line(), self.delay)
    }
}
