//! Blocking debounced push button.
//!
//! Provides [`Button`], which turns a mechanically noisy digital line into a
//! clean, edge-triggered "was this pressed" signal, plus a stopwatch tied to the
//! same object for measuring hold times.

use embedded_hal::delay::DelayNs;

use crate::config::ButtonConfig;
use crate::debounce::{ButtonState, Debouncer, Sample};
use crate::line::{DigitalLine, Input};
use crate::stopwatch::Stopwatch;
use crate::time::{TimeInstant, TimeSource, delay_micros};

/// Everything a debounced button holds except its delay.
///
/// Shared by [`Button`] and [`AsyncButton`](crate::AsyncButton), which only
/// differ in how they wait out the release check.
pub(crate) struct ButtonCore<'t, I: TimeInstant, L: DigitalLine, T: TimeSource<I>> {
    input: Input<L>,
    time_source: &'t T,
    debounce: I::Duration,
    debouncer: Debouncer,
    stopwatch: Stopwatch<I>,
}

impl<'t, I: TimeInstant, L: DigitalLine, T: TimeSource<I>> ButtonCore<'t, I, L, T> {
    pub(crate) fn new(line: L, config: ButtonConfig<I::Duration>, time_source: &'t T) -> Self {
        Self {
            input: Input::new(line, config.pull),
            time_source,
            debounce: config.debounce,
            debouncer: Debouncer::new(),
            stopwatch: Stopwatch::started_at(time_source.now()),
        }
    }

    /// Reads the line and feeds it to the debouncer.
    pub(crate) fn sample(&mut self) -> Sample {
        let active = self.input.read();
        let sample = self.debouncer.sample(active);
        if sample.is_edge() {
            debug!("Button pressed");
        }
        sample
    }

    /// Debounce wait in the `u32` microseconds `DelayNs::delay_us` takes.
    pub(crate) fn release_wait_us(&self) -> u32 {
        delay_micros(self.debounce)
    }

    /// Samples again after the release wait and unlocks if still inactive.
    pub(crate) fn confirm_release(&mut self) {
        let active = self.input.read();
        match self.debouncer.confirm_release(active) {
            ButtonState::Idle => trace!("Button release confirmed"),
            ButtonState::Pressed => trace!("Button bounced during release check"),
        }
    }

    pub(crate) fn reset_timing(&mut self) {
        self.stopwatch.reset(self.time_source.now());
    }

    pub(crate) fn elapsed(&self) -> I::Duration {
        self.stopwatch.elapsed(self.time_source.now())
    }

    pub(crate) fn is_active(&mut self) -> bool {
        self.input.read()
    }

    pub(crate) fn state(&self) -> ButtonState {
        self.debouncer.state()
    }

    pub(crate) fn debounce(&self) -> I::Duration {
        self.debounce
    }

    pub(crate) fn input(&self) -> &Input<L> {
        &self.input
    }

    pub(crate) fn into_line(self) -> L {
        self.input.into_inner()
    }
}

/// Debounced, edge-triggered digital input with a blocking release check.
///
/// [`poll`](Button::poll) reports `true` once per press. Presses are reported
/// on the first active sample; releases are confirmed by blocking for the
/// debounce interval and sampling again. The wait is paid once per release,
/// so polling while the button is held stays cheap.
///
/// `poll` takes `&mut self` and performs no internal synchronization. Share a
/// button between tasks only behind your own mutex.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - Digital line implementation type
/// * `T` - Time source implementation type
/// * `D` - Blocking delay implementation type
pub struct Button<'t, I: TimeInstant, L: DigitalLine, T: TimeSource<I>, D: DelayNs> {
    core: ButtonCore<'t, I, L, T>,
    delay: D,
}

impl<'t, I: TimeInstant, L: DigitalLine, T: TimeSource<I>, D: DelayNs> Button<'t, I, L, T, D> {
    /// Creates an idle button.
    ///
    /// The timing reference starts at construction, so [`elapsed`](Button::elapsed)
    /// is meaningful even before the first [`reset_timing`](Button::reset_timing).
    pub fn new(line: L, config: ButtonConfig<I::Duration>, time_source: &'t T, delay: D) -> Self {
        Self {
            core: ButtonCore::new(line, config, time_source),
            delay,
        }
    }

    /// Samples the line and returns `true` if a new press was detected.
    ///
    /// - Active and unlocked: locks and returns `true`.
    /// - Active and locked: returns `false`.
    /// - Inactive and locked: blocks for the debounce interval, samples again
    ///   and unlocks if still inactive. Returns `false`.
    /// - Inactive and unlocked: returns `false` immediately.
    pub fn poll(&mut self) -> bool {
        match self.core.sample() {
            Sample::Edge => true,
            Sample::Held | Sample::Idle => false,
            Sample::ConfirmRelease => {
                self.delay.delay_us(self.core.release_wait_us());
                self.core.confirm_release();
                false
            }
        }
    }

    /// Moves the timing reference to now.
    pub fn reset_timing(&mut self) {
        self.core.reset_timing();
    }

    /// Returns the time since the last [`reset_timing`](Button::reset_timing),
    /// or since construction if it was never called.
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
