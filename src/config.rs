//! Button configuration.

use crate::line::PullMode;
use crate::time::TimeDuration;

/// Default minimum stable-inactive time before a release is confirmed.
pub const DEFAULT_DEBOUNCE_MS: u64 = 20;

/// Construction parameters for a debounced button.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig<D> {
    /// How long the line must stay inactive before a release is confirmed.
    pub debounce: D,

    /// Wiring of the line.
    pub pull: PullMode,
}

impl<D> ButtonConfig<D> {
    /// Creates a configuration with the given debounce interval, pulled low.
    pub const fn new(debounce: D) -> Self {
        Self {
            debounce,
            pull: PullMode::PullDown,
        }
    }

    /// Sets the pull mode.
    pub fn with_pull(mut self, pull: PullMode) -> Self {
        self.pull = pull;
        self
    }
}

impl<D: TimeDuration> Default for ButtonConfig<D> {
    fn default() -> Self {
        Self::new(D::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
