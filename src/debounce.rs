//! Two-state press/release state machine.
//!
//! The press edge is reported immediately. The release is only accepted after
//! the caller has waited out the debounce interval and sampled the line again,
//! so contact chatter on release never shows up as a second press.

/// Latched state of a debounced input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released. The next active sample is reported as a press.
    #[default]
    Idle,
    /// A press has been reported and its release is not yet confirmed.
    Pressed,
}

/// What the caller has to do with a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sample {
    /// New press. Report `true`.
    Edge,
    /// Still pressed, edge already reported.
    Held,
    /// Released and unlocked.
    Idle,
    /// Inactive while locked. Wait for the debounce interval, sample again and
    /// pass the result to [`Debouncer::confirm_release`].
    ConfirmRelease,
}

impl Sample {
    /// Returns true if this sample is a newly reported press.
    #[inline]
    pub fn is_edge(self) -> bool {
        self == Sample::Edge
    }
}

/// Edge detector with a debounced release.
///
/// Holds no I/O and no timing; the owner samples the line and performs the
/// wait.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    state: ButtonState,
}

impl Debouncer {
    /// Creates an idle debouncer.
    pub const fn new() -> Self {
        Self {
            state: ButtonState::Idle,
        }
    }

    /// Feeds one active/inactive sample.
    pub fn sample(&mut self, active: bool) -> Sample {
        match (self.state, active) {
            (ButtonState::Idle, true) => {
                self.state = ButtonState::Pressed;
                Sample::Edge
            }
            (ButtonState::Idle, false) => Sample::Idle,
            (ButtonState::Pressed, true) => Sample::Held,
            (ButtonState::Pressed, false) => Sample::ConfirmRelease,
        }
    }

    /// Finishes a release check with the sample taken after the wait.
    ///
    /// Unlocks only if the line is still inactive. An active sample is a bounce
    /// and keeps the press latched. Returns the resulting state.
    pub fn confirm_release(&mut self, active: bool) -> ButtonState {
        if !active {
            self.state = ButtonState::Idle;
        }
        self.state
    }

    /// Returns the current state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns true while a reported press has not been confirmed released.
    pub fn is_locked(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    /// Forces the debouncer back to idle.
    pub fn reset(&mut self) {
        self.state = ButtonState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_active_reports_edge_and_locks() {
        let mut debouncer = Debouncer::new();

        assert_eq!(debouncer.sample(true), Sample::Edge);
        assert!(debouncer.is_locked());
    }

    #[test]
    fn held_line_is_level_not_edge() {
        let mut debouncer = Debouncer::new();

        assert!(debouncer.sample(true).is_edge());
        assert_eq!(debouncer.sample(true), Sample::Held);
        assert_eq!(debouncer.sample(true), Sample::Held);
    }

    #[test]
    fn idle_inactive_stays_idle() {
        let mut debouncer = Debouncer::new();

        assert_eq!(debouncer.sample(false), Sample::Idle);
        assert_eq!(debouncer.state(), ButtonState::Idle);
    }

    #[test]
    fn release_requires_confirmation() {
        let mut debouncer = Debouncer::new();
        debouncer.sample(true);

        assert_eq!(debouncer.sample(false), Sample::ConfirmRelease);
        // Nothing changes until the confirmation sample arrives
        assert!(debouncer.is_locked());

        assert_eq!(debouncer.confirm_release(false), ButtonState::Idle);
        assert!(debouncer.sample(true).is_edge());
    }

    #[test]
    fn bounce_during_confirmation_keeps_lock() {
        let mut debouncer = Debouncer::new();
        debouncer.sample(true);
        debouncer.sample(false);

        assert_eq!(debouncer.confirm_release(true), ButtonState::Pressed);
        assert_eq!(debouncer.sample(true), Sample::Held);
    }

    #[test]
    fn reset_unlocks() {
        let mut debouncer = Debouncer::new();
        debouncer.sample(true);
        debouncer.reset();

        assert_eq!(debouncer.state(), ButtonState::Idle);
        assert!(debouncer.sample(true).is_edge());
    }
}
