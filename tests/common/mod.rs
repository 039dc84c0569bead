//! Shared test infrastructure for debounced-input integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use debounced_input::{
    Button, ButtonConfig, SimulatedLine, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn as_micros(&self) -> u64 {
        self.0.saturating_mul(1000)
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
    sleeps: Cell<u32>,
    slept_micros: Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            sleeps: Cell::new(0),
            slept_micros: Cell::new(0),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }

    /// Number of delays performed through a `MockDelay` on this clock
    pub fn sleeps(&self) -> u32 {
        self.sleeps.get()
    }

    /// Total time requested through `MockDelay`, in microseconds
    pub fn slept_micros(&self) -> u64 {
        self.slept_micros.get()
    }

    // The clock itself only advances in whole milliseconds
    fn sleep_us(&self, micros: u64) {
        self.sleeps.set(self.sleeps.get() + 1);
        self.slept_micros.set(self.slept_micros.get() + micros);
        self.advance(TestDuration(micros / 1000));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances the mock clock instead of sleeping
pub struct MockDelay<'a> {
    clock: &'a MockTimeSource,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self { clock }
    }
}

impl embedded_hal::delay::DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.sleep_us(u64::from(ns) / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.sleep_us(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.sleep_us(u64::from(ms) * 1_000);
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.clock.sleep_us(u64::from(ns) / 1_000);
    }

    async fn delay_us(&mut self, us: u32) {
        self.clock.sleep_us(u64::from(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.clock.sleep_us(u64::from(ms) * 1_000);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const DEBOUNCE: TestDuration = TestDuration(20);

pub type TestLine = SimulatedLine<32>;

pub type TestButton<'a> = Button<'a, TestInstant, TestLine, MockTimeSource, MockDelay<'a>>;

/// Builds a pulled-down line replaying `levels`
pub fn line(levels: &[bool]) -> TestLine {
    SimulatedLine::from_samples(levels).unwrap()
}

/// Builds a blocking button with a 20ms debounce over a scripted line
pub fn button<'a>(clock: &'a MockTimeSource, levels: &[bool]) -> TestButton<'a> {
    Button::new(
        line(levels),
        ButtonConfig::new(DEBOUNCE),
        clock,
        MockDelay::new(clock),
    )
}
