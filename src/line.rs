//! Digital line abstraction and pull-mode aware input.
//!
//! A [`DigitalLine`] only knows how to sample a raw level. [`Input`] composes a
//! line with the [`PullMode`] it was wired for and turns raw levels into
//! active/inactive readings.

use embedded_hal::digital::InputPin;

/// Trait for abstracting a digital input line.
///
/// Implement this for whatever physically provides the level (a GPIO pin, a
/// port expander bit, a simulated script). Handle hardware errors internally -
/// this method cannot fail.
pub trait DigitalLine {
    /// Samples the raw electrical level. `true` means high.
    fn is_high(&mut self) -> bool;
}

/// How the line idles when the switch is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullMode {
    /// No pull resistor. Raw level is reported as-is.
    Floating,
    /// Idles high. A pressed switch pulls the line low, so the level is inverted.
    PullUp,
    /// Idles low. A pressed switch drives the line high.
    #[default]
    PullDown,
}

impl PullMode {
    /// Maps a raw level to an active/inactive reading for this wiring.
    #[inline]
    pub fn is_active(self, high: bool) -> bool {
        match self {
            PullMode::PullUp => !high,
            PullMode::PullDown | PullMode::Floating => high,
        }
    }
}

/// A digital line paired with its pull mode.
pub struct Input<L: DigitalLine> {
    line: L,
    pull: PullMode,
}

impl<L: DigitalLine> Input<L> {
    /// Creates an input reading `line` wired with `pull`.
    pub fn new(line: L, pull: PullMode) -> Self {
        Self { line, pull }
    }

    /// Reads the line, inverting the level in [`PullMode::PullUp`].
    ///
    /// Returns `true` when the switch is pressed regardless of wiring.
    #[inline]
    pub fn read(&mut self) -> bool {
        let high = self.line.is_high();
        self.pull.is_active(high)
    }

    /// Reads the raw level without intervention.
    ///
    /// In `PullUp` mode this returns `true` while the switch is released.
    #[inline]
    pub fn read_raw(&mut self) -> bool {
        self.line.is_high()
    }

    /// Returns the pull mode this input was configured with.
    pub fn pull(&self) -> PullMode {
        self.pull
    }

    /// Returns a reference to the underlying line.
    pub fn line(&self) -> &L {
        &self.line
    }

    /// Returns a mutable reference to the underlying line.
    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }

    /// Consumes the input and returns the underlying line.
    pub fn into_inner(self) -> L {
        self.line
    }
}

/// Adapts an `embedded-hal` input pin into a [`DigitalLine`].
///
/// Read errors are treated as a low level.
pub struct HalLine<P: InputPin> {
    pin: P,
}

impl<P: InputPin> HalLine<P> {
    /// Wraps a HAL input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Consumes the adapter and returns the HAL pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> DigitalLine for HalLine<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high,
            Err(_) => {
                warn!("Input pin read failed, treating line as low");
                false
            }
        }
    }
}

/// Errors returned when scripting a [`SimulatedLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Script capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for LineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LineError::CapacityExceeded => write!(f, "simulated line script capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LineError {}

/// A line that replays a scripted sequence of raw levels.
///
/// Each read consumes the next sample. Once the script is exhausted the last
/// sample repeats; an empty script reads low.
///
/// # Type Parameters
/// * `N` - Maximum number of scripted samples
#[derive(Debug, Clone)]
pub struct SimulatedLine<const N: usize> {
    samples: heapless::Vec<bool, N>,
    cursor: usize,
    reads: usize,
}

impl<const N: usize> Default for SimulatedLine<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SimulatedLine<N> {
    /// Creates a line with an empty script.
    pub const fn new() -> Self {
        Self {
            samples: heapless::Vec::new(),
            cursor: 0,
            reads: 0,
        }
    }

    /// Creates a line scripted with `samples`.
    pub fn from_samples(samples: &[bool]) -> Result<Self, LineError> {
        let mut line = Self::new();
        for &sample in samples {
            line.push(sample)?;
        }
        Ok(line)
    }

    /// Appends a raw level to the end of the script.
    pub fn push(&mut self, high: bool) -> Result<(), LineError> {
        self.samples
            .push(high)
            .map_err(|_| LineError::CapacityExceeded)
    }

    /// Returns how many times the line has been read.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Returns the number of scripted samples not yet consumed.
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.cursor
    }
}

impl<const N: usize> DigitalLine for SimulatedLine<N> {
    fn is_high(&mut self) -> bool {
        self.reads += 1;
        match self.samples.get(self.cursor) {
            Some(&high) => {
                self.cursor += 1;
                high
            }
            None => self.samples.last().copied().unwrap_or(false),
        }
    }
}
