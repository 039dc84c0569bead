#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: Debounced, edge-triggered input that blocks briefly to confirm releases
//! - **`AsyncButton`**: The same input with an awaitable release check
//! - **`ButtonConfig`**: Debounce interval and pull mode for a button
//! - **`DigitalLine`**: Trait to implement for your input hardware
//! - **`Input`**: A line paired with its `PullMode`, reporting active/inactive
//! - **`HalLine`**: Adapter for any `embedded-hal` `InputPin`
//! - **`SimulatedLine`**: Scripted line for host simulation and tests
//! - **`Debouncer`**: The underlying two-state press/release machine
//! - **`TimeSource`**: Trait to implement for your monotonic clock
//!
//! Delays come from `embedded-hal` (`DelayNs`) and `embedded-hal-async`, so any
//! HAL or executor timer can drive the release check.

#[macro_use]
mod fmt;

pub mod async_button;
pub mod button;
pub mod config;
pub mod debounce;
pub mod line;
pub mod stopwatch;
pub mod time;

#[cfg(feature = "std")]
pub mod std_time;

pub use async_button::AsyncButton;
pub use button::Button;
pub use config::{ButtonConfig, DEFAULT_DEBOUNCE_MS};
pub use debounce::{ButtonState, Debouncer, Sample};
pub use line::{DigitalLine, HalLine, Input, LineError, PullMode, SimulatedLine};
pub use stopwatch::Stopwatch;
pub use time::{TimeDuration, TimeInstant, TimeSource, millis_to_ticks};
