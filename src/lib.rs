//! Morse Beacon Firmware Library
//!
//! This library provides the core functionality for a bare-metal Raspberry
//! Pi beacon that blinks a fixed Morse message on one GPIO-connected LED.
//! There is no operating system, no interrupt and no timer: timing is a
//! calibrated busy-wait and the LED is driven by direct register writes.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │        Message Sequencer (beacon)  │  Text Encoder           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     SIGNAL LAYER                             │
//! │             Transmitter: dot  │  dash  │  space              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                        HAL                                   │
//! │      GPIO registers (GPFSEL/GPSET/GPCLR)  │  Busy-wait       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Type-driven design**: a pin cannot be driven before it is configured
//! - **No unsafe in application code**: all unsafe isolated in the HAL
//! - **Functional core, imperative shell**: the signal logic runs on the host
//!   against recorded register writes; only `main.rs` touches hardware
//! - **Compile-time configuration**: board, pin and message are constants

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Hardware Abstraction Layer
///
/// GPIO register interface and busy-wait delay.
pub mod hal;

/// Morse Signalling
///
/// Transmitter, message sequencer and text encoder.
pub mod morse;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::hal::delay::BusyWait;
    pub use crate::hal::gpio::{Gpio, GpioBus, Output, Unconfigured};
    pub use crate::morse::transmitter::{Timing, Transmitter};

    #[cfg(feature = "embedded")]
    pub use crate::hal::gpio::Mmio;

    // Common traits
    pub use embedded_hal::delay::DelayNs;
    pub use embedded_hal::digital::OutputPin;

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
