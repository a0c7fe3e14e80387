//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the beacon hardware.
//! Board selection, the LED pin, busy-wait calibration, symbol timing and
//! the message itself are centralized here.

use core::fmt;

use crate::types::{Pin, Symbol};

#[cfg(all(feature = "pi3", feature = "pi4"))]
compile_error!("features `pi3` and `pi4` are mutually exclusive");

/// Supported Raspberry Pi board revisions
///
/// Each revision maps its peripherals at a different physical address.
/// Running a build on the wrong board writes to unrelated memory; nothing
/// at runtime can detect it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Board {
    /// Raspberry Pi 3 / 3B+ / Zero 2 W (BCM2837)
    Pi3,
    /// Raspberry Pi 4 / 400 (BCM2711, low-peripheral mode)
    Pi4,
}

impl Board {
    /// All supported revisions
    pub const ALL: [Self; 2] = [Self::Pi3, Self::Pi4];

    /// Offset of the GPIO block from the peripheral base
    pub const GPIO_OFFSET: usize = 0x20_0000;

    /// Physical base address of the peripheral window
    #[must_use]
    pub const fn peripheral_base(self) -> usize {
        match self {
            Self::Pi3 => 0x3F00_0000,
            Self::Pi4 => 0xFE00_0000,
        }
    }

    /// Physical base address of the GPIO register block
    #[must_use]
    pub const fn gpio_base(self) -> usize {
        self.peripheral_base() + Self::GPIO_OFFSET
    }

    /// Human readable board name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi3 => "Raspberry Pi 3",
            Self::Pi4 => "Raspberry Pi 4",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Board {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name());
    }
}

/// Board this build targets (`pi3` feature, otherwise Pi 4)
#[cfg(feature = "pi3")]
pub const BOARD: Board = Board::Pi3;

/// Board this build targets (`pi3` feature, otherwise Pi 4)
#[cfg(not(feature = "pi3"))]
pub const BOARD: Board = Board::Pi4;

/// LED pin (BCM numbering, physical header pin 36)
pub const LED_PIN: Pin = match Pin::new(16) {
    Some(pin) => pin,
    None => panic!("LED pin out of range"),
};

/// Busy-wait calibration: no-op loop iterations per microsecond
///
/// Carried over from the C blinker's delay loop, which was calibrated to
/// roughly 20% at the boot clock. This Rust loop has not been measured
/// against it; any other clock speed or optimization level is arbitrarily
/// wrong.
pub const CYCLES_PER_US: u32 = 6;

/// Dot (short pulse) duration in milliseconds
pub const DOT_MS: u32 = 100;

/// Dash (long pulse) duration in milliseconds
pub const DASH_MS: u32 = 400;

/// Space (silent gap) duration in milliseconds
pub const SPACE_MS: u32 = 800;

/// Text the beacon sends
pub const MESSAGE_TEXT: &str = "jackie";

/// Morse for [`MESSAGE_TEXT`]: `.--- .- -.-. -.- .. .`
pub const MESSAGE: &[Symbol] = {
    use Symbol::{Dash, Dot, Space};
    &[
        Dot, Dash, Dash, Dash, // J
        Space,
        Dot, Dash, // A
        Space,
        Dash, Dot, Dash, Dot, // C
        Space,
        Dash, Dot, Dash, // K
        Space,
        Dot, Dot, // I
        Space,
        Dot, // E
    ]
};
