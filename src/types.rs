//! Shared types used across the beacon firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

/// BCM GPIO pin number with validation
///
/// Carries the register geometry every GPIO write needs: which
/// function-select register holds the pin's 3-bit field and where,
/// and which set/clear bank and bit drive its level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pin(u8);

impl Pin {
    /// Highest GPIO number present on both BCM2837 and BCM2711
    pub const MAX: u8 = 53;

    /// Pins sharing one function-select register
    pub const PINS_PER_FSEL: u8 = 10;

    /// Width of one function-select field in bits
    pub const FSEL_FIELD_BITS: u8 = 3;

    /// Create a pin from its BCM number, returns None if out of range
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number <= Self::MAX {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Get the BCM pin number
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Index of the `GPFSELn` register holding this pin's function field
    #[must_use]
    pub const fn fsel_index(self) -> usize {
        (self.0 / Self::PINS_PER_FSEL) as usize
    }

    /// Bit position of this pin's function field within its `GPFSELn`
    #[must_use]
    pub const fn fsel_shift(self) -> u32 {
        ((self.0 % Self::PINS_PER_FSEL) * Self::FSEL_FIELD_BITS) as u32
    }

    /// Index of the `GPSETn` / `GPCLRn` register for this pin
    #[must_use]
    pub const fn bank(self) -> usize {
        (self.0 / 32) as usize
    }

    /// Single-bit mask for this pin within its set/clear bank
    #[must_use]
    pub const fn mask(self) -> u32 {
        1 << (self.0 % 32)
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Pin {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "GPIO{}", self.0);
    }
}

/// GPIO pin function (3-bit `GPFSELn` field encoding)
///
/// Input is the reset value of every field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Function {
    /// Pin is an input
    Input = 0b000,
    /// Pin is an output
    Output = 0b001,
}

impl Function {
    /// Raw 3-bit field value
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Function field for `pin`, positioned within its `GPFSELn` register
    ///
    /// Every other field of the register is zero.
    #[must_use]
    pub const fn field_for(self, pin: Pin) -> u32 {
        self.bits() << pin.fsel_shift()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Function {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Input => defmt::write!(f, "IN"),
            Self::Output => defmt::write!(f, "OUT"),
        }
    }
}

/// Morse signal unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short pulse
    Dot,
    /// Long pulse
    Dash,
    /// Silent gap (LED stays off)
    Space,
}

impl Symbol {
    /// Conventional notation: `.`, `-`, or a blank
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
            Self::Space => ' ',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Symbol {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Dot => defmt::write!(f, "DOT"),
            Self::Dash => defmt::write!(f, "DASH"),
            Self::Space => defmt::write!(f, "SPACE"),
        }
    }
}
