//! GPIO Register Interface
//!
//! Write-only access to the BCM GPIO block: function select, output set and
//! output clear. The register writes go through the [`GpioBus`] seam so the
//! pin logic can run against a recorder on the host; [`Mmio`] is the
//! hardware implementation and holds the only unsafe code in the library.
//!
//! Pins are typestated. [`Gpio::new`] yields an [`Unconfigured`] pin that
//! cannot drive its level; only [`Gpio::into_output`] produces the
//! [`Output`] pin that implements [`OutputPin`]:
//!
//! ```compile_fail
//! use embedded_hal::digital::OutputPin;
//! use morse_beacon::hal::gpio::{Gpio, GpioBus};
//! use morse_beacon::types::Pin;
//!
//! struct Nowhere;
//! impl GpioBus for Nowhere {
//!     fn write_function_select(&mut self, _: usize, _: u32) {}
//!     fn write_set(&mut self, _: usize, _: u32) {}
//!     fn write_clear(&mut self, _: usize, _: u32) {}
//! }
//!
//! let mut led = Gpio::new(Nowhere, Pin::new(16).unwrap());
//! led.set_high(); // not configured as an output yet
//! ```

use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::config::Board;
use crate::types::{Function, Pin};

/// Offset of `GPFSEL0` from the GPIO block
pub const GPFSEL0: usize = 0x00;

/// Offset of `GPSET0` from the GPIO block
pub const GPSET0: usize = 0x1C;

/// Offset of `GPCLR0` from the GPIO block
pub const GPCLR0: usize = 0x28;

/// Width of one register in bytes
const REGISTER_BYTES: usize = 4;

/// Physical addresses of the GPIO registers on one board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterMap {
    base: usize,
}

impl RegisterMap {
    /// Register map for `board`
    #[must_use]
    pub const fn for_board(board: Board) -> Self {
        Self {
            base: board.gpio_base(),
        }
    }

    /// GPIO block base address
    #[must_use]
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Address of `GPFSEL{index}`
    #[must_use]
    pub const fn function_select(&self, index: usize) -> usize {
        self.base + GPFSEL0 + index * REGISTER_BYTES
    }

    /// Address of `GPSET{bank}`
    #[must_use]
    pub const fn set(&self, bank: usize) -> usize {
        self.base + GPSET0 + bank * REGISTER_BYTES
    }

    /// Address of `GPCLR{bank}`
    #[must_use]
    pub const fn clear(&self, bank: usize) -> usize {
        self.base + GPCLR0 + bank * REGISTER_BYTES
    }
}

/// Write-only GPIO register bus
///
/// Each call is one whole-register store. Nothing is read back, so a
/// function-select write replaces the fields of the other nine pins that
/// share the register, and set/clear writes touch only the bits that are 1.
pub trait GpioBus {
    /// Store `value` into `GPFSEL{index}`
    fn write_function_select(&mut self, index: usize, value: u32);

    /// Store `mask` into `GPSET{bank}`, driving those pins high
    fn write_set(&mut self, bank: usize, mask: u32);

    /// Store `mask` into `GPCLR{bank}`, driving those pins low
    fn write_clear(&mut self, bank: usize, mask: u32);
}

impl<B: GpioBus + ?Sized> GpioBus for &mut B {
    fn write_function_select(&mut self, index: usize, value: u32) {
        (**self).write_function_select(index, value);
    }

    fn write_set(&mut self, bank: usize, mask: u32) {
        (**self).write_set(bank, mask);
    }

    fn write_clear(&mut self, bank: usize, mask: u32) {
        (**self).write_clear(bank, mask);
    }
}

/// Memory-mapped GPIO registers of the running board
#[cfg(feature = "embedded")]
pub struct Mmio {
    map: RegisterMap,
}

#[cfg(feature = "embedded")]
#[allow(unsafe_code)]
impl Mmio {
    /// Take the GPIO registers of `board`.
    ///
    /// # Safety
    ///
    /// `board` must be the board this code runs on, with the MMU off or the
    /// peripheral window identity-mapped as device memory. No other `Mmio`
    /// may exist: writes are unsynchronized.
    #[must_use]
    pub const unsafe fn new(board: Board) -> Self {
        Self {
            map: RegisterMap::for_board(board),
        }
    }

    fn store(addr: usize, value: u32) {
        // SAFETY: `addr` comes from `RegisterMap` for the board promised in
        // `Mmio::new`, so it is an aligned, mapped 32-bit GPIO register.
        unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
    }
}

#[cfg(feature = "embedded")]
impl GpioBus for Mmio {
    fn write_function_select(&mut self, index: usize, value: u32) {
        Self::store(self.map.function_select(index), value);
    }

    fn write_set(&mut self, bank: usize, mask: u32) {
        Self::store(self.map.set(bank), mask);
    }

    fn write_clear(&mut self, bank: usize, mask: u32) {
        Self::store(self.map.clear(bank), mask);
    }
}

/// Pin state: function not yet selected
pub struct Unconfigured;

/// Pin state: configured as an output
pub struct Output;

/// A GPIO pin in state `S`
pub struct Gpio<B, S> {
    bus: B,
    pin: Pin,
    _state: PhantomData<S>,
}

impl<B, S> Gpio<B, S> {
    /// Pin number
    #[must_use]
    pub const fn pin(&self) -> Pin {
        self.pin
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }

    fn transition<T>(self) -> Gpio<B, T> {
        Gpio {
            bus: self.bus,
            pin: self.pin,
            _state: PhantomData,
        }
    }
}

impl<B: GpioBus> Gpio<B, Unconfigured> {
    /// Wrap `pin` on `bus` without touching any register
    #[must_use]
    pub const fn new(bus: B, pin: Pin) -> Self {
        Self {
            bus,
            pin,
            _state: PhantomData,
        }
    }
}

impl<B: GpioBus, S> Gpio<B, S> {
    /// Select the output function for this pin
    ///
    /// One unconditional store of the pin's output field into its
    /// `GPFSELn`; the same value every time, so repeating it is harmless.
    #[must_use]
    pub fn into_output(mut self) -> Gpio<B, Output> {
        let value = Function::Output.field_for(self.pin);
        self.bus.write_function_select(self.pin.fsel_index(), value);
        self.transition()
    }
}

impl<B: GpioBus> ErrorType for Gpio<B, Output> {
    type Error = Infallible;
}

impl<B: GpioBus> OutputPin for Gpio<B, Output> {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.write_set(self.pin.bank(), self.pin.mask());
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.write_clear(self.pin.bank(), self.pin.mask());
        Ok(())
    }
}
