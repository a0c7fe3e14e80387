//! Signal Encoder
//!
//! Turns Morse symbols into LED pulses: a dot or dash is pin high, wait,
//! pin low; a space is a wait with the pin left alone. Every call blocks
//! until the whole symbol has been emitted.
//!
//! Elements of one letter are sent back to back with no gap between them;
//! only [`Symbol::Space`] separates anything.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{DASH_MS, DOT_MS, SPACE_MS};
use crate::types::Symbol;

/// Symbol durations in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    dot_ms: u32,
    dash_ms: u32,
    space_ms: u32,
}

impl Timing {
    /// 100 / 400 / 800 ms
    pub const STANDARD: Self = Self {
        dot_ms: DOT_MS,
        dash_ms: DASH_MS,
        space_ms: SPACE_MS,
    };

    /// Create a timing, returns None unless `0 < dot < dash < space`
    #[must_use]
    pub const fn new(dot_ms: u32, dash_ms: u32, space_ms: u32) -> Option<Self> {
        if dot_ms > 0 && dash_ms > dot_ms && space_ms > dash_ms {
            Some(Self {
                dot_ms,
                dash_ms,
                space_ms,
            })
        } else {
            None
        }
    }

    /// Dot duration
    #[must_use]
    pub const fn dot_ms(&self) -> u32 {
        self.dot_ms
    }

    /// Dash duration
    #[must_use]
    pub const fn dash_ms(&self) -> u32 {
        self.dash_ms
    }

    /// Space duration
    #[must_use]
    pub const fn space_ms(&self) -> u32 {
        self.space_ms
    }

    /// Duration of `symbol`
    #[must_use]
    pub const fn duration_ms(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::Dot => self.dot_ms,
            Symbol::Dash => self.dash_ms,
            Symbol::Space => self.space_ms,
        }
    }

    /// Total wall-clock duration of `message`
    #[must_use]
    pub fn total_ms(&self, message: &[Symbol]) -> u64 {
        message
            .iter()
            .map(|&symbol| u64::from(self.duration_ms(symbol)))
            .sum()
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Timing {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "dot={}ms dash={}ms space={}ms",
            self.dot_ms,
            self.dash_ms,
            self.space_ms
        );
    }
}

/// Drives one output pin with Morse symbols
pub struct Transmitter<P, D> {
    pin: P,
    delay: D,
    timing: Timing,
}

impl<P: OutputPin, D: DelayNs> Transmitter<P, D> {
    /// Create a transmitter on an already configured output pin
    pub fn new(pin: P, delay: D, timing: Timing) -> Self {
        Self { pin, delay, timing }
    }

    /// Short pulse
    pub fn dot(&mut self) -> Result<(), P::Error> {
        self.pulse(self.timing.dot_ms)
    }

    /// Long pulse
    pub fn dash(&mut self) -> Result<(), P::Error> {
        self.pulse(self.timing.dash_ms)
    }

    /// Silent gap; no pin writes
    pub fn space(&mut self) {
        self.delay.delay_ms(self.timing.space_ms);
    }

    /// Emit one symbol
    pub fn emit(&mut self, symbol: Symbol) -> Result<(), P::Error> {
        #[cfg(feature = "embedded")]
        defmt::trace!("emit {}", symbol);

        match symbol {
            Symbol::Dot => self.dot(),
            Symbol::Dash => self.dash(),
            Symbol::Space => {
                self.space();
                Ok(())
            }
        }
    }

    /// Emit `message` in order
    pub fn send(&mut self, message: &[Symbol]) -> Result<(), P::Error> {
        message.iter().try_for_each(|&symbol| self.emit(symbol))
    }

    /// Give back the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn pulse(&mut self, ms: u32) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.delay.delay_ms(ms);
        self.pin.set_low()
    }
}
