//! Message Sequencer
//!
//! Configures the LED pin once and then interprets a fixed symbol sequence
//! from start to end, once. Nothing repeats and nothing branches on runtime data;
//! the sequence is the whole program.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::hal::gpio::{Gpio, GpioBus, Output};
use crate::morse::transmitter::{Timing, Transmitter};
use crate::types::{Pin, Symbol};

/// Transmitter on a configured GPIO output
pub type Beacon<B, D> = Transmitter<Gpio<B, Output>, D>;

/// Configure `pin` as an output on `bus` and send `message` once
///
/// The pin is driven low right after configuration, so a leading space or
/// an empty message leaves the LED off whatever the output latch held.
/// Returns with the message fully emitted and the pin low.
pub fn run<B, D>(bus: B, pin: Pin, delay: D, timing: Timing, message: &[Symbol]) -> Beacon<B, D>
where
    B: GpioBus,
    D: DelayNs,
{
    let mut led = Gpio::new(bus, pin).into_output();
    if let Err(never) = led.set_low() {
        match never {}
    }

    let mut beacon = Transmitter::new(led, delay, timing);

    match beacon.send(message) {
        Ok(()) => beacon,
        Err(never) => match never {},
    }
}

