//! Morse Signalling
//!
//! Symbol timing, the pin-driving transmitter, the message sequencer and
//! a text encoder for building messages.

pub mod beacon;
pub mod encoder;
pub mod transmitter;
