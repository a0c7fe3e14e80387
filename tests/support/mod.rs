//! Test doubles for the GPIO bus and the delay
//!
//! Both doubles append to one shared trace so tests can see register
//! writes and waits in the order they happened.

#![allow(dead_code)]

use std::cell::RefCell;

use embedded_hal::delay::DelayNs;
use morse_beacon::hal::gpio::GpioBus;
use morse_beacon::types::Pin;

/// One recorded hardware interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Store into `GPFSEL{index}`
    FunctionSelect { index: usize, value: u32 },
    /// Store into `GPSET{bank}`
    Set { bank: usize, mask: u32 },
    /// Store into `GPCLR{bank}`
    Clear { bank: usize, mask: u32 },
    /// Busy-wait of this many nanoseconds
    Wait { ns: u64 },
}

/// Ordered record of everything the code under test did
#[derive(Debug, Default)]
pub struct Trace {
    events: Vec<Event>,
}

impl Trace {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Register writes, waits excluded
    pub fn gpio_writes(&self) -> Vec<Event> {
        self.events
            .iter()
            .copied()
            .filter(|event| !matches!(event, Event::Wait { .. }))
            .collect()
    }

    /// Every wait, in milliseconds
    pub fn waits_ms(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Wait { ns } => Some(ns / 1_000_000),
                _ => None,
            })
            .collect()
    }

    /// Last value stored into `GPFSEL{index}`
    pub fn function_select(&self, index: usize) -> Option<u32> {
        self.events.iter().rev().find_map(|event| match *event {
            Event::FunctionSelect { index: i, value } if i == index => Some(value),
            _ => None,
        })
    }

    /// Output level of `pin` implied by the set/clear writes so far
    pub fn is_high(&self, pin: Pin) -> bool {
        let mut high = false;
        for event in &self.events {
            match *event {
                Event::Set { bank, mask } if drives(pin, bank, mask) => high = true,
                Event::Clear { bank, mask } if drives(pin, bank, mask) => high = false,
                _ => {}
            }
        }
        high
    }

    /// Length of every completed high pulse on `pin`, in milliseconds
    pub fn pulse_widths_ms(&self, pin: Pin) -> Vec<u64> {
        let mut widths = Vec::new();
        let mut open: Option<u64> = None;
        for event in &self.events {
            match *event {
                Event::Set { bank, mask } if drives(pin, bank, mask) => open = Some(0),
                Event::Clear { bank, mask } if drives(pin, bank, mask) => {
                    if let Some(ns) = open.take() {
                        widths.push(ns / 1_000_000);
                    }
                }
                Event::Wait { ns } => {
                    if let Some(total) = open.as_mut() {
                        *total += ns;
                    }
                }
                _ => {}
            }
        }
        widths
    }
}

fn drives(pin: Pin, bank: usize, mask: u32) -> bool {
    bank == pin.bank() && mask & pin.mask() != 0
}

/// GPIO bus that records into a [`Trace`]
pub struct TraceBus<'a>(pub &'a RefCell<Trace>);

impl GpioBus for TraceBus<'_> {
    fn write_function_select(&mut self, index: usize, value: u32) {
        self.0
            .borrow_mut()
            .events
            .push(Event::FunctionSelect { index, value });
    }

    fn write_set(&mut self, bank: usize, mask: u32) {
        self.0.borrow_mut().events.push(Event::Set { bank, mask });
    }

    fn write_clear(&mut self, bank: usize, mask: u32) {
        self.0.borrow_mut().events.push(Event::Clear { bank, mask });
    }
}

/// Delay that records into a [`Trace`] instead of waiting
pub struct TraceDelay<'a>(pub &'a RefCell<Trace>);

impl TraceDelay<'_> {
    fn record(&mut self, ns: u64) {
        self.0.borrow_mut().events.push(Event::Wait { ns });
    }
}

impl DelayNs for TraceDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

/// The LED pin used throughout the tests
pub fn led() -> Pin {
    Pin::new(16).unwrap()
}
