//! Tests for the signal encoder and message sequencer
//!
//! Runs the transmitter against a recording GPIO bus and delay.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test morse_tests

mod support;

use std::cell::RefCell;

use embedded_hal::digital::OutputPin;
use morse_beacon::config::{LED_PIN, MESSAGE};
use morse_beacon::hal::gpio::{Gpio, GpioBus, Output};
use morse_beacon::morse::beacon;
use morse_beacon::morse::transmitter::{Timing, Transmitter};
use morse_beacon::types::Symbol::{self, Dash, Dot, Space};
use support::{led, Event, Trace, TraceBus, TraceDelay};

fn transmitter(trace: &RefCell<Trace>) -> Transmitter<Gpio<TraceBus<'_>, Output>, TraceDelay<'_>> {
    let pin = Gpio::new(TraceBus(trace), led()).into_output();
    Transmitter::new(pin, TraceDelay(trace), Timing::STANDARD)
}

// ============================================================================
// Signal Encoder Tests
// ============================================================================

#[test]
fn dot_is_short_pulse_ending_low() {
    let trace = RefCell::new(Trace::default());
    let mut tx = transmitter(&trace);

    tx.dot().unwrap();

    let trace = trace.borrow();
    assert_eq!(trace.pulse_widths_ms(led()), vec![100]);
    assert!(!trace.is_high(led()));
}

#[test]
fn dash_is_long_pulse_ending_low() {
    let trace = RefCell::new(Trace::default());
    let mut tx = transmitter(&trace);

    tx.dash().unwrap();

    let trace = trace.borrow();
    assert_eq!(trace.pulse_widths_ms(led()), vec![400]);
    assert!(!trace.is_high(led()));
}

#[test]
fn pulse_write_order() {
    let trace = RefCell::new(Trace::default());
    let mut tx = transmitter(&trace);

    tx.dot().unwrap();

    assert_eq!(
        trace.borrow().events(),
        &[
            Event::FunctionSelect { index: 1, value: 1 << 18 },
            Event::Set { bank: 0, mask: 1 << 16 },
            Event::Wait { ns: 100_000_000 },
            Event::Clear { bank: 0, mask: 1 << 16 },
        ]
    );
}

#[test]
fn space_writes_nothing() {
    let trace = RefCell::new(Trace::default());
    let mut tx = transmitter(&trace);
    let writes_after_configure = trace.borrow().gpio_writes().len();

    tx.space();

    let trace = trace.borrow();
    assert_eq!(trace.gpio_writes().len(), writes_after_configure);
    assert_eq!(trace.waits_ms(), vec![800]);
}

#[test]
fn letter_j_pulse_widths() {
    let trace = RefCell::new(Trace::default());
    let mut tx = transmitter(&trace);

    for symbol in [Dot, Dash, Dash, Dash] {
        tx.emit(symbol).unwrap();
        assert!(!trace.borrow().is_high(led()), "pin left high after {symbol:?}");
    }

    assert_eq!(trace.borrow().pulse_widths_ms(led()), vec![100, 400, 400, 400]);
}

#[test]
fn send_matches_individual_calls() {
    let by_send = RefCell::new(Trace::default());
    transmitter(&by_send).send(&[Dot, Space, Dash]).unwrap();

    let by_call = RefCell::new(Trace::default());
    let mut tx = transmitter(&by_call);
    tx.dot().unwrap();
    tx.space();
    tx.dash().unwrap();

    assert_eq!(by_send.borrow().events(), by_call.borrow().events());
}

#[test]
fn custom_timing_is_used() {
    let trace = RefCell::new(Trace::default());
    let pin = Gpio::new(TraceBus(&trace), led()).into_output();
    let timing = Timing::new(10, 30, 70).unwrap();
    let mut tx = Transmitter::new(pin, TraceDelay(&trace), timing);

    tx.send(&[Dot, Dash, Space]).unwrap();

    assert_eq!(trace.borrow().waits_ms(), vec![10, 30, 70]);
}

#[test]
fn release_returns_configured_pin() {
    let trace = RefCell::new(Trace::default());
    let (mut pin, _delay) = transmitter(&trace).release();

    pin.set_high().unwrap();

    assert!(trace.borrow().is_high(led()));
}

// ============================================================================
// Message Sequencer Tests
// ============================================================================

fn run(message: &[Symbol]) -> Trace {
    let trace = RefCell::new(Trace::default());
    beacon::run(
        TraceBus(&trace),
        led(),
        TraceDelay(&trace),
        Timing::STANDARD,
        message,
    );
    trace.into_inner()
}

#[test]
fn sequencer_letter_a() {
    let trace = run(&[Dot, Dash]);

    assert_eq!(trace.pulse_widths_ms(led()), vec![100, 400]);
    assert_eq!(trace.waits_ms(), vec![100, 400]);
    assert!(!trace.is_high(led()));
}

#[test]
fn sequencer_configures_exactly_once_first() {
    let trace = run(MESSAGE);

    let configures: Vec<_> = trace
        .events()
        .iter()
        .filter(|event| matches!(event, Event::FunctionSelect { .. }))
        .collect();
    assert_eq!(configures.len(), 1);
    assert!(matches!(
        trace.events().first(),
        Some(Event::FunctionSelect { index: 1, value }) if *value == 1 << 18
    ));
}

#[test]
fn sequencer_full_message() {
    let trace = run(MESSAGE);

    // .--- .- -.-. -.- .. .
    assert_eq!(
        trace.pulse_widths_ms(LED_PIN),
        vec![
            100, 400, 400, 400, //
            100, 400, //
            400, 100, 400, 100, //
            400, 100, 400, //
            100, 100, //
            100,
        ]
    );
    assert_eq!(trace.waits_ms().iter().filter(|&&ms| ms == 800).count(), 5);
    assert_eq!(
        trace.waits_ms().iter().sum::<u64>(),
        Timing::STANDARD.total_ms(MESSAGE)
    );
    assert!(!trace.is_high(LED_PIN));
}

#[test]
fn sequencer_empty_message_configures_and_clears() {
    let trace = run(&[]);

    assert_eq!(
        trace.events(),
        &[
            Event::FunctionSelect { index: 1, value: 1 << 18 },
            Event::Clear { bank: 0, mask: 1 << 16 },
        ]
    );
}

#[test]
fn sequencer_space_only() {
    let trace = run(&[Space]);

    assert_eq!(trace.gpio_writes().len(), 2);
    assert_eq!(trace.waits_ms(), vec![800]);
}

#[test]
fn sequencer_leading_space_with_latch_left_high() {
    let trace = RefCell::new(Trace::default());
    // Output latch left high by whatever ran before
    TraceBus(&trace).write_set(0, 1 << 16);
    assert!(trace.borrow().is_high(led()));

    beacon::run(
        TraceBus(&trace),
        led(),
        TraceDelay(&trace),
        Timing::STANDARD,
        &[Space, Dot],
    );

    let trace = trace.into_inner();
    assert_eq!(
        &trace.events()[..4],
        &[
            Event::Set { bank: 0, mask: 1 << 16 },
            Event::FunctionSelect { index: 1, value: 1 << 18 },
            Event::Clear { bank: 0, mask: 1 << 16 },
            Event::Wait { ns: 800_000_000 },
        ]
    );
    assert_eq!(trace.pulse_widths_ms(led()).last(), Some(&100));
    assert!(!trace.is_high(led()));
}

#[test]
fn sequencer_empty_message_with_latch_left_high() {
    let trace = RefCell::new(Trace::default());
    TraceBus(&trace).write_set(0, 1 << 16);

    beacon::run(
        TraceBus(&trace),
        led(),
        TraceDelay(&trace),
        Timing::STANDARD,
        &[],
    );

    assert!(!trace.borrow().is_high(led()));
}
