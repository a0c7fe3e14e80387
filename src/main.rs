//! Morse Beacon Main Application
//!
//! Entry point for the bare-metal Raspberry Pi beacon firmware.
//! Boots the primary core, sends the configured message once on the LED
//! and then halts.

#![no_std]
#![no_main]

use core::arch::global_asm;
use core::panic::PanicInfo;

use defmt::{error, info};
// RTT is read by a debugger on the JTAG pins; without one attached, logs are dropped
use defmt_rtt as _;

use morse_beacon::morse::beacon;
use morse_beacon::prelude::*;

// The GPU firmware jumps here on every core. Secondary cores park; the
// primary core zeroes .bss, takes the stack from link.ld and enters Rust.
global_asm!(
    r#"
.section .text._start, "ax"
.global _start
_start:
    mrs     x0, mpidr_el1
    and     x0, x0, #0xff
    cbnz    x0, 2f

    adrp    x0, __bss_start
    add     x0, x0, :lo12:__bss_start
    adrp    x1, __bss_end
    add     x1, x1, :lo12:__bss_end
1:  cmp     x0, x1
    b.hs    3f
    str     xzr, [x0], #8
    b       1b

3:  adrp    x0, __stack_top
    add     x0, x0, :lo12:__stack_top
    mov     sp, x0
    bl      kernel_main

2:  wfe
    b       2b
"#
);

/// Main entry point
#[no_mangle]
extern "C" fn kernel_main() -> ! {
    info!("Morse beacon firmware v{}", env!("CARGO_PKG_VERSION"));
    info!("Board: {} (GPIO at {=usize:#x})", BOARD, BOARD.gpio_base());
    info!("LED on {}, {}", LED_PIN, BusyWait::calibrated());

    // SAFETY: BOARD is fixed at build time for the board being flashed, the
    // MMU is off, and this is the only Mmio on the only running core.
    let bus = unsafe { Mmio::new(BOARD) };

    info!(
        "Sending {=str} ({} symbols, {}ms)",
        MESSAGE_TEXT,
        MESSAGE.len(),
        Timing::STANDARD.total_ms(MESSAGE)
    );

    let _beacon = beacon::run(
        bus,
        LED_PIN,
        BusyWait::calibrated(),
        Timing::STANDARD,
        MESSAGE,
    );

    info!("Message sent, halting");
    halt()
}

/// Terminal state: LED off, core asleep until reset
fn halt() -> ! {
    loop {
        aarch64_cpu::asm::wfe();
    }
}

/// Panic handler - logs the panic and halts
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    error!("panic: {}", defmt::Display2Format(info));
    halt()
}

/// Critical sections for the RTT logger
///
/// Only the primary core runs Rust and interrupts are never unmasked, so
/// there is nothing to exclude.
struct SingleCoreNoIrq;

critical_section::set_impl!(SingleCoreNoIrq);

unsafe impl critical_section::Impl for SingleCoreNoIrq {
    unsafe fn acquire() -> critical_section::RawRestoreState {}

    unsafe fn release(_restore_state: critical_section::RawRestoreState) {}
}
