//! Busy-Wait Delay
//!
//! The only time source in the firmware: a loop of no-op instructions
//! sized by a fixed cycles-per-microsecond calibration. There is no timer,
//! no interrupt and no way to cut a wait short.
//!
//! Accuracy depends entirely on [`CYCLES_PER_US`] matching the core clock
//! and the code generated for the loop. The calibration and its roughly 20%
//! bound come from the C blinker's loop; this loop has not been measured.

use embedded_hal::delay::DelayNs;

use crate::config::CYCLES_PER_US;

/// One instruction the optimizer must keep
#[inline(always)]
fn nop() {
    #[cfg(all(feature = "embedded", target_arch = "aarch64"))]
    aarch64_cpu::asm::nop();

    #[cfg(not(all(feature = "embedded", target_arch = "aarch64")))]
    core::hint::spin_loop();
}

/// Calibrated busy-wait delay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusyWait {
    cycles_per_us: u32,
}

impl BusyWait {
    /// Create a delay with an explicit calibration
    #[must_use]
    pub const fn new(cycles_per_us: u32) -> Self {
        Self { cycles_per_us }
    }

    /// Create a delay with the board calibration from [`crate::config`]
    #[must_use]
    pub const fn calibrated() -> Self {
        Self::new(CYCLES_PER_US)
    }

    /// Calibration in no-op cycles per microsecond
    #[must_use]
    pub const fn cycles_per_us(&self) -> u32 {
        self.cycles_per_us
    }

    /// Cycles spent for `us` microseconds
    #[must_use]
    pub const fn cycles_for_us(&self, us: u32) -> u64 {
        (us as u64).saturating_mul(self.cycles_per_us as u64)
    }

    /// Cycles spent for `ms` milliseconds (`ms * 1000` microseconds)
    #[must_use]
    pub const fn cycles_for_ms(&self, ms: u32) -> u64 {
        (ms as u64 * 1000).saturating_mul(self.cycles_per_us as u64)
    }

    /// Cycles spent for `ns` nanoseconds, rounded up to a whole cycle
    #[must_use]
    pub const fn cycles_for_ns(&self, ns: u32) -> u64 {
        (ns as u64).saturating_mul(self.cycles_per_us as u64).div_ceil(1000)
    }

    /// Spin for exactly `cycles` no-op iterations
    pub fn spin(cycles: u64) {
        for _ in 0..cycles {
            nop();
        }
    }

    /// Busy-wait for about `us` microseconds
    pub fn sleep_us(&self, us: u32) {
        Self::spin(self.cycles_for_us(us));
    }

    /// Busy-wait for about `ms` milliseconds
    pub fn sleep_ms(&self, ms: u32) {
        Self::spin(self.cycles_for_ms(ms));
    }
}

impl Default for BusyWait {
    fn default() -> Self {
        Self::calibrated()
    }
}

impl DelayNs for BusyWait {
    fn delay_ns(&mut self, ns: u32) {
        Self::spin(self.cycles_for_ns(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.sleep_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleep_ms(ms);
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BusyWait {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "BusyWait({} cycles/us)", self.cycles_per_us);
    }
}
