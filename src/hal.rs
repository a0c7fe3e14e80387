//! Hardware Abstraction Layer
//!
//! Provides the two hardware primitives the beacon is built on: the
//! write-only GPIO register interface and the calibrated busy-wait.
//! All unsafe register access is isolated here.

pub mod delay;
pub mod gpio;
