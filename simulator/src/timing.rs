//! Timing for the simulator.
//!
//! `std::time` is not available in `no_std`, so the wall-clock side of the
//! loop lives here rather than in the common crate.

use std::time::{Duration, Instant};

use joystick_common::config::LOOP_PERIOD_MS;

/// Pause between control loop iterations.
pub const LOOP_PERIOD: Duration = Duration::from_millis(LOOP_PERIOD_MS);

/// Milliseconds since the simulator started, in the same wrapping `u32`
/// form the firmware uses for debounce timestamps.
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self { Self { start: Instant::now() } }

    pub fn now_ms(&self) -> u32 { self.start.elapsed().as_millis() as u32 }
}
