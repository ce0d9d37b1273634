//! Async tasks for the joystick firmware.
//!
//! - `buttons`: One task per push button (edge wait, debounce, state update)

pub mod buttons;

pub use buttons::button_task;

use embassy_time::Instant;

/// Milliseconds since boot, wrapping after ~49.7 days.
#[inline]
pub fn now_ms() -> u32 { Instant::now().as_millis() as u32 }
