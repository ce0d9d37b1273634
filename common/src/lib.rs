//! Portable control logic for the joystick cursor board.
//!
//! This crate contains the platform-agnostic core shared between the
//! simulator and the Pico 2 firmware:
//!
//! - [`config`]: Compile-time tunables (ADC range, deadzone, PWM top, display size, timing)
//! - [`debounce`]: Per-button debounce gate
//! - [`deadzone`]: Deadzone mapping from raw samples to output magnitudes
//! - [`state`]: Control state, border style cycle and button identities
//! - [`shared`]: Control state behind a single mutex boundary
//! - [`input`]: Button edge handler (debounce, then mutate)
//! - [`render`]: Full-frame render pipeline (cursor + border)
//! - [`frame`]: Off-screen 1-bit framebuffer
//! - [`control`]: Sampling/control loop iteration and collaborator traits
//! - [`event_log`]: Bounded log of recent input events
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p joystick-common
//! ```
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and never allocates.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod control;
pub mod deadzone;
pub mod debounce;
pub mod event_log;
pub mod frame;
pub mod input;
pub mod render;
pub mod shared;
pub mod state;

// Re-export commonly used items
pub use control::{AxisReader, AxisSamples, Brightness, ControlLoop, FrameSink, Iteration};
pub use input::PressHandler;
pub use shared::SharedControl;
pub use state::{BorderStyle, Button, ControlState, LineStyle};
