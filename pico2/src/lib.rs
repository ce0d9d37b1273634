//! Joystick board library - host-testable board configuration.
//!
//! The binary (`main.rs`) wires the RP2350 peripherals to `joystick-common`;
//! this library holds the pieces of that wiring that are plain data: the pin
//! map, the display bus settings and the PWM clock math.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p joystick-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p joystick-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

pub mod config;
