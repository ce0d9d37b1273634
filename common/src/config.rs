//! Compile-time configuration for the joystick board.
//!
//! There is no runtime configuration: every tunable is a `const` and the
//! deadzone invariant is checked during const evaluation.

use crate::deadzone::DeadzoneConfig;

// =============================================================================
// Analog Input
// =============================================================================

/// Full-scale ADC reading (12-bit converter).
pub const ADC_MAX: u16 = 4095;

/// Resting position of the joystick on either axis.
pub const ADC_CENTER: u16 = 2048;

/// Radius around [`ADC_CENTER`] treated as "no movement".
pub const JOYSTICK_DEADZONE: u16 = 200;

/// Deadzone used for both axes and both LED channels.
///
/// Building this in a `const` fails compilation if the threshold reaches
/// the center.
pub const DEADZONE: DeadzoneConfig = DeadzoneConfig::new(ADC_CENTER, JOYSTICK_DEADZONE);

// =============================================================================
// PWM Output
// =============================================================================

/// PWM counter wrap value. Brightness levels live in `0..=PWM_TOP`.
pub const PWM_TOP: u16 = 4095;

// =============================================================================
// Display
// =============================================================================

/// Display width in pixels (SSD1306 128x64).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Side of the square cursor glyph.
pub const CURSOR_SIZE: u32 = 8;

/// Largest cursor X so the glyph stays on screen.
pub const CURSOR_MAX_X: u32 = SCREEN_WIDTH - CURSOR_SIZE;

/// Largest cursor Y so the glyph stays on screen.
pub const CURSOR_MAX_Y: u32 = SCREEN_HEIGHT - CURSOR_SIZE;

// =============================================================================
// Timing
// =============================================================================

/// Minimum gap between two accepted presses of the same button.
pub const DEBOUNCE_MS: u32 = 200;

/// Pause at the end of each control loop iteration.
pub const LOOP_PERIOD_MS: u64 = 50;
