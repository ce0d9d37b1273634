//! Board configuration.
//!
//! Pin map, bus settings and PWM clock math for the Pico 2 joystick board.
//! Everything here is plain data so it can be checked on the host; the
//! binary turns these values into embassy peripheral configs.
//!
//! # Wiring
//!
//! | Signal | GPIO | Peripheral |
//! |--------|------|------------|
//! | Joystick X | 27 | ADC1 |
//! | Joystick Y | 26 | ADC0 |
//! | Joystick press | 22 | input, pull-up |
//! | Button A | 5 | input, pull-up |
//! | Red LED (X) | 13 | PWM6 B |
//! | Blue LED (Y) | 12 | PWM6 A |
//! | Green LED (indicator) | 11 | output |
//! | Display SDA | 14 | I2C1 |
//! | Display SCL | 15 | I2C1 |

// =============================================================================
// Pin Map
// =============================================================================

/// Joystick horizontal axis (ADC1).
pub const PIN_JOYSTICK_X: u8 = 27;

/// Joystick vertical axis (ADC0).
pub const PIN_JOYSTICK_Y: u8 = 26;

/// Joystick push switch, active-low.
pub const PIN_JOYSTICK_PRESS: u8 = 22;

/// Secondary push button, active-low.
pub const PIN_BUTTON_A: u8 = 5;

/// Red LED, brightness follows the X axis.
pub const PIN_LED_RED: u8 = 13;

/// Green LED, mirrors the indicator bit.
pub const PIN_LED_GREEN: u8 = 11;

/// Blue LED, brightness follows the Y axis.
pub const PIN_LED_BLUE: u8 = 12;

/// Display data line.
pub const PIN_DISPLAY_SDA: u8 = 14;

/// Display clock line.
pub const PIN_DISPLAY_SCL: u8 = 15;

// =============================================================================
// Display Bus
// =============================================================================

/// SSD1306 7-bit I2C address.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I2C bus frequency (fast mode).
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;

// =============================================================================
// PWM Clock
// =============================================================================

/// Default RP2350 system clock.
pub const SYS_CLOCK_HZ: u32 = 150_000_000;

/// Target LED PWM frequency. High enough to avoid visible flicker.
pub const PWM_TARGET_HZ: u32 = 244;

/// Integer clock divider for the LED PWM slice.
pub const PWM_DIVIDER: u8 = pwm_divider(SYS_CLOCK_HZ, joystick_common::config::PWM_TOP, PWM_TARGET_HZ);

/// Integer divider that brings a PWM slice counting `0..=top` closest to
/// `target_hz`.
///
/// The hardware divider is 8 bits wide, so the result is clamped to `1..=255`.
pub const fn pwm_divider(
    sys_clk_hz: u32,
    top: u16,
    target_hz: u32,
) -> u8 {
    let period = (top as u64 + 1) * target_hz as u64;
    if period == 0 {
        return u8::MAX;
    }
    let div = (sys_clk_hz as u64 + period / 2) / period;
    if div < 1 {
        1
    } else if div > u8::MAX as u64 {
        u8::MAX
    } else {
        div as u8
    }
}

/// Resulting PWM frequency for a divider.
pub const fn pwm_frequency_hz(
    sys_clk_hz: u32,
    top: u16,
    divider: u8,
) -> u32 {
    let div = if divider == 0 { 1 } else { divider as u64 };
    (sys_clk_hz as u64 / (div * (top as u64 + 1))) as u32
}

// =============================================================================
// Unit Tests
// =============================================================================
