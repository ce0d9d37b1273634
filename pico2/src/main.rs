//! Joystick cursor firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Reads a two-axis analog joystick, drives two PWM LEDs from the deflection
//! of each axis and draws a cursor plus a border on an SSD1306 128x64 OLED.
//!
//! # Architecture
//!
//! - Main task: the control loop (sample, snapshot state, PWM, render, flush)
//!   every [`LOOP_PERIOD_MS`]
//! - Button tasks: one per button, wake on the falling edge and update the
//!   shared control state
//!
//! The two sides only meet at [`CONTROL`].
//!
//! # Button Controls
//!
//! - **Joystick press**: Toggle the green indicator, cycle the border style
//! - **A**: Enable/disable the red and blue LEDs

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]

// Modules only used in the binary (not testable on host)
mod display;
mod joystick;
mod tasks;

// Re-export testable modules from library for local use
mod config {
    pub use joystick_pico2::config::*;
}

use defmt::{Debug2Format, info};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{self, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Timer;
use joystick_common::config::{LOOP_PERIOD_MS, PWM_TOP};
use joystick_common::{Button, ControlLoop, SharedControl};
use {defmt_rtt as _, panic_probe as _};

use crate::config::{DISPLAY_I2C_FREQUENCY_HZ, PWM_DIVIDER, SYS_CLOCK_HZ, pwm_frequency_hz};
use crate::display::Oled;
use crate::joystick::Joystick;
use crate::tasks::button_task;

#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"joystick-cursor"),
    embassy_rp::binary_info::rp_program_description!(c"Joystick driven PWM LEDs and OLED cursor"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Control state shared by the control loop and the button tasks.
static CONTROL: SharedControl<CriticalSectionRawMutex> = SharedControl::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joystick cursor starting...");

    let p = embassy_rp::init(Default::default());

    // Green indicator mirrors led_toggle, which starts cleared
    let indicator = Output::new(p.PIN_11, Level::Low);

    // Red (X) and blue (Y) share PWM slice 6: blue on channel A, red on B
    let mut pwm_config = pwm::Config::default();
    pwm_config.top = PWM_TOP;
    pwm_config.divider = PWM_DIVIDER.into();
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;
    let (Some(led_blue), Some(led_red)) = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config).split()
    else {
        defmt::panic!("PWM slice 6 did not yield both outputs");
    };
    info!(
        "LED PWM initialized: top {}, divider {}, ~{} Hz",
        PWM_TOP,
        PWM_DIVIDER,
        pwm_frequency_hz(SYS_CLOCK_HZ, PWM_TOP, PWM_DIVIDER)
    );

    // Joystick: X on GPIO27 (ADC1), Y on GPIO26 (ADC0)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let axis_x = Channel::new_pin(p.PIN_27, Pull::None);
    let axis_y = Channel::new_pin(p.PIN_26, Pull::None);
    let axes = Joystick::new(adc, axis_x, axis_y);
    info!("Joystick ADC initialized");

    // Display: I2C1, SDA=14, SCL=15
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = DISPLAY_I2C_FREQUENCY_HZ;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut oled = Oled::new(bus);
    if let Err(e) = oled.init() {
        defmt::panic!("Display init failed: {}", Debug2Format(&e));
    }
    info!("Display initialized");

    // Buttons (active-low with internal pull-up)
    let btn_joystick = Input::new(p.PIN_22, Pull::Up);
    let btn_a = Input::new(p.PIN_5, Pull::Up);

    spawner
        .spawn(button_task(btn_joystick, Button::Joystick, Some(indicator), &CONTROL))
        .unwrap();
    info!("Joystick button task spawned");
    spawner.spawn(button_task(btn_a, Button::A, None, &CONTROL)).unwrap();
    info!("Button A task spawned");

    let mut control_loop = ControlLoop::new(&CONTROL, axes, led_red, led_blue, oled);

    info!("Control loop starting");

    loop {
        control_loop.step();
        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}
