//! Joystick cursor simulator for desktop.
//!
//! Runs the same control loop, state machine and render pipeline as the
//! firmware, with the SDL window standing in for the board.
//!
//! # Controls
//!
//! - **Left mouse drag**: Move the stick (springs back on release)
//! - **Arrow keys**: Nudge the stick
//! - **Space**: Recentre the stick
//! - **J**: Joystick press (indicator + border style)
//! - **A**: Button A (LEDs on/off)
//! - **Esc** or closing the window: Quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod display;
mod input;
mod leds;
mod timing;

use std::thread;
use std::time::Instant;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use joystick_common::event_log::EventLog;
use joystick_common::{Brightness, Button, ControlLoop, FrameSink, PressHandler, SharedControl};

use crate::display::WindowSink;
use crate::input::{Nudge, VirtualJoystick};
use crate::leds::VirtualLed;
use crate::timing::{Clock, LOOP_PERIOD};

fn main() {
    let control: SharedControl<NoopRawMutex> = SharedControl::new();
    let clock = Clock::new();

    let mut joystick_button = PressHandler::new(Button::Joystick, &control);
    let mut a_button = PressHandler::new(Button::A, &control);
    let mut event_log = EventLog::new();

    // Blank frame first; the window only accepts events once it has been shown
    let mut sink = WindowSink::new("Joystick Cursor Sim");
    sink.target().clear(BinaryColor::Off).ok();
    sink.flush();

    let mut control_loop = ControlLoop::new(
        &control,
        VirtualJoystick::new(),
        VirtualLed::default(),
        VirtualLed::default(),
        sink,
    );

    println!("Joystick cursor simulator: drag with the mouse, J = joystick press, A = LEDs on/off");

    let mut last_brightness: Option<Brightness> = None;

    loop {
        let iteration_start = Instant::now();

        for ev in control_loop.sink_mut().events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => control_loop.axes_mut().grab(point),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => control_loop.axes_mut().release(),
                SimulatorEvent::MouseMove { point } => control_loop.axes_mut().drag(point),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Arrow keys auto-repeat; buttons fire once per physical press
                    match keycode {
                        Keycode::Left => control_loop.axes_mut().nudge(Nudge::Left),
                        Keycode::Right => control_loop.axes_mut().nudge(Nudge::Right),
                        Keycode::Up => control_loop.axes_mut().nudge(Nudge::Up),
                        Keycode::Down => control_loop.axes_mut().nudge(Nudge::Down),
                        Keycode::Space => control_loop.axes_mut().recenter(),
                        Keycode::Escape => return,
                        Keycode::J if !repeat => {
                            let now = clock.now_ms();
                            if let Some(state) = joystick_button.on_edge(now) {
                                println!("{}", event_log.record(Button::Joystick, now, &state));
                            }
                        }
                        Keycode::A if !repeat => {
                            let now = clock.now_ms();
                            if let Some(state) = a_button.on_edge(now) {
                                println!("{}", event_log.record(Button::A, now, &state));
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let iteration = control_loop.step();

        if last_brightness != Some(iteration.brightness) {
            let (red, blue) = control_loop.pwm();
            println!(
                "PWM red={:>4} ({:>3}%) blue={:>4} ({:>3}%) cursor=({}, {})",
                red.duty(),
                red.percent(),
                blue.duty(),
                blue.percent(),
                iteration.cursor.x,
                iteration.cursor.y
            );
            last_brightness = Some(iteration.brightness);
        }

        if let Some(remaining) = LOOP_PERIOD.checked_sub(iteration_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
