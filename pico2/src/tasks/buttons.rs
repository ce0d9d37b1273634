//! Push button tasks.
//!
//! Each button runs its own instance of [`button_task`] and so owns its own
//! debounce slot. The task sleeps on the GPIO falling-edge interrupt, runs the
//! press through a [`PressHandler`] and, for the joystick press, mirrors the
//! indicator bit onto the green LED.
//!
//! The press timestamp is taken when the task resumes, not at the edge
//! itself. A blocking display flush on the shared executor can delay it by
//! up to one flush (~25 ms), well inside the 200 ms debounce window.

use defmt::{debug, info};
use embassy_rp::gpio::{Input, Level, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use joystick_common::{Button, PressHandler, SharedControl};

use super::now_ms;

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(
    mut input: Input<'static>,
    button: Button,
    mut indicator: Option<Output<'static>>,
    control: &'static SharedControl<CriticalSectionRawMutex>,
) -> ! {
    info!("Button task started: {}", button);

    let mut handler = PressHandler::new(button, control);

    loop {
        // Active-low with pull-up: press is the falling edge
        input.wait_for_falling_edge().await;

        let Some(state) = handler.on_edge(now_ms()) else {
            continue;
        };

        if let Some(led) = indicator.as_mut() {
            led.set_level(Level::from(state.led_toggle));
        }

        debug!("{} pressed -> {}", button, state);
    }
}
