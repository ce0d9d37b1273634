//! Simulator window as the control loop's display.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use joystick_common::FrameSink;
use joystick_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Pixel scale of the window.
const WINDOW_SCALE: u32 = 4;

/// 128x64 monochrome display shown in an SDL window.
pub struct WindowSink {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
}

impl WindowSink {
    pub fn new(title: &str) -> Self {
        let output_settings = OutputSettingsBuilder::new()
            .scale(WINDOW_SCALE)
            .theme(BinaryColorTheme::OledBlue)
            .build();
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            window: Window::new(title, &output_settings),
        }
    }

    /// Drain pending window events. Only valid after the first flush.
    pub fn events(&mut self) -> Vec<SimulatorEvent> { self.window.events().collect() }
}

impl FrameSink for WindowSink {
    type Target = SimulatorDisplay<BinaryColor>;

    fn target(&mut self) -> &mut Self::Target { &mut self.display }

    fn flush(&mut self) { self.window.update(&self.display); }
}
