//! SSD1306 128x64 OLED on I2C1.
//!
//! The panel runs in buffered graphics mode: the render pipeline draws into
//! the driver's RAM buffer and [`FrameSink::flush`] pushes the whole buffer
//! over I2C.

use defmt::{Debug2Format, warn};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use joystick_common::FrameSink;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::DISPLAY_I2C_ADDRESS;

/// Blocking I2C bus the display sits on.
pub type DisplayBus = I2c<'static, I2C1, i2c::Blocking>;

type Panel = Ssd1306<I2CInterface<DisplayBus>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Display sink for the control loop.
pub struct Oled {
    panel: Panel,
}

impl Oled {
    pub fn new(bus: DisplayBus) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(bus, DISPLAY_I2C_ADDRESS);
        let panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();
        Self { panel }
    }

    /// Initialize the controller, then clear and flush once so the panel
    /// starts blank.
    pub fn init(&mut self) -> Result<(), impl core::fmt::Debug> {
        self.panel.init().and_then(|()| {
            self.panel.clear_buffer();
            self.panel.flush()
        })
    }
}

impl FrameSink for Oled {
    type Target = Panel;

    fn target(&mut self) -> &mut Self::Target { &mut self.panel }

    fn flush(&mut self) {
        // Dropped frame; the next iteration redraws everything
        if let Err(e) = self.panel.flush() {
            warn!("Display flush failed: {}", Debug2Format(&e));
        }
    }
}
