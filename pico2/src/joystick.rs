//! Analog joystick on ADC1 (X) and ADC0 (Y).

use defmt::{Debug2Format, warn};
use embassy_rp::adc::{self, Adc, Channel};
use joystick_common::config::{ADC_CENTER, ADC_MAX};
use joystick_common::{AxisReader, AxisSamples};

/// Blocking two-axis reader.
pub struct Joystick {
    adc: Adc<'static, adc::Blocking>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl Joystick {
    pub fn new(
        adc: Adc<'static, adc::Blocking>,
        x: Channel<'static>,
        y: Channel<'static>,
    ) -> Self {
        Self { adc, x, y }
    }
}

/// Read one channel. A failed conversion reads as the rest position so the
/// LEDs stay dark and the cursor stays put.
fn read_axis(
    adc: &mut Adc<'static, adc::Blocking>,
    channel: &mut Channel<'static>,
    axis: &str,
) -> u16 {
    match adc.blocking_read(channel) {
        Ok(raw) => raw.min(ADC_MAX),
        Err(e) => {
            warn!("ADC read failed on {} axis: {}", axis, Debug2Format(&e));
            ADC_CENTER
        }
    }
}

impl AxisReader for Joystick {
    fn read_axes(&mut self) -> AxisSamples {
        let x = read_axis(&mut self.adc, &mut self.x, "X");
        let y = read_axis(&mut self.adc, &mut self.y, "Y");
        AxisSamples { x, y }
    }
}
