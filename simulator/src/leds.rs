//! PWM LED stand-in.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use joystick_common::config::PWM_TOP;

/// Remembers the last duty cycle written, on the same `0..=PWM_TOP` scale as
/// the firmware's PWM slice.
#[derive(Default)]
pub struct VirtualLed {
    duty: u16,
}

impl VirtualLed {
    pub fn duty(&self) -> u16 { self.duty }

    /// Duty cycle as a whole percentage.
    pub fn percent(&self) -> u32 { u32::from(self.duty) * 100 / u32::from(PWM_TOP) }
}

impl ErrorType for VirtualLed {
    type Error = Infallible;
}

impl SetDutyCycle for VirtualLed {
    fn max_duty_cycle(&self) -> u16 { PWM_TOP }

    fn set_duty_cycle(
        &mut self,
        duty: u16,
    ) -> Result<(), Self::Error> {
        self.duty = duty.min(PWM_TOP);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
