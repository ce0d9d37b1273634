//! Sampling and control loop.
//!
//! [`ControlLoop::step`] runs one iteration, in this order:
//!
//! 1. Sample the X axis, then the Y axis
//! 2. Take one snapshot of the shared [`ControlState`]
//! 3. Map each axis to a brightness through the deadzone (forced to 0 when
//!    the LEDs are disabled) and write both PWM channels
//! 4. Map the samples to a cursor position
//! 5. Render the frame and flush it
//!
//! The caller owns pacing: the firmware awaits a timer, the simulator sleeps.
//! Nothing is carried from one iteration to the next except what lives in
//! [`SharedControl`].

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::{ADC_MAX, CURSOR_MAX_X, CURSOR_MAX_Y, DEADZONE, PWM_TOP};
use crate::render::{CursorPosition, render_frame};
use crate::shared::SharedControl;
use crate::state::ControlState;

// =============================================================================
// Collaborators
// =============================================================================

/// One reading of both joystick axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSamples {
    /// Horizontal axis, `0..=ADC_MAX`.
    pub x: u16,
    /// Vertical axis, `0..=ADC_MAX`.
    pub y: u16,
}

impl AxisSamples {
    /// Both axes at rest.
    pub const CENTERED: Self = Self {
        x: DEADZONE.center(),
        y: DEADZONE.center(),
    };
}

/// Source of analog joystick samples.
pub trait AxisReader {
    /// Read the X axis, then the Y axis.
    fn read_axes(&mut self) -> AxisSamples;
}

/// Display collaborator: a drawable frame plus a way to push it out.
pub trait FrameSink {
    /// Buffer the render pipeline draws into.
    type Target: DrawTarget<Color = BinaryColor>;

    /// Frame buffer for the next render.
    fn target(&mut self) -> &mut Self::Target;

    /// Push the drawn frame to the panel. Failures are the sink's concern.
    fn flush(&mut self);
}

// =============================================================================
// Pure Mapping
// =============================================================================

/// PWM levels for the two LED channels, `0..=PWM_TOP`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness {
    /// Driven by the X axis.
    pub x: u16,
    /// Driven by the Y axis.
    pub y: u16,
}

impl Brightness {
    /// Both channels off.
    pub const OFF: Self = Self { x: 0, y: 0 };
}

/// Brightness for both channels, gated by `led_enabled`.
pub const fn brightness(
    samples: AxisSamples,
    state: &ControlState,
) -> Brightness {
    if !state.led_enabled {
        return Brightness::OFF;
    }
    Brightness {
        x: DEADZONE.map(samples.x, PWM_TOP),
        y: DEADZONE.map(samples.y, PWM_TOP),
    }
}

/// Cursor position for a pair of samples.
///
/// The Y axis is inverted: a higher raw Y sample (stick pushed up) moves the
/// cursor toward the top row.
pub const fn cursor_position(samples: AxisSamples) -> CursorPosition {
    let raw_y = if samples.y > ADC_MAX { ADC_MAX } else { samples.y };
    let x = samples.x as u32 * CURSOR_MAX_X / ADC_MAX as u32;
    let y = (ADC_MAX - raw_y) as u32 * CURSOR_MAX_Y / ADC_MAX as u32;
    CursorPosition::new(x, y)
}

// =============================================================================
// Control Loop
// =============================================================================

/// Everything one iteration computed, for logging and tests.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iteration {
    pub samples: AxisSamples,
    pub state: ControlState,
    pub brightness: Brightness,
    pub cursor: CursorPosition,
}

/// Owns the loop's collaborators and runs single iterations.
pub struct ControlLoop<'a, M, A, PX, PY, S>
where
    M: RawMutex,
{
    control: &'a SharedControl<M>,
    axes: A,
    pwm_x: PX,
    pwm_y: PY,
    sink: S,
}

impl<'a, M, A, PX, PY, S> ControlLoop<'a, M, A, PX, PY, S>
where
    M: RawMutex,
    A: AxisReader,
    PX: SetDutyCycle,
    PY: SetDutyCycle,
    S: FrameSink,
{
    /// Wire the loop to its collaborators.
    pub fn new(
        control: &'a SharedControl<M>,
        axes: A,
        pwm_x: PX,
        pwm_y: PY,
        sink: S,
    ) -> Self {
        Self {
            control,
            axes,
            pwm_x,
            pwm_y,
            sink,
        }
    }

    /// Run one iteration. See the module docs for the order of operations.
    pub fn step(&mut self) -> Iteration {
        let samples = self.axes.read_axes();
        let state = self.control.snapshot();

        let brightness = brightness(samples, &state);
        // A failed write is retried implicitly next iteration
        self.pwm_x.set_duty_cycle_fraction(brightness.x, PWM_TOP).ok();
        self.pwm_y.set_duty_cycle_fraction(brightness.y, PWM_TOP).ok();

        let cursor = cursor_position(samples);
        render_frame(self.sink.target(), cursor, &state);
        self.sink.flush();

        Iteration {
            samples,
            state,
            brightness,
            cursor,
        }
    }

    /// Axis reader, e.g. to feed new input in the simulator.
    #[inline]
    pub fn axes_mut(&mut self) -> &mut A { &mut self.axes }

    /// Display sink.
    #[inline]
    pub fn sink(&self) -> &S { &self.sink }

    /// Display sink, mutable.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S { &mut self.sink }

    /// PWM channels (X, Y).
    #[inline]
    pub fn pwm(&self) -> (&PX, &PY) { (&self.pwm_x, &self.pwm_y) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embedded_hal::pwm::ErrorType;

    use super::*;
    use crate::config::ADC_CENTER;
    use crate::frame::Frame;
    use crate::state::{BorderStyle, Button};

    struct FixedAxes(AxisSamples);

    impl AxisReader for FixedAxes {
        fn read_axes(&mut self) -> AxisSamples { self.0 }
    }

    #[derive(Default)]
    struct RecordingPwm {
        level: Option<u16>,
    }

    impl ErrorType for RecordingPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for RecordingPwm {
        fn max_duty_cycle(&self) -> u16 { PWM_TOP }

        fn set_duty_cycle(
            &mut self,
            duty: u16,
        ) -> Result<(), Self::Error> {
            self.level = Some(duty);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CapturedFrames {
        frame: Frame,
        flushed: Vec<Frame>,
    }

    impl FrameSink for CapturedFrames {
        type Target = Frame;

        fn target(&mut self) -> &mut Frame { &mut self.frame }

        fn flush(&mut self) { self.flushed.push(self.frame.clone()); }
    }

    type TestLoop<'a> = ControlLoop<'a, NoopRawMutex, FixedAxes, RecordingPwm, RecordingPwm, CapturedFrames>;

    fn test_loop(
        control: &SharedControl<NoopRawMutex>,
        x: u16,
        y: u16,
    ) -> TestLoop<'_> {
        ControlLoop::new(
            control,
            FixedAxes(AxisSamples { x, y }),
            RecordingPwm::default(),
            RecordingPwm::default(),
            CapturedFrames::default(),
        )
    }

    #[test]
    fn test_cursor_position_center() {
        // 2047 * 56 / 4095 = 27 (truncated)
        assert_eq!(cursor_position(AxisSamples::CENTERED), CursorPosition::new(60, 27));
    }

    #[test]
    fn test_cursor_position_corners() {
        assert_eq!(cursor_position(AxisSamples { x: 0, y: ADC_MAX }), CursorPosition::new(0, 0));
        assert_eq!(
            cursor_position(AxisSamples { x: ADC_MAX, y: 0 }),
            CursorPosition::new(CURSOR_MAX_X, CURSOR_MAX_Y)
        );
        assert_eq!(cursor_position(AxisSamples { x: 0, y: 0 }), CursorPosition::new(0, 56));
        assert_eq!(cursor_position(AxisSamples { x: ADC_MAX, y: ADC_MAX }), CursorPosition::new(120, 0));
    }

    #[test]
    fn test_higher_y_sample_moves_cursor_up() {
        let low = cursor_position(AxisSamples { x: ADC_CENTER, y: 1000 });
        let high = cursor_position(AxisSamples { x: ADC_CENTER, y: 3000 });
        assert!(high.y < low.y);
    }

    #[test]
    fn test_y_inverted_across_range() {
        for y in 0..=ADC_MAX {
            let expected = u32::from(ADC_MAX - y) * CURSOR_MAX_Y / u32::from(ADC_MAX);
            assert_eq!(cursor_position(AxisSamples { x: 0, y }).y, expected, "sample {y}");
        }
    }

    #[test]
    fn test_x_not_inverted() {
        let left = cursor_position(AxisSamples { x: 1000, y: ADC_CENTER });
        let right = cursor_position(AxisSamples { x: 3000, y: ADC_CENTER });
        assert!(right.x > left.x);
    }

    #[test]
    fn test_brightness_gated_by_led_enabled() {
        let disabled = ControlState {
            led_enabled: false,
            ..ControlState::new()
        };
        for samples in [
            AxisSamples { x: 0, y: 0 },
            AxisSamples { x: ADC_MAX, y: ADC_MAX },
            AxisSamples { x: ADC_MAX, y: 0 },
            AxisSamples::CENTERED,
        ] {
            assert_eq!(brightness(samples, &disabled), Brightness::OFF);
        }
    }

    #[test]
    fn test_brightness_at_center_is_zero() {
        assert_eq!(brightness(AxisSamples::CENTERED, &ControlState::new()), Brightness::OFF);
    }

    #[test]
    fn test_end_to_end_center() {
        let control = SharedControl::new();
        let mut ctl = test_loop(&control, 2048, 2048);

        let it = ctl.step();
        assert_eq!(it.cursor, CursorPosition::new(60, 27));
        assert_eq!(it.brightness, Brightness::OFF);

        let (pwm_x, pwm_y) = ctl.pwm();
        assert_eq!(pwm_x.level, Some(0));
        assert_eq!(pwm_y.level, Some(0));

        let frame = &ctl.sink().flushed[0];
        assert!(frame.pixel(60, 27));
        assert!(frame.pixel(67, 34));
        assert!(!frame.pixel(67, 35));
    }

    #[test]
    fn test_end_to_end_full_deflection() {
        let control = SharedControl::new();
        let mut ctl = test_loop(&control, 4095, 0);

        let it = ctl.step();
        // Y = 0 is the stick pulled fully down
        assert_eq!(it.cursor, CursorPosition::new(120, 56));
        // Upper rail is one count short of the lower one
        assert_eq!(it.brightness, Brightness { x: 4092, y: PWM_TOP });

        let (pwm_x, pwm_y) = ctl.pwm();
        assert_eq!(pwm_x.level, Some(4092));
        assert_eq!(pwm_y.level, Some(PWM_TOP));
    }

    #[test]
    fn test_disabled_leds_write_zero() {
        let control = SharedControl::new();
        control.update(|s| s.on_press(Button::A));
        let mut ctl = test_loop(&control, 4095, 0);

        let it = ctl.step();
        assert_eq!(it.brightness, Brightness::OFF);
        assert_eq!(ctl.pwm().0.level, Some(0));
        assert_eq!(ctl.pwm().1.level, Some(0));
        // Cursor still follows the stick
        assert_eq!(it.cursor, CursorPosition::new(120, 56));
    }

    #[test]
    fn test_same_samples_give_identical_frames() {
        let control = SharedControl::new();
        let mut ctl = test_loop(&control, 3100, 900);

        ctl.step();
        ctl.step();

        let flushed = &ctl.sink().flushed;
        assert_eq!(flushed.len(), 2);
        assert_eq!(flushed[0].as_bytes(), flushed[1].as_bytes());
    }

    #[test]
    fn test_state_change_visible_next_iteration() {
        let control = SharedControl::new();
        let mut ctl = test_loop(&control, 2048, 2048);

        let before = ctl.step();
        assert_eq!(before.state.border, BorderStyle::ThinSolid);

        control.update(|s| s.on_press(Button::Joystick));
        let after = ctl.step();
        assert_eq!(after.state.border, BorderStyle::ThinDotted);

        let flushed = &ctl.sink().flushed;
        assert_ne!(flushed[0], flushed[1]);
        // Dotted border leaves odd rows of the left edge dark
        assert!(!flushed[1].pixel(0, 1));
        assert!(flushed[0].pixel(0, 1));
    }

    #[test]
    fn test_axes_mut_feeds_new_samples() {
        let control = SharedControl::new();
        let mut ctl = test_loop(&control, 2048, 2048);
        ctl.axes_mut().0 = AxisSamples { x: 0, y: ADC_MAX };

        let it = ctl.step();
        assert_eq!(it.cursor, CursorPosition::new(0, 0));
    }
}
