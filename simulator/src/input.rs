//! Window input translated into joystick samples.
//!
//! The stick is dragged with the left mouse button: the pointer position over
//! the window maps linearly onto `0..=ADC_MAX` per axis, and releasing the
//! button lets it spring back to centre. Arrow keys nudge the stick in fixed
//! steps and `Space` recentres it.
//!
//! Like the physical stick, pushing up raises the raw Y reading. The top row
//! of the window is therefore `ADC_MAX`, so the cursor ends up under the
//! pointer.

use embedded_graphics::prelude::Point;
use joystick_common::config::{ADC_MAX, SCREEN_HEIGHT, SCREEN_WIDTH};
use joystick_common::{AxisReader, AxisSamples};

/// Raw counts moved per arrow key press.
pub const NUDGE_STEP: u16 = 256;

/// Direction of an arrow key nudge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nudge {
    Left,
    Right,
    Up,
    Down,
}

/// Joystick driven from the simulator window.
#[derive(Debug)]
pub struct VirtualJoystick {
    samples: AxisSamples,
    dragging: bool,
}

impl VirtualJoystick {
    pub const fn new() -> Self {
        Self {
            samples: AxisSamples::CENTERED,
            dragging: false,
        }
    }

    /// Left button pressed at `point`: start dragging.
    pub fn grab(
        &mut self,
        point: Point,
    ) {
        self.dragging = true;
        self.samples = point_to_samples(point);
    }

    /// Pointer moved. Ignored unless dragging.
    pub fn drag(
        &mut self,
        point: Point,
    ) {
        if self.dragging {
            self.samples = point_to_samples(point);
        }
    }

    /// Left button released: spring back to centre.
    pub fn release(&mut self) {
        self.dragging = false;
        self.recenter();
    }

    pub fn nudge(
        &mut self,
        direction: Nudge,
    ) {
        let AxisSamples { x, y } = self.samples;
        self.samples = match direction {
            Nudge::Left => AxisSamples {
                x: x.saturating_sub(NUDGE_STEP),
                y,
            },
            Nudge::Right => AxisSamples {
                x: x.saturating_add(NUDGE_STEP).min(ADC_MAX),
                y,
            },
            Nudge::Up => AxisSamples {
                x,
                y: y.saturating_add(NUDGE_STEP).min(ADC_MAX),
            },
            Nudge::Down => AxisSamples {
                x,
                y: y.saturating_sub(NUDGE_STEP),
            },
        };
    }

    pub fn recenter(&mut self) { self.samples = AxisSamples::CENTERED; }
}

impl Default for VirtualJoystick {
    fn default() -> Self { Self::new() }
}

impl AxisReader for VirtualJoystick {
    fn read_axes(&mut self) -> AxisSamples { self.samples }
}

/// Map a window pixel onto the full ADC range, clamping outside the window.
fn point_to_samples(point: Point) -> AxisSamples {
    AxisSamples {
        x: scale(point.x, SCREEN_WIDTH),
        y: ADC_MAX - scale(point.y, SCREEN_HEIGHT),
    }
}

fn scale(
    coord: i32,
    extent: u32,
) -> u16 {
    let last = extent.saturating_sub(1).max(1);
    let coord = coord.clamp(0, last as i32) as u32;
    (coord * u32::from(ADC_MAX) / last) as u16
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered() {
        let mut joystick = VirtualJoystick::new();
        assert_eq!(joystick.read_axes(), AxisSamples::CENTERED);
    }

    #[test]
    fn test_drag_maps_window_corners() {
        let mut joystick = VirtualJoystick::new();
        joystick.grab(Point::new(0, 0));
        assert_eq!(joystick.read_axes(), AxisSamples { x: 0, y: ADC_MAX });

        joystick.drag(Point::new(127, 63));
        assert_eq!(joystick.read_axes(), AxisSamples { x: ADC_MAX, y: 0 });

        // Outside the window clamps to the rails
        joystick.drag(Point::new(-20, 500));
        assert_eq!(joystick.read_axes(), AxisSamples { x: 0, y: 0 });
    }

    #[test]
    fn test_cursor_follows_pointer() {
        let mut joystick = VirtualJoystick::new();
        joystick.grab(Point::new(127, 0));
        assert_eq!(
            joystick_common::control::cursor_position(joystick.read_axes()),
            joystick_common::render::CursorPosition::new(120, 0)
        );
        joystick.drag(Point::new(0, 63));
        assert_eq!(
            joystick_common::control::cursor_position(joystick.read_axes()),
            joystick_common::render::CursorPosition::new(0, 56)
        );
    }

    #[test]
    fn test_move_without_grab_ignored() {
        let mut joystick = VirtualJoystick::new();
        joystick.drag(Point::new(0, 0));
        assert_eq!(joystick.read_axes(), AxisSamples::CENTERED);
    }

    #[test]
    fn test_release_springs_back() {
        let mut joystick = VirtualJoystick::new();
        joystick.grab(Point::new(10, 10));
        joystick.release();
        assert_eq!(joystick.read_axes(), AxisSamples::CENTERED);

        joystick.drag(Point::new(0, 0));
        assert_eq!(joystick.read_axes(), AxisSamples::CENTERED);
    }

    #[test]
    fn test_nudge_saturates() {
        let mut joystick = VirtualJoystick::new();
        for _ in 0..20 {
            joystick.nudge(Nudge::Right);
            joystick.nudge(Nudge::Up);
        }
        assert_eq!(joystick.read_axes(), AxisSamples { x: ADC_MAX, y: ADC_MAX });

        joystick.nudge(Nudge::Left);
        assert_eq!(joystick.read_axes().x, ADC_MAX - NUDGE_STEP);

        joystick.recenter();
        assert_eq!(joystick.read_axes(), AxisSamples::CENTERED);
    }
}
