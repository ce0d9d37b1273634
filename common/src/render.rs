//! Full-frame render pipeline.
//!
//! Every frame is rebuilt from scratch, with no diffing against the previous one:
//!
//! 1. Clear to off
//! 2. Filled [`CURSOR_SIZE`] square at the cursor position
//! 3. Border according to [`BorderStyle`]
//!
//! # Border Styles
//!
//! | Style | Pixels |
//! |-------|--------|
//! | Solid | `thickness` concentric 1px outlines, inset `0..thickness` |
//! | Dotted | Even rows of the left/right edges, even columns of the top/bottom edges |
//!
//! Drawing errors are ignored per primitive; a frame is fire-and-forget.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::{CURSOR_MAX_X, CURSOR_MAX_Y, CURSOR_SIZE};
use crate::state::{BorderStyle, ControlState, LineStyle};

/// Top-left corner of the cursor glyph, already clamped to the screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub x: u32,
    pub y: u32,
}

impl CursorPosition {
    /// Create a position, clamping it so the glyph stays fully visible.
    pub const fn new(
        x: u32,
        y: u32,
    ) -> Self {
        Self {
            x: if x > CURSOR_MAX_X { CURSOR_MAX_X } else { x },
            y: if y > CURSOR_MAX_Y { CURSOR_MAX_Y } else { y },
        }
    }

    /// Position as an embedded-graphics point.
    #[inline]
    pub const fn to_point(self) -> Point { Point::new(self.x as i32, self.y as i32) }
}

/// Draw a complete frame: clear, cursor, border.
pub fn render_frame<D>(
    display: &mut D,
    cursor: CursorPosition,
    state: &ControlState,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off).ok();
    draw_cursor(display, cursor);
    draw_border(display, state.border);
}

/// Draw the filled cursor square.
pub fn draw_cursor<D>(
    display: &mut D,
    cursor: CursorPosition,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(cursor.to_point(), Size::new(CURSOR_SIZE, CURSOR_SIZE))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)
        .ok();
}

/// Draw the display border in the given style.
pub fn draw_border<D>(
    display: &mut D,
    border: BorderStyle,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = display.bounding_box().size;
    match border.line_style() {
        LineStyle::Solid => draw_solid_border(display, size, border.thickness()),
        LineStyle::Dotted => draw_dotted_border(display, size),
    }
}

fn draw_solid_border<D>(
    display: &mut D,
    size: Size,
    thickness: u32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let outline = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    for inset in 0..thickness {
        if size.width <= 2 * inset || size.height <= 2 * inset {
            break;
        }
        Rectangle::new(
            Point::new(inset as i32, inset as i32),
            Size::new(size.width - 2 * inset, size.height - 2 * inset),
        )
        .into_styled(outline)
        .draw(display)
        .ok();
    }
}

fn draw_dotted_border<D>(
    display: &mut D,
    size: Size,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let right = size.width as i32 - 1;
    let bottom = size.height as i32 - 1;

    let vertical = (0..size.height as i32)
        .step_by(2)
        .flat_map(|y| [Point::new(0, y), Point::new(right, y)]);
    let horizontal = (0..size.width as i32)
        .step_by(2)
        .flat_map(|x| [Point::new(x, 0), Point::new(x, bottom)]);

    display
        .draw_iter(vertical.chain(horizontal).map(|p| Pixel(p, BinaryColor::On)))
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
