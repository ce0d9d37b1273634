//! Off-screen monochrome framebuffer.
//!
//! [`Frame`] implements `DrawTarget<Color = BinaryColor>` over a fixed
//! 1 KiB buffer in SSD1306 page order: each byte is a vertical strip of
//! 8 pixels, LSB at the top, pages of [`SCREEN_WIDTH`] bytes.
//!
//! This is a host-side test double: neither the firmware (which draws into
//! the SSD1306 driver's buffer) nor the simulator draws into it. It exists so
//! render and control loop tests can read pixels back and compare frames.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Buffer size in bytes (one bit per pixel).
pub const FRAME_BYTES: usize = WIDTH * HEIGHT / 8;

/// Full-screen 1-bit bitmap for inspecting rendered frames in tests.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    buffer: [u8; FRAME_BYTES],
}

impl Frame {
    /// Create a blank frame.
    pub const fn new() -> Self {
        Self {
            buffer: [0u8; FRAME_BYTES],
        }
    }

    /// Fill every pixel with `color`.
    pub fn clear_buffer(
        &mut self,
        color: BinaryColor,
    ) {
        let byte = if color.is_on() { 0xFF } else { 0x00 };
        self.buffer.fill(byte);
    }

    /// Read back one pixel. Out-of-bounds coordinates read as off.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        match Self::locate(x, y) {
            Some((idx, mask)) => self.buffer[idx] & mask != 0,
            None => false,
        }
    }

    /// Number of lit pixels.
    pub fn lit_pixels(&self) -> u32 { self.buffer.iter().map(|b| b.count_ones()).sum() }

    /// Raw buffer in panel page order.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] { &self.buffer }

    /// Byte index and bit mask for a pixel, or `None` when off-screen.
    #[inline]
    fn locate(
        x: i32,
        y: i32,
    ) -> Option<(usize, u8)> {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let (x, y) = (x as usize, y as usize);
            Some(((y / 8) * WIDTH + x, 1 << (y % 8)))
        } else {
            None
        }
    }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: BinaryColor,
    ) {
        if let Some((idx, mask)) = Self::locate(x, y) {
            if color.is_on() {
                self.buffer[idx] |= mask;
            } else {
                self.buffer[idx] &= !mask;
            }
        }
    }
}

impl Default for Frame {
    fn default() -> Self { Self::new() }
}

impl core::fmt::Debug for Frame {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Frame").field("lit_pixels", &self.lit_pixels()).finish()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        for y in drawable_area.rows() {
            for x in drawable_area.columns() {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
