//! 128x64 monochrome framebuffer
//!
//! Pixels are stored the way the LCD controllers lay out their RAM:
//! 8 pages of 8 rows, one byte per column and page, LSB on top.
//!
//! Lines, circles and rectangles are rasterized by embedded-graphics
//! primitives drawn onto the framebuffer through its `DrawTarget`
//! implementation. Fill patterns and inversion work on the buffer directly
//! since they need to read pixels back.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};
use monochron_core::state::Color;
use monochron_core::traits::{Bitmap, FillPattern, Font, Lcd, Orientation};

use crate::canvas::TextCanvas;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGES: usize = HEIGHT / 8;

const MAX_X: u32 = WIDTH as u32 - 1;
const MAX_Y: u32 = HEIGHT as u32 - 1;

/// Unwrap a result whose error cannot happen
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

pub(crate) fn to_binary(color: Color) -> BinaryColor {
    match color {
        Color::On => BinaryColor::On,
        Color::Off => BinaryColor::Off,
    }
}

fn outline(color: Color) -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyleBuilder::new()
        .stroke_color(to_binary(color))
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

fn rectangle(x: u8, y: u8, width: u8, height: u8) -> Rectangle {
    Rectangle::new(
        Point::new(i32::from(x), i32::from(y)),
        Size::new(u32::from(width), u32::from(height)),
    )
}

fn circle(x: u8, y: u8, radius: u8) -> Circle {
    Circle::with_center(
        Point::new(i32::from(x), i32::from(y)),
        2 * u32::from(radius) + 1,
    )
}

/// In-memory LCD
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank framebuffer (all pixels off)
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Raw page data, e.g. for flushing to a controller
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.pages
    }

    /// Whether the pixel at (x, y) is on; outside the panel reads as off
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        self.pages
            .get(usize::from(y) / 8)
            .and_then(|page| page.get(usize::from(x)))
            .map(|byte| byte & (1 << (y % 8)) != 0)
            .unwrap_or(false)
    }

    /// Number of pixels that are on inside a rectangle
    pub fn count_on(&self, x: u8, y: u8, width: u8, height: u8) -> usize {
        rectangle(x, y, width, height)
            .points()
            .filter(|point| self.pixel_at(*point) == Some(true))
            .count()
    }

    fn slot(&mut self, point: Point) -> Option<(&mut u8, u8)> {
        let (x, y): (u32, u32) = point.try_into().ok()?;
        if x > MAX_X || y > MAX_Y {
            return None;
        }
        let byte = self.pages.get_mut(y as usize / 8)?.get_mut(x as usize)?;
        Some((byte, 1 << (y % 8)))
    }

    fn pixel_at(&self, point: Point) -> Option<bool> {
        let x = u8::try_from(point.x).ok()?;
        let y = u8::try_from(point.y).ok()?;
        Some(self.pixel(x, y))
    }

    /// Set a pixel; points outside the panel are ignored
    pub fn set_pixel(&mut self, point: Point, color: BinaryColor) {
        if let Some((byte, mask)) = self.slot(point) {
            match color {
                BinaryColor::On => *byte |= mask,
                BinaryColor::Off => *byte &= !mask,
            }
        }
    }

    fn invert_pixel(&mut self, point: Point) {
        if let Some((byte, mask)) = self.slot(point) {
            *byte ^= mask;
        }
    }

    /// Paint every point of an area with a fill pattern
    fn fill_points<I>(&mut self, points: I, pattern: FillPattern, color: Color)
    where
        I: IntoIterator<Item = Point>,
    {
        for point in points {
            if pattern == FillPattern::Inverse {
                self.invert_pixel(point);
                continue;
            }
            let (Ok(x), Ok(y)) = (u8::try_from(point.x), u8::try_from(point.y)) else {
                continue;
            };
            let value = if pattern.is_set(x, y) { color } else { !color };
            self.set_pixel(point, to_binary(value));
        }
    }
}

impl core::fmt::Debug for FrameBuffer {
    /// Renders the panel as rows of `#` and `.`
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for y in 0..HEIGHT as u8 {
            for x in 0..WIDTH as u8 {
                f.write_str(if self.pixel(x, y) { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        let byte: u8 = match color {
            BinaryColor::On => 0xff,
            BinaryColor::Off => 0x00,
        };
        self.pages = [[byte; WIDTH]; PAGES];
        Ok(())
    }
}

impl Lcd for FrameBuffer {
    fn clear(&mut self, color: Color) {
        infallible(DrawTarget::clear(self, to_binary(color)));
    }

    fn dot(&mut self, x: u8, y: u8, color: Color) {
        self.set_pixel(Point::new(i32::from(x), i32::from(y)), to_binary(color));
    }

    fn line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Color) {
        let line = Line::new(
            Point::new(i32::from(x0), i32::from(y0)),
            Point::new(i32::from(x1), i32::from(y1)),
        );
        infallible(
            line.into_styled(PrimitiveStyle::with_stroke(to_binary(color), 1))
                .draw(self),
        );
    }

    fn rect(&mut self, x: u8, y: u8, width: u8, height: u8, color: Color) {
        infallible(
            rectangle(x, y, width, height)
                .into_styled(outline(color))
                .draw(self),
        );
    }

    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8, pattern: FillPattern, color: Color) {
        self.fill_points(rectangle(x, y, width, height).points(), pattern, color);
    }

    fn circle(&mut self, x: u8, y: u8, radius: u8, color: Color) {
        infallible(circle(x, y, radius).into_styled(outline(color)).draw(self));
    }

    fn fill_circle(&mut self, x: u8, y: u8, radius: u8, pattern: FillPattern, color: Color) {
        self.fill_points(circle(x, y, radius).points(), pattern, color);
    }

    fn bitmap(&mut self, x: u8, y: u8, bitmap: &Bitmap<'_>, color: Color) {
        for by in 0..bitmap.height {
            for bx in 0..bitmap.width {
                let value = if bitmap.is_set(bx, by) { color } else { !color };
                let point = Point::new(i32::from(x) + i32::from(bx), i32::from(y) + i32::from(by));
                self.set_pixel(point, to_binary(value));
            }
        }
    }

    fn text(
        &mut self,
        x: u8,
        y: u8,
        text: &str,
        font: Font,
        scale: u8,
        orientation: Orientation,
        color: Color,
    ) -> u8 {
        TextCanvas::new(self, x, y, scale, orientation).draw_text(text, font, color)
    }
}
