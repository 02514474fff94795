//! Scaled and rotated text canvas
//!
//! embedded-graphics renders text left to right at 1:1. `TextCanvas` sits
//! between the text renderer and the framebuffer, blowing every pixel up
//! to a `scale` x `scale` block and turning the result around the anchor
//! point for vertical text.

use core::convert::Infallible;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_4X6, FONT_5X7, FONT_6X10},
        MonoFont, MonoTextStyleBuilder,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use monochron_core::state::Color;
use monochron_core::traits::{Font, Orientation};

use crate::framebuffer::{to_binary, FrameBuffer};

/// Bounds of the local text plane
const CANVAS_SIZE: u32 = 256;

pub(crate) fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Small => &FONT_4X6,
        Font::Medium => &FONT_5X7,
        Font::Large => &FONT_6X10,
    }
}

/// Draw target mapping text-local pixels onto the framebuffer
pub(crate) struct TextCanvas<'a> {
    target: &'a mut FrameBuffer,
    origin: Point,
    scale: i32,
    orientation: Orientation,
}

impl<'a> TextCanvas<'a> {
    pub(crate) fn new(
        target: &'a mut FrameBuffer,
        x: u8,
        y: u8,
        scale: u8,
        orientation: Orientation,
    ) -> Self {
        Self {
            target,
            origin: Point::new(i32::from(x), i32::from(y)),
            scale: i32::from(scale.max(1)),
            orientation,
        }
    }

    /// Panel position of a scaled text-local point
    fn map(&self, local: Point) -> Point {
        let o = self.origin;
        match self.orientation {
            Orientation::Horizontal => Point::new(o.x + local.x, o.y + local.y),
            Orientation::BottomUp => Point::new(o.x + local.y, o.y - local.x),
            Orientation::TopDown => Point::new(o.x - local.y, o.y + local.x),
        }
    }

    /// Render `text` with cell backgrounds in the complement color
    ///
    /// Returns the advance along the text direction in panel pixels.
    pub(crate) fn draw_text(mut self, text: &str, font: Font, color: Color) -> u8 {
        let style = MonoTextStyleBuilder::new()
            .font(mono_font(font))
            .text_color(to_binary(color))
            .background_color(to_binary(!color))
            .build();

        let next = match Text::with_baseline(text, Point::zero(), style, Baseline::Top)
            .draw(&mut self)
        {
            Ok(next) => next,
            Err(never) => match never {},
        };

        u8::try_from(next.x.saturating_mul(self.scale)).unwrap_or(u8::MAX)
    }
}

impl OriginDimensions for TextCanvas<'_> {
    fn size(&self) -> Size {
        Size::new(CANVAS_SIZE, CANVAS_SIZE)
    }
}

impl DrawTarget for TextCanvas<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let base = point * self.scale;
            for dy in 0..self.scale {
                for dx in 0..self.scale {
                    let panel = self.map(base + Point::new(dx, dy));
                    self.target.set_pixel(panel, color);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monochron_core::traits::Lcd;

    #[test]
    fn test_horizontal_width_and_background() {
        let mut fb = FrameBuffer::new();
        Lcd::clear(&mut fb, Color::On);

        let width = fb.text(10, 20, "12", Font::Small, 1, Orientation::Horizontal, Color::On);
        assert_eq!(width, 8);
        // Cell background is painted in the complement color
        assert!(fb.count_on(10, 20, 8, 6) < 8 * 6);
        // Outside the cells stays untouched
        assert!(fb.pixel(18, 20));
        assert!(fb.pixel(10, 26));
    }

    #[test]
    fn test_scale_multiplies_width() {
        let mut fb = FrameBuffer::new();
        let width = fb.text(0, 0, "07", Font::Large, 2, Orientation::Horizontal, Color::On);
        assert_eq!(width, 24);
        let lit = fb.count_on(0, 0, 24, 20);

        let mut single = FrameBuffer::new();
        single.text(0, 0, "07", Font::Large, 1, Orientation::Horizontal, Color::On);
        assert_eq!(lit, 4 * single.count_on(0, 0, 12, 10));
    }

    #[test]
    fn test_vertical_orientations() {
        let mut up = FrameBuffer::new();
        let width = up.text(10, 40, "8", Font::Medium, 1, Orientation::BottomUp, Color::On);
        assert_eq!(width, 5);
        // Runs upwards from the anchor, cell height to the right
        assert!(up.count_on(10, 36, 7, 5) > 0);
        assert_eq!(up.count_on(0, 41, 128, 23), 0);
        assert_eq!(up.count_on(0, 0, 10, 64), 0);

        let mut down = FrameBuffer::new();
        down.text(40, 10, "8", Font::Medium, 1, Orientation::TopDown, Color::On);
        // Runs downwards from the anchor, cell height to the left
        assert!(down.count_on(34, 10, 7, 5) > 0);
        assert_eq!(down.count_on(0, 0, 128, 10), 0);
        assert_eq!(down.count_on(41, 0, 87, 64), 0);
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut fb = FrameBuffer::new();
        assert_eq!(fb.text(0, 0, "", Font::Small, 1, Orientation::Horizontal, Color::On), 0);
        assert_eq!(fb.count_on(0, 0, 128, 64), 0);
    }
}
