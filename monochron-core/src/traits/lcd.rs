//! LCD primitive trait
//!
//! The LCD driver owns rasterization. Faces only issue primitive draw
//! calls in an explicit color, which they take from the shared palette.

use crate::state::Color;

/// LCD width in pixels
pub const LCD_WIDTH: u8 = 128;

/// LCD height in pixels
pub const LCD_HEIGHT: u8 = 64;

/// Fill patterns for rectangles and circles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FillPattern {
    /// Every pixel in the draw color
    Full,
    /// Checkerboard of draw color and its complement
    Half,
    /// One pixel in three, diagonal rising
    ThirdUp,
    /// One pixel in three, diagonal falling
    ThirdDown,
    /// Every pixel in the complement of the draw color
    Blank,
    /// Flip every pixel, ignoring the draw color
    Inverse,
}

impl FillPattern {
    /// Whether the pattern paints (x, y) in the draw color
    ///
    /// Not meaningful for `Inverse`, which reads back the pixel instead.
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        match self {
            FillPattern::Full => true,
            FillPattern::Half => (x ^ y) & 1 == 0,
            FillPattern::ThirdUp => (u16::from(x) + u16::from(y)) % 3 == 0,
            FillPattern::ThirdDown => (u16::from(x) + 3 - u16::from(y) % 3) % 3 == 0,
            FillPattern::Blank | FillPattern::Inverse => false,
        }
    }
}

/// Text fonts available on the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 4x6 pixel cells, used for the alarm/date area
    Small,
    /// 5x7 pixel cells
    Medium,
    /// 6x10 pixel cells
    Large,
}

impl Font {
    /// Character cell width in pixels
    pub const fn cell_width(&self) -> u8 {
        match self {
            Font::Small => 4,
            Font::Medium => 5,
            Font::Large => 6,
        }
    }

    /// Character cell height in pixels
    pub const fn cell_height(&self) -> u8 {
        match self {
            Font::Small => 6,
            Font::Medium => 7,
            Font::Large => 10,
        }
    }
}

/// Text orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Left to right
    #[default]
    Horizontal,
    /// Rotated 90 degrees counter-clockwise, text runs upwards
    BottomUp,
    /// Rotated 90 degrees clockwise, text runs downwards
    TopDown,
}

/// A 1-bit bitmap in LCD page layout
///
/// Each byte is a vertical strip of 8 pixels, LSB on top. Columns are
/// stored left to right, then the next 8-pixel page below.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    pub width: u8,
    pub height: u8,
    pub data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    pub const fn new(width: u8, height: u8, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Whether pixel (x, y) of the bitmap is set
    ///
    /// Pixels outside the bitmap or the backing data read as unset.
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = usize::from(y / 8) * usize::from(self.width) + usize::from(x);
        self.data
            .get(index)
            .map(|byte| byte & (1 << (y % 8)) != 0)
            .unwrap_or(false)
    }
}

/// LCD driver primitives
///
/// Coordinates are pixels with the origin in the top-left corner.
/// Implementations clip anything outside the panel.
pub trait Lcd {
    /// Fill the entire panel with `color`
    fn clear(&mut self, color: Color);

    /// Set a single pixel
    fn dot(&mut self, x: u8, y: u8, color: Color);

    /// Draw a line between two points, both inclusive
    fn line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Color);

    /// Draw a rectangle outline
    fn rect(&mut self, x: u8, y: u8, width: u8, height: u8, color: Color);

    /// Fill a rectangle with a pattern
    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8, pattern: FillPattern, color: Color);

    /// Draw a circle outline around (x, y)
    fn circle(&mut self, x: u8, y: u8, radius: u8, color: Color);

    /// Fill a circle around (x, y) with a pattern
    fn fill_circle(&mut self, x: u8, y: u8, radius: u8, pattern: FillPattern, color: Color);

    /// Blit a bitmap; set bits take `color`, clear bits its complement
    fn bitmap(&mut self, x: u8, y: u8, bitmap: &Bitmap<'_>, color: Color);

    /// Draw text with its top-left corner at (x, y)
    ///
    /// The character cells are painted in the complement of `color`
    /// first, so text overwrites whatever was there.
    /// Returns the length of the drawn text in pixels along its direction.
    #[allow(clippy::too_many_arguments)]
    fn text(
        &mut self,
        x: u8,
        y: u8,
        text: &str,
        font: Font,
        scale: u8,
        orientation: Orientation,
        color: Color,
    ) -> u8;

    /// Invert every pixel in a rectangle
    fn invert_rect(&mut self, x: u8, y: u8, width: u8, height: u8) {
        self.fill_rect(x, y, width, height, FillPattern::Inverse, Color::On);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_pattern_is_checkerboard() {
        let half = FillPattern::Half;
        assert!(half.is_set(0, 0));
        assert!(!half.is_set(1, 0));
        assert!(!half.is_set(0, 1));
        assert!(half.is_set(1, 1));
    }

    #[test]
    fn test_third_patterns_cover_one_in_three() {
        for pattern in [FillPattern::ThirdUp, FillPattern::ThirdDown] {
            let set = (0..3).filter(|x| pattern.is_set(*x, 0)).count();
            assert_eq!(set, 1);
        }
    }

    #[test]
    fn test_bitmap_page_layout() {
        // 2 columns, 10 rows: two pages
        let data = [0b0000_0001, 0b1000_0000, 0b0000_0010, 0b0000_0000];
        let bitmap = Bitmap::new(2, 10, &data);
        assert!(bitmap.is_set(0, 0));
        assert!(bitmap.is_set(1, 7));
        assert!(bitmap.is_set(0, 9));
        assert!(!bitmap.is_set(1, 9));
        // Out of bounds
        assert!(!bitmap.is_set(2, 0));
        assert!(!bitmap.is_set(0, 10));
    }

    #[test]
    fn test_font_cells() {
        assert_eq!(Font::Small.cell_width(), 4);
        assert_eq!(Font::Small.cell_height(), 6);
        assert_eq!(Font::Large.cell_height(), 10);
    }
}
