//! Foreground/background palette

use core::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monochrome pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel off (light)
    Off,
    /// Pixel on (dark)
    On,
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }
}

/// Start-up palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Palette {
    /// Dark pixels on a light background
    #[default]
    Normal,
    /// Light pixels on a dark background
    Inverted,
}

/// Foreground/background pair
///
/// Only the foreground is stored; the background is always its
/// complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayColors {
    fg: Color,
}

impl DisplayColors {
    pub const fn new(palette: Palette) -> Self {
        let fg = match palette {
            Palette::Normal => Color::On,
            Palette::Inverted => Color::Off,
        };
        Self { fg }
    }

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn bg(&self) -> Color {
        !self.fg
    }

    /// Exchange foreground and background
    pub fn swap(&mut self) {
        self.fg = !self.fg;
    }

    pub fn palette(&self) -> Palette {
        match self.fg {
            Color::On => Palette::Normal,
            Color::Off => Palette::Inverted,
        }
    }
}

impl Default for DisplayColors {
    fn default() -> Self {
        Self::new(Palette::Normal)
    }
}
