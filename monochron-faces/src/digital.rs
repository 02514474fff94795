//! Digital clock face
//!
//! Large `HH:MM:SS` or `HH:MM` digits across the middle of the panel.
//! `Set` switches between 24-hour and 12-hour display.

use heapless::String;
use monochron_core::area::{AlarmDateArea, AreaMode};
use monochron_core::format::two_digits;
use monochron_core::state::{ClockContext, DateTime};
use monochron_core::traits::lcd::LCD_WIDTH;
use monochron_core::traits::{
    Button, ButtonOutcome, ClockFace, FillPattern, Font, Lcd, Orientation,
};
use monochron_core::InitFlavor;

const DIGIT_FONT: Font = Font::Large;
const DIGIT_SCALE: u8 = 2;

/// Top of the digit row
pub const DIGITS_Y: u8 = 16;
const DIGITS_HEIGHT: u8 = 10 * DIGIT_SCALE;

const SUFFIX_WIDTH: u8 = 8;
const SUFFIX_HEIGHT: u8 = 6;

/// Time as shown, e.g. `13:45:07`, `01:45`
pub fn time_text(time: &DateTime, seconds: bool, hour_24: bool) -> String<8> {
    let hour = if hour_24 {
        time.hour
    } else {
        match time.hour % 12 {
            0 => 12,
            hour => hour,
        }
    };

    let mut text = String::new();
    let _ = text.push_str(&two_digits(hour));
    let _ = text.push(':');
    let _ = text.push_str(&two_digits(time.minute));
    if seconds {
        let _ = text.push(':');
        let _ = text.push_str(&two_digits(time.second));
    }
    text
}

/// Digital face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitalFace {
    seconds: bool,
    /// Survives face switches, unlike `shown`
    hour_24: bool,
    shown: Option<String<8>>,
    area: AlarmDateArea,
}

impl DigitalFace {
    /// Hours, minutes and seconds
    pub fn hms() -> Self {
        Self::new(true)
    }

    /// Hours and minutes only
    pub fn hm() -> Self {
        Self::new(false)
    }

    fn new(seconds: bool) -> Self {
        Self {
            seconds,
            hour_24: true,
            shown: None,
            area: AlarmDateArea::new(2, 57, AreaMode::AlarmOrDate),
        }
    }

    pub fn hour_24(&self) -> bool {
        self.hour_24
    }

    fn digits_x(&self) -> u8 {
        let cells: u8 = if self.seconds { 8 } else { 5 };
        let width = cells * DIGIT_FONT.cell_width() * DIGIT_SCALE;
        (LCD_WIDTH - width) / 2
    }

    /// Draw the digits if they differ from what is on screen
    fn draw_time<L: Lcd + ?Sized>(&mut self, ctx: &ClockContext, lcd: &mut L) {
        let text = time_text(&ctx.time.new, self.seconds, self.hour_24);
        if self.shown.as_ref() == Some(&text) {
            return;
        }

        let fg = ctx.colors.fg();
        let x = self.digits_x();
        let width = lcd.text(
            x,
            DIGITS_Y,
            &text,
            DIGIT_FONT,
            DIGIT_SCALE,
            Orientation::Horizontal,
            fg,
        );

        let suffix_x = x.saturating_add(width).saturating_add(2);
        if self.hour_24 {
            lcd.fill_rect(
                suffix_x,
                DIGITS_Y,
                SUFFIX_WIDTH,
                SUFFIX_HEIGHT,
                FillPattern::Blank,
                fg,
            );
        } else {
            let suffix = if ctx.time.new.hour < 12 { "AM" } else { "PM" };
            lcd.text(
                suffix_x,
                DIGITS_Y,
                suffix,
                Font::Small,
                1,
                Orientation::Horizontal,
                fg,
            );
        }

        self.shown = Some(text);
    }
}

impl ClockFace for DigitalFace {
    fn init<L: Lcd + ?Sized>(&mut self, flavor: InitFlavor, ctx: &mut ClockContext, lcd: &mut L) {
        self.shown = None;
        match flavor {
            InitFlavor::Full => self.area.reset(),
            InitFlavor::Partial => {
                // Sibling variant left its digits at another width
                lcd.fill_rect(
                    0,
                    DIGITS_Y,
                    LCD_WIDTH,
                    DIGITS_HEIGHT,
                    FillPattern::Blank,
                    ctx.colors.fg(),
                );
                self.area.repaint(ctx, lcd);
            }
        }
        self.draw_time(ctx, lcd);
    }

    fn update<L: Lcd + ?Sized>(&mut self, ctx: &mut ClockContext, lcd: &mut L) {
        if ctx.time_event() {
            self.draw_time(ctx, lcd);
        }
        self.area.update(ctx, lcd);
    }

    fn button<L: Lcd + ?Sized>(
        &mut self,
        button: Button,
        ctx: &mut ClockContext,
        lcd: &mut L,
    ) -> ButtonOutcome {
        match button {
            Button::Set => {
                self.hour_24 = !self.hour_24;
                // Same digits in both modes between 10:00 and 12:59
                self.shown = None;
                self.draw_time(ctx, lcd);
                ButtonOutcome::Handled
            }
            Button::Menu | Button::Plus => ButtonOutcome::Unhandled,
        }
    }
}
