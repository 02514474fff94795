//! Alarm/date area
//!
//! Most faces reserve a small text field that shows the alarm time while
//! the alarm switch is on and the date otherwise. While the alarm sounds
//! the alarm time blinks by inverting its rectangle.
//!
//! A face owns at most one alarm-capable area, since the blink state is
//! per area and the switch edge is consumed by the first reader. It may
//! own any number of `DateOnly` areas.

use heapless::String;

use crate::format::two_digits;
use crate::state::{ClockContext, SwitchPosition};
use crate::traits::{FillPattern, Font, Lcd, Orientation};

/// Width of the area in pixels (six small-font cells)
pub const AREA_WIDTH: u8 = 24;

/// Width of the `HH:MM` alarm text in pixels
pub const ALARM_WIDTH: u8 = 20;

/// Height of the area in pixels
pub const AREA_HEIGHT: u8 = 6;

const AREA_FONT: Font = Font::Small;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// What an area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AreaMode {
    /// Always the date
    DateOnly,
    /// The alarm time while the switch is on, blank otherwise
    AlarmOnly,
    /// The alarm time while the switch is on, the date otherwise
    AlarmOrDate,
}

/// Whether an alarm indicator is currently inverted
///
/// While the alarm sounds with the switch on, the indicator rectangle is
/// inverted during the blink phase of the cycle counter and restored
/// otherwise. Each transition inverts the rectangle exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkState {
    inverted: bool,
}

impl BlinkState {
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// The indicator was repainted, so nothing on screen is inverted
    pub fn reset(&mut self) {
        self.inverted = false;
    }

    /// Invert or restore the rectangle if the blink phase asks for it
    pub fn apply<L: Lcd + ?Sized>(
        &mut self,
        ctx: &ClockContext,
        lcd: &mut L,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
    ) {
        let want_inverted = ctx.alarm.alarming()
            && ctx.alarm.switch() == SwitchPosition::On
            && ctx.blink_phase();
        if self.inverted != want_inverted {
            lcd.invert_rect(x, y, width, height);
            self.inverted = want_inverted;
        }
    }
}

/// An alarm/date text field at a fixed position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmDateArea {
    x: u8,
    y: u8,
    mode: AreaMode,
    blink: Option<BlinkState>,
}

impl AlarmDateArea {
    pub fn new(x: u8, y: u8, mode: AreaMode) -> Self {
        let blink = match mode {
            AreaMode::DateOnly => None,
            AreaMode::AlarmOnly | AreaMode::AlarmOrDate => Some(BlinkState::default()),
        };
        Self { x, y, mode, blink }
    }

    pub fn mode(&self) -> AreaMode {
        self.mode
    }

    /// Whether the alarm rectangle is shown inverted
    pub fn inverted(&self) -> bool {
        self.blink.map(|blink| blink.inverted).unwrap_or(false)
    }

    /// Forget the blink state; call from the face's `init`
    pub fn reset(&mut self) {
        *self = Self::new(self.x, self.y, self.mode);
    }

    /// Repaint the area if the context asks for it
    pub fn update<L: Lcd + ?Sized>(&mut self, ctx: &mut ClockContext, lcd: &mut L) {
        if self.mode == AreaMode::DateOnly {
            if ctx.date_event() || ctx.just_initialized() {
                self.draw_date(ctx, lcd);
            }
            return;
        }

        let switch_edge = ctx.alarm.take_switch_changed();
        if switch_edge || ctx.date_event() {
            self.paint(ctx, lcd);
        }

        self.apply_blink(ctx, lcd);
    }

    /// Repaint regardless of events
    ///
    /// For a face taking over an area another face left on screen after
    /// a partial init. Overwrites any inversion the previous owner left.
    pub fn repaint<L: Lcd + ?Sized>(&mut self, ctx: &ClockContext, lcd: &mut L) {
        self.reset();
        if self.mode == AreaMode::DateOnly {
            self.draw_date(ctx, lcd);
        } else {
            self.paint(ctx, lcd);
        }
    }

    fn paint<L: Lcd + ?Sized>(&mut self, ctx: &ClockContext, lcd: &mut L) {
        match ctx.alarm.switch() {
            SwitchPosition::On => self.draw_alarm(ctx, lcd),
            SwitchPosition::Off => {
                self.blank(0, ctx, lcd);
                if self.mode == AreaMode::AlarmOrDate {
                    self.draw_date(ctx, lcd);
                }
            }
            SwitchPosition::None => {}
        }
        if let Some(blink) = self.blink.as_mut() {
            blink.reset();
        }
    }

    fn apply_blink<L: Lcd + ?Sized>(&mut self, ctx: &ClockContext, lcd: &mut L) {
        if let Some(blink) = self.blink.as_mut() {
            blink.apply(ctx, lcd, self.x, self.y, ALARM_WIDTH, AREA_HEIGHT);
        }
    }

    fn draw_alarm<L: Lcd + ?Sized>(&self, ctx: &ClockContext, lcd: &mut L) {
        let mut text: String<5> = String::new();
        let _ = text.push_str(&two_digits(ctx.alarm.hour));
        let _ = text.push(':');
        let _ = text.push_str(&two_digits(ctx.alarm.minute));
        let width = self.draw_text(&text, ctx, lcd);
        self.blank(width, ctx, lcd);
    }

    fn draw_date<L: Lcd + ?Sized>(&self, ctx: &ClockContext, lcd: &mut L) {
        let text = date_text(ctx.time.new.month, ctx.time.new.day);
        let width = self.draw_text(&text, ctx, lcd);
        self.blank(width, ctx, lcd);
    }

    fn draw_text<L: Lcd + ?Sized>(&self, text: &str, ctx: &ClockContext, lcd: &mut L) -> u8 {
        lcd.text(
            self.x,
            self.y,
            text,
            AREA_FONT,
            1,
            Orientation::Horizontal,
            ctx.colors.fg(),
        )
    }

    /// Blank the area from `offset` pixels to its right edge
    fn blank<L: Lcd + ?Sized>(&self, offset: u8, ctx: &ClockContext, lcd: &mut L) {
        if offset < AREA_WIDTH {
            lcd.fill_rect(
                self.x.saturating_add(offset),
                self.y,
                AREA_WIDTH - offset,
                AREA_HEIGHT,
                FillPattern::Blank,
                ctx.colors.fg(),
            );
        }
    }
}

/// Date as `Mmm DD`, e.g. `Oct 19`
pub fn date_text(month: u8, day: u8) -> String<6> {
    let name = usize::from(month)
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index))
        .copied()
        .unwrap_or("???");
    let mut text = String::new();
    let _ = text.push_str(name);
    let _ = text.push(' ');
    let _ = text.push_str(&two_digits(day));
    text
}
