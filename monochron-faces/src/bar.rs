//! Progress bar face
//!
//! Hours, minutes and seconds as three half-tone bars filling left to
//! right. The date sits bottom left; a bell in the bottom right corner
//! shows the alarm switch and blinks while the alarm sounds.

use monochron_core::area::{AlarmDateArea, AreaMode, BlinkState};
use monochron_core::state::{ClockContext, SwitchPosition};
use monochron_core::traits::{Bitmap, ClockFace, FillPattern, Font, Lcd, Orientation};
use monochron_core::InitFlavor;

const BAR_X: u8 = 12;
const BAR_WIDTH: u8 = 104;
const BAR_HEIGHT: u8 = 8;

/// Fillable columns inside the outline
pub const BAR_INNER: u8 = BAR_WIDTH - 2;

/// Top edge of the hour, minute and second bars
pub const BAR_Y: [u8; 3] = [6, 20, 34];

const LABELS: [&str; 3] = ["H", "M", "S"];
const MAX: [u8; 3] = [23, 59, 59];

pub const BELL_X: u8 = 118;
pub const BELL_Y: u8 = 55;

/// 8x8 bell with clapper
pub const BELL: Bitmap<'static> = Bitmap::new(
    8,
    8,
    &[0x20, 0x38, 0x3e, 0x7f, 0x7f, 0x3e, 0x38, 0x20],
);

/// Filled columns for `value` out of `max`
pub fn bar_fill(value: u8, max: u8) -> u8 {
    if max == 0 {
        return 0;
    }
    let fill = u16::from(value.min(max)) * u16::from(BAR_INNER) / u16::from(max);
    u8::try_from(fill).unwrap_or(BAR_INNER)
}

/// Bar face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarFace {
    /// Fill width of each bar on screen
    drawn: [Option<u8>; 3],
    bell: BlinkState,
    date: AlarmDateArea,
}

impl Default for BarFace {
    fn default() -> Self {
        Self::new()
    }
}

impl BarFace {
    pub fn new() -> Self {
        Self {
            drawn: [None; 3],
            bell: BlinkState::default(),
            date: AlarmDateArea::new(2, 57, AreaMode::DateOnly),
        }
    }

    fn draw_frames<L: Lcd + ?Sized>(ctx: &ClockContext, lcd: &mut L) {
        let fg = ctx.colors.fg();
        for (label, y) in LABELS.iter().zip(BAR_Y) {
            lcd.text(2, y + 1, label, Font::Small, 1, Orientation::Horizontal, fg);
            lcd.rect(BAR_X, y, BAR_WIDTH, BAR_HEIGHT, fg);
        }
    }

    fn draw_bars<L: Lcd + ?Sized>(&mut self, ctx: &ClockContext, lcd: &mut L) {
        let now = &ctx.time.new;
        let values = [now.hour, now.minute, now.second];
        let fg = ctx.colors.fg();

        for (i, drawn) in self.drawn.iter_mut().enumerate() {
            let fill = bar_fill(values[i], MAX[i]);
            if *drawn == Some(fill) {
                continue;
            }
            let x = BAR_X + 1;
            let y = BAR_Y[i] + 1;
            let height = BAR_HEIGHT - 2;
            lcd.fill_rect(x, y, fill, height, FillPattern::Half, fg);
            lcd.fill_rect(x + fill, y, BAR_INNER - fill, height, FillPattern::Blank, fg);
            *drawn = Some(fill);
        }
    }

    fn update_bell<L: Lcd + ?Sized>(&mut self, ctx: &mut ClockContext, lcd: &mut L) {
        if ctx.alarm.take_switch_changed() {
            let fg = ctx.colors.fg();
            match ctx.alarm.switch() {
                SwitchPosition::On => lcd.bitmap(BELL_X, BELL_Y, &BELL, fg),
                SwitchPosition::Off => {
                    lcd.fill_rect(BELL_X, BELL_Y, BELL.width, BELL.height, FillPattern::Blank, fg)
                }
                SwitchPosition::None => {}
            }
            self.bell.reset();
        }

        self.bell.apply(ctx, lcd, BELL_X, BELL_Y, BELL.width, BELL.height);
    }
}

impl ClockFace for BarFace {
    fn init<L: Lcd + ?Sized>(&mut self, _flavor: InitFlavor, ctx: &mut ClockContext, lcd: &mut L) {
        // Always entered with a full init
        *self = Self::new();
        Self::draw_frames(ctx, lcd);
        self.draw_bars(ctx, lcd);
    }

    fn update<L: Lcd + ?Sized>(&mut self, ctx: &mut ClockContext, lcd: &mut L) {
        if ctx.time_event() {
            self.draw_bars(ctx, lcd);
        }
        self.date.update(ctx, lcd);
        self.update_bell(ctx, lcd);
    }
}
