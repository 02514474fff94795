//! Analog clock face
//!
//! A round dial with hour and minute hands and an optional seconds hand.
//! Both variants share the dial, so switching from one to the other only
//! needs the hands redrawn.

use monochron_core::area::{AlarmDateArea, AreaMode};
use monochron_core::state::{ClockContext, DateTime};
use monochron_core::traits::{ClockFace, FillPattern, Lcd};
use monochron_core::InitFlavor;

use crate::geometry::{hand_end, hour_step, STEPS};

/// Dial center
pub const CENTER_X: u8 = 64;
pub const CENTER_Y: u8 = 31;

/// Dial outline radius
pub const DIAL_RADIUS: u8 = 30;

const TICK_OUTER: u8 = 29;
const TICK_INNER: u8 = 27;

/// Everything inside this radius belongs to the hands
const HANDS_RADIUS: u8 = 25;

const SECOND_LENGTH: u8 = 24;
const MINUTE_LENGTH: u8 = 22;
const HOUR_LENGTH: u8 = 14;

/// Dial positions of the hands currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Hands {
    hour: u8,
    minute: u8,
    second: Option<u8>,
}

impl Hands {
    fn at(time: &DateTime, seconds: bool) -> Self {
        Self {
            hour: hour_step(time.hour, time.minute),
            minute: time.minute % STEPS,
            second: seconds.then_some(time.second % STEPS),
        }
    }
}

/// Analog face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogFace {
    seconds: bool,
    drawn: Option<Hands>,
    area: AlarmDateArea,
}

impl AnalogFace {
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
            drawn: None,
            area: AlarmDateArea::new(2, 57, AreaMode::AlarmOrDate),
        }
    }

    pub fn shows_seconds(&self) -> bool {
        self.seconds
    }

    fn draw_dial<L: Lcd + ?Sized>(&self, ctx: &ClockContext, lcd: &mut L) {
        let fg = ctx.colors.fg();
        lcd.circle(CENTER_X, CENTER_Y, DIAL_RADIUS, fg);
        for hour in 0..12 {
            let step = hour * 5;
            let (x0, y0) = hand_end(CENTER_X, CENTER_Y, step, TICK_INNER);
            let (x1, y1) = hand_end(CENTER_X, CENTER_Y, step, TICK_OUTER);
            lcd.line(x0, y0, x1, y1, fg);
        }
    }

    fn draw_hands<L: Lcd + ?Sized>(hands: &Hands, ctx: &ClockContext, lcd: &mut L) {
        let fg = ctx.colors.fg();
        let mut hand = |step: u8, length: u8| {
            let (x, y) = hand_end(CENTER_X, CENTER_Y, step, length);
            lcd.line(CENTER_X, CENTER_Y, x, y, fg);
        };
        if let Some(second) = hands.second {
            hand(second, SECOND_LENGTH);
        }
        hand(hands.minute, MINUTE_LENGTH);
        hand(hands.hour, HOUR_LENGTH);
    }

    /// Blank whatever hands are inside the dial
    fn erase_hands<L: Lcd + ?Sized>(ctx: &ClockContext, lcd: &mut L) {
        lcd.fill_circle(
            CENTER_X,
            CENTER_Y,
            HANDS_RADIUS,
            FillPattern::Blank,
            ctx.colors.fg(),
        );
    }
}

impl ClockFace for AnalogFace {
    fn init<L: Lcd + ?Sized>(&mut self, flavor: InitFlavor, ctx: &mut ClockContext, lcd: &mut L) {
        match flavor {
            InitFlavor::Full => {
                self.area.reset();
                self.draw_dial(ctx, lcd);
            }
            InitFlavor::Partial => {
                // Dial and area already on screen from the sibling variant
                Self::erase_hands(ctx, lcd);
                self.area.repaint(ctx, lcd);
            }
        }

        let hands = Hands::at(&ctx.time.new, self.seconds);
        Self::draw_hands(&hands, ctx, lcd);
        self.drawn = Some(hands);
    }

    fn update<L: Lcd + ?Sized>(&mut self, ctx: &mut ClockContext, lcd: &mut L) {
        if ctx.time_event() {
            let hands = Hands::at(&ctx.time.new, self.seconds);
            if self.drawn != Some(hands) {
                Self::erase_hands(ctx, lcd);
                Self::draw_hands(&hands, ctx, lcd);
                self.drawn = Some(hands);
            }
        }

        self.area.update(ctx, lcd);
    }
}
