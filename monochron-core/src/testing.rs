//! Test doubles for the LCD, the RTC and a clock face

use heapless::{String, Vec};

use crate::dispatch::InitFlavor;
use crate::state::{ClockContext, Color, DateTime};
use crate::traits::{Bitmap, Button, ButtonOutcome, ClockFace, FillPattern, Font, Lcd, Orientation, RtcSource};

/// A recorded LCD primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LcdCall {
    Clear(Color),
    Dot(u8, u8, Color),
    Line(u8, u8, u8, u8, Color),
    Rect(u8, u8, u8, u8, Color),
    FillRect {
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        pattern: FillPattern,
        color: Color,
    },
    Circle(u8, u8, u8, Color),
    FillCircle(u8, u8, u8, FillPattern, Color),
    Bitmap(u8, u8, Color),
    Text {
        x: u8,
        y: u8,
        text: String<16>,
        color: Color,
    },
}

/// An LCD that records every call
#[derive(Debug, Default)]
pub struct RecordingLcd {
    pub calls: Vec<LcdCall, 256>,
}

impl RecordingLcd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_log(&mut self) {
        self.calls.clear();
    }

    pub fn count(&self, predicate: impl Fn(&LcdCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn inversions(&self) -> usize {
        self.count(|call| {
            matches!(
                call,
                LcdCall::FillRect {
                    pattern: FillPattern::Inverse,
                    ..
                }
            )
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            LcdCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, call: LcdCall) {
        let _ = self.calls.push(call);
    }
}

impl Lcd for RecordingLcd {
    fn clear(&mut self, color: Color) {
        self.record(LcdCall::Clear(color));
    }

    fn dot(&mut self, x: u8, y: u8, color: Color) {
        self.record(LcdCall::Dot(x, y, color));
    }

    fn line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Color) {
        self.record(LcdCall::Line(x0, y0, x1, y1, color));
    }

    fn rect(&mut self, x: u8, y: u8, width: u8, height: u8, color: Color) {
        self.record(LcdCall::Rect(x, y, width, height, color));
    }

    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8, pattern: FillPattern, color: Color) {
        self.record(LcdCall::FillRect {
            x,
            y,
            width,
            height,
            pattern,
            color,
        });
    }

    fn circle(&mut self, x: u8, y: u8, radius: u8, color: Color) {
        self.record(LcdCall::Circle(x, y, radius, color));
    }

    fn fill_circle(&mut self, x: u8, y: u8, radius: u8, pattern: FillPattern, color: Color) {
        self.record(LcdCall::FillCircle(x, y, radius, pattern, color));
    }

    fn bitmap(&mut self, x: u8, y: u8, _bitmap: &Bitmap<'_>, color: Color) {
        self.record(LcdCall::Bitmap(x, y, color));
    }

    fn text(
        &mut self,
        x: u8,
        y: u8,
        text: &str,
        font: Font,
        scale: u8,
        _orientation: Orientation,
        color: Color,
    ) -> u8 {
        let mut recorded = String::new();
        let _ = recorded.push_str(text);
        self.record(LcdCall::Text {
            x,
            y,
            text: recorded,
            color,
        });
        let len = u8::try_from(text.len()).unwrap_or(u8::MAX);
        len.saturating_mul(font.cell_width()).saturating_mul(scale)
    }
}

/// A scripted RTC
#[derive(Debug, Clone, Default)]
pub struct FakeRtc {
    pub switch_on: bool,
    pub alarming: bool,
    pub pending: bool,
    pub now: DateTime,
    pub acknowledged: u32,
}

impl FakeRtc {
    pub fn at(now: DateTime) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Queue a new sample
    pub fn set(&mut self, now: DateTime) {
        self.now = now;
        self.pending = true;
    }
}

impl RtcSource for FakeRtc {
    fn alarm_switch_on(&self) -> bool {
        self.switch_on
    }

    fn alarming(&self) -> bool {
        self.alarming
    }

    fn time_event_pending(&self) -> bool {
        self.pending
    }

    fn sample(&self) -> DateTime {
        self.now
    }

    fn acknowledge(&mut self) {
        self.pending = false;
        self.acknowledged += 1;
    }
}

/// What a face saw during its last call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observation {
    pub time_event: bool,
    pub date_event: bool,
    pub just_initialized: bool,
    pub old: DateTime,
    pub new: DateTime,
}

impl Observation {
    fn of(ctx: &ClockContext) -> Self {
        Self {
            time_event: ctx.time_event(),
            date_event: ctx.date_event(),
            just_initialized: ctx.just_initialized(),
            old: ctx.time.old,
            new: ctx.time.new,
        }
    }
}

/// A face that records how it was driven
#[derive(Debug, Clone, Default)]
pub struct ObservingFace {
    pub handles_buttons: bool,
    pub inits: Vec<InitFlavor, 16>,
    pub updates: u32,
    pub buttons: u32,
    pub last: Option<Observation>,
}

impl ObservingFace {
    pub fn with_buttons() -> Self {
        Self {
            handles_buttons: true,
            ..Self::default()
        }
    }
}

impl ClockFace for ObservingFace {
    fn init<L: Lcd + ?Sized>(&mut self, flavor: InitFlavor, ctx: &mut ClockContext, _lcd: &mut L) {
        let _ = self.inits.push(flavor);
        self.last = Some(Observation::of(ctx));
    }

    fn update<L: Lcd + ?Sized>(&mut self, ctx: &mut ClockContext, _lcd: &mut L) {
        self.updates += 1;
        self.last = Some(Observation::of(ctx));
    }

    fn button<L: Lcd + ?Sized>(
        &mut self,
        _button: Button,
        _ctx: &mut ClockContext,
        _lcd: &mut L,
    ) -> ButtonOutcome {
        if self.handles_buttons {
            self.buttons += 1;
            ButtonOutcome::Handled
        } else {
            ButtonOutcome::Unhandled
        }
    }
}
