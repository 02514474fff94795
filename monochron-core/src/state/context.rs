//! Shared clock context
//!
//! Everything the dispatcher hands to the active face: time, alarm,
//! palette, the cycle counter and the per-tick redraw flags. The
//! dispatcher owns the single instance and lends it to one face at a time.

use super::alarm::AlarmState;
use super::colors::{DisplayColors, Palette};
use super::time::{ClockTime, DateTime};

/// Cycle counter bit that drives blinking (toggles every 8 ticks)
pub const BLINK_BIT: u8 = 0x08;

/// State shared between the dispatcher and the active face
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockContext {
    /// Committed and sampled date-time
    pub time: ClockTime,
    /// Alarm time and switch tracking
    pub alarm: AlarmState,
    /// Current palette
    pub colors: DisplayColors,
    cycle: u8,
    time_event: bool,
    date_event: bool,
    just_initialized: bool,
}

impl Default for ClockContext {
    fn default() -> Self {
        Self::new(DateTime::default(), Palette::Normal)
    }
}

impl ClockContext {
    pub fn new(now: DateTime, palette: Palette) -> Self {
        Self {
            time: ClockTime::new(now),
            alarm: AlarmState::default(),
            colors: DisplayColors::new(palette),
            cycle: 0,
            time_event: false,
            date_event: false,
            just_initialized: false,
        }
    }

    /// A time sample with changed time-of-day is being processed
    pub fn time_event(&self) -> bool {
        self.time_event
    }

    /// A time sample with a changed date is being processed
    pub fn date_event(&self) -> bool {
        self.date_event
    }

    /// The face was initialized and has not completed a cycle yet
    pub fn just_initialized(&self) -> bool {
        self.just_initialized
    }

    /// Wrapping tick counter
    pub fn cycle(&self) -> u8 {
        self.cycle
    }

    /// Whether the blink phase is currently "on"
    pub fn blink_phase(&self) -> bool {
        self.cycle & BLINK_BIT != 0
    }

    /// Advance the tick counter by one, wrapping
    pub fn tick(&mut self) {
        self.cycle = self.cycle.wrapping_add(1);
    }

    /// Take a new RTC sample and derive the events from it
    pub(crate) fn sample(&mut self, now: DateTime) {
        self.time.new = now;
        self.time_event = self.time.time_changed();
        self.date_event = self.time.date_changed();
    }

    pub(crate) fn clear_events(&mut self) {
        self.time_event = false;
        self.date_event = false;
    }

    pub(crate) fn set_just_initialized(&mut self, value: bool) {
        self.just_initialized = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sets_events() {
        let mut ctx = ClockContext::new(DateTime::hms(10, 30, 59), Palette::Normal);
        ctx.sample(DateTime::hms(10, 31, 0));
        assert!(ctx.time_event());
        assert!(!ctx.date_event());

        ctx.clear_events();
        assert!(!ctx.time_event());
    }

    #[test]
    fn test_cycle_wraps() {
        let mut ctx = ClockContext::default();
        for _ in 0..256 {
            ctx.tick();
        }
        assert_eq!(ctx.cycle(), 0);
    }

    #[test]
    fn test_blink_phase_follows_bit_three() {
        let mut ctx = ClockContext::default();
        let mut phases = [false; 16];
        for phase in phases.iter_mut() {
            *phase = ctx.blink_phase();
            ctx.tick();
        }
        assert!(phases[..8].iter().all(|p| !p));
        assert!(phases[8..].iter().all(|p| *p));
    }
}
