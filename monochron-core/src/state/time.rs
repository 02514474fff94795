//! Old/new time tracking
//!
//! `old` holds the values committed at the end of the previous tick that
//! saw a time event, `new` the latest sample from the RTC. Faces compare
//! the two to find out which elements need repainting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calendar date and time-of-day sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub second: u8,
    pub minute: u8,
    pub hour: u8,
    pub day: u8,
    pub month: u8,
    /// Years since 2000
    pub year: u8,
}

impl DateTime {
    /// Create a time-of-day on 2000-01-01
    pub const fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            second,
            minute,
            hour,
            day: 1,
            month: 1,
            year: 0,
        }
    }

    /// Replace the date part
    pub const fn with_date(self, day: u8, month: u8, year: u8) -> Self {
        Self {
            day,
            month,
            year,
            ..self
        }
    }

    /// Whether the time-of-day fields differ
    pub fn time_differs(&self, other: &DateTime) -> bool {
        self.second != other.second || self.minute != other.minute || self.hour != other.hour
    }

    /// Whether the calendar date fields differ
    pub fn date_differs(&self, other: &DateTime) -> bool {
        self.day != other.day || self.month != other.month || self.year != other.year
    }
}

/// Previous and current clock values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Values committed on the previous time event
    pub old: DateTime,
    /// Latest RTC sample
    pub new: DateTime,
}

impl ClockTime {
    pub const fn new(initial: DateTime) -> Self {
        Self {
            old: initial,
            new: initial,
        }
    }

    /// Any of second, minute or hour changed since the last commit
    pub fn time_changed(&self) -> bool {
        self.new.time_differs(&self.old)
    }

    /// Any of day, month or year changed since the last commit
    pub fn date_changed(&self) -> bool {
        self.new.date_differs(&self.old)
    }

    /// Copy the new sample into the old values
    pub fn commit(&mut self) {
        self.old = self.new;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_change_ignores_date() {
        let mut time = ClockTime::new(DateTime::hms(10, 30, 59));
        time.new = time.new.with_date(2, 1, 0);
        assert!(!time.time_changed());
        assert!(time.date_changed());
    }

    #[test]
    fn test_second_tick_is_time_change() {
        let mut time = ClockTime::new(DateTime::hms(10, 30, 59));
        time.new = DateTime::hms(10, 31, 0);
        assert!(time.time_changed());
        assert!(!time.date_changed());
    }

    #[test]
    fn test_commit() {
        let mut time = ClockTime::new(DateTime::hms(23, 59, 59));
        time.new = DateTime::hms(0, 0, 0).with_date(2, 1, 0);
        time.commit();
        assert_eq!(time.old, time.new);
        assert!(!time.time_changed());
        assert!(!time.date_changed());
    }
}
