//! Test helpers

use monochron_core::state::DateTime;
use monochron_core::traits::RtcSource;

/// Time on the test date, Oct 19 2026
pub fn hms(hour: u8, minute: u8, second: u8) -> DateTime {
    DateTime::hms(hour, minute, second).with_date(19, 10, 26)
}

/// RTC that reports a queued sample once
#[derive(Debug, Clone)]
pub struct ScriptedRtc {
    pub switch_on: bool,
    pub alarming: bool,
    pending: bool,
    now: DateTime,
}

impl ScriptedRtc {
    /// Start at `now` with the sample pending, so the first draw picks it up
    pub fn at(now: DateTime) -> Self {
        Self {
            switch_on: false,
            alarming: false,
            pending: true,
            now,
        }
    }

    pub fn set(&mut self, now: DateTime) {
        self.now = now;
        self.pending = true;
    }
}

impl RtcSource for ScriptedRtc {
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
    }
}
