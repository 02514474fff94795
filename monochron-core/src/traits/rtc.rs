//! Real-time clock source trait

use crate::state::DateTime;

/// The RTC/alarm layer as seen by the dispatcher
///
/// The alarm switch is expected to be debounced by the implementation;
/// the pin-change interrupt alone jitters, so the switch pin should be
/// re-polled from the timer handler before it is reported here.
pub trait RtcSource {
    /// Current (debounced) alarm switch position
    fn alarm_switch_on(&self) -> bool;

    /// Whether the alarm is sounding or snoozing
    fn alarming(&self) -> bool;

    /// Whether a new time sample is waiting to be processed
    fn time_event_pending(&self) -> bool;

    /// The most recent date-time sample
    fn sample(&self) -> DateTime;

    /// Mark the pending time event as processed
    fn acknowledge(&mut self);
}
