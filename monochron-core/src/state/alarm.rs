//! Alarm state shared with the faces

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tracked alarm switch position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SwitchPosition {
    /// Not yet evaluated; forces an edge on the next check
    #[default]
    None,
    On,
    Off,
}

/// Alarm time, switch tracking and alarming status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmState {
    pub hour: u8,
    pub minute: u8,
    switch: SwitchPosition,
    switch_changed: bool,
    alarming: bool,
}

impl AlarmState {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour,
            minute,
            switch: SwitchPosition::None,
            switch_changed: false,
            alarming: false,
        }
    }

    /// Last evaluated switch position
    pub fn switch(&self) -> SwitchPosition {
        self.switch
    }

    /// Whether the alarm is sounding or snoozing
    pub fn alarming(&self) -> bool {
        self.alarming
    }

    pub(crate) fn set_alarming(&mut self, alarming: bool) {
        self.alarming = alarming;
    }

    /// Forget the tracked position so the next check reports an edge
    pub(crate) fn reset_switch(&mut self) {
        self.switch = SwitchPosition::None;
    }

    /// Compare the physical switch against the tracked position
    ///
    /// Raises the edge flag when they differ and clears it otherwise.
    pub(crate) fn check_switch(&mut self, switch_on: bool) {
        let position = if switch_on {
            SwitchPosition::On
        } else {
            SwitchPosition::Off
        };
        self.switch_changed = self.switch != position;
        self.switch = position;
    }

    /// Whether the switch changed, without consuming the edge
    pub fn switch_changed(&self) -> bool {
        self.switch_changed
    }

    /// Consume the switch edge
    pub fn take_switch_changed(&mut self) -> bool {
        core::mem::take(&mut self.switch_changed)
    }
}
