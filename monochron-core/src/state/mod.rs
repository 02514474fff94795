//! Shared clock state
//!
//! The process-wide fields every face reads: old/new time, alarm state,
//! palette and the per-tick redraw flags, gathered in one context object.

pub mod alarm;
pub mod colors;
pub mod context;
pub mod time;

pub use alarm::{AlarmState, SwitchPosition};
pub use colors::{Color, DisplayColors, Palette};
pub use context::{ClockContext, BLINK_BIT};
pub use time::{ClockTime, DateTime};
