//! Board-agnostic core logic for the Monochron clock firmware
//!
//! This crate contains the clock-face framework that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (LCD primitives, RTC source, clock face)
//! - Shared clock state with old/new time tracking and per-tick events
//! - Face table and dispatcher (init, cycle, button forwarding)
//! - Alarm/date area helper shared by most faces
//! - Configuration type definitions
//! - Host-loop controller tying ticks and buttons to the dispatcher

#![no_std]
#![deny(unsafe_code)]

pub mod area;
pub mod config;
pub mod control;
pub mod dispatch;
pub mod format;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatch::{ClockId, DispatchError, Dispatcher, DrawMode, InitFlavor};
pub use state::{ClockContext, Color, DateTime};
pub use traits::{Button, ButtonOutcome, ClockFace, Lcd, RtcSource};
