//! Clock face implementations
//!
//! This crate provides concrete implementations of the `ClockFace` trait
//! defined in monochron-core:
//!
//! - Analog dial with and without a seconds hand
//! - Large digital readout with and without seconds, 12/24-hour
//! - Half-tone progress bars with an alarm bell
//!
//! `default_table` builds the rotation the `Plus` button steps through.

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod bar;
pub mod digital;
pub mod face;
pub mod geometry;

#[cfg(test)]
pub(crate) mod testing;

pub use analog::AnalogFace;
pub use bar::BarFace;
pub use digital::DigitalFace;
pub use face::{default_table, Face};
