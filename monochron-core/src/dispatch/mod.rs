//! Clock face table and dispatcher
//!
//! The table is an ordered list of faces built at start-up. Exactly one
//! entry is active at a time; the dispatcher forwards draw requests and
//! button presses to it and cycles through the table round-robin.

pub mod dispatcher;
pub mod table;

pub use dispatcher::{DispatchError, Dispatcher};
pub use table::{ClockDriver, ClockId, DrawMode, InitFlavor, MAX_CLOCKS};
