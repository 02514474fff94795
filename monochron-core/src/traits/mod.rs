//! Hardware abstraction traits
//!
//! These traits define the interface between the clock-face framework
//! and the external collaborators (LCD driver, RTC layer) as well as the
//! contract every clock face implements.

pub mod face;
pub mod lcd;
pub mod rtc;

pub use face::{Button, ButtonOutcome, ClockFace};
pub use lcd::{Bitmap, FillPattern, Font, Lcd, Orientation};
pub use rtc::RtcSource;
