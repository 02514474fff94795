//! Face table entries

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of faces in a table
pub const MAX_CLOCKS: usize = 32;

/// Identifier of a clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockId(pub u8);

impl ClockId {
    /// Sentinel for "no face"
    pub const NONE: ClockId = ClockId(0);

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for ClockId {
    fn default() -> Self {
        Self::NONE
    }
}

/// How a face is brought on screen after a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitFlavor {
    /// Clear the screen and paint everything
    Full,
    /// Keep the shared layout of the previous face, repaint the difference
    Partial,
}

/// What a `draw` call should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawMode {
    /// Regular animation tick
    Cycle,
    /// Full init of the active face
    InitFull,
    /// Partial init of the active face
    InitPartial,
}

impl From<InitFlavor> for DrawMode {
    fn from(flavor: InitFlavor) -> Self {
        match flavor {
            InitFlavor::Full => DrawMode::InitFull,
            InitFlavor::Partial => DrawMode::InitPartial,
        }
    }
}

impl DrawMode {
    /// The init flavor of an init mode, `None` for `Cycle`
    pub fn init_flavor(&self) -> Option<InitFlavor> {
        match self {
            DrawMode::Cycle => None,
            DrawMode::InitFull => Some(InitFlavor::Full),
            DrawMode::InitPartial => Some(InitFlavor::Partial),
        }
    }
}

/// One entry of the face table
#[derive(Debug, Clone)]
pub struct ClockDriver<F> {
    /// Face identifier
    pub id: ClockId,
    /// Init flavor used when this entry is reached by `advance`
    pub flavor: InitFlavor,
    /// The face itself, including its private state
    pub face: F,
}

impl<F> ClockDriver<F> {
    pub const fn new(id: ClockId, flavor: InitFlavor, face: F) -> Self {
        Self { id, flavor, face }
    }
}
