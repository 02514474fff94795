//! Clock face contract

use crate::dispatch::InitFlavor;
use crate::state::ClockContext;

use super::lcd::Lcd;

/// Front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Enter the configuration menu
    Menu,
    /// Set/select
    Set,
    /// Plus/next
    Plus,
}

/// Whether a face consumed a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonOutcome {
    Handled,
    Unhandled,
}

/// A selectable clock face
///
/// Faces keep their private state in `self`. That state is only
/// meaningful while the face is active: `init` must reset whatever the
/// face uses, since nothing is guaranteed to survive a switch to another
/// face and back.
///
/// `update` runs once per tick and should return without drawing when
/// neither the context events nor its own timers ask for a repaint.
pub trait ClockFace {
    /// Paint the face after a switch
    ///
    /// On `Full` the screen has already been cleared. On `Partial` the
    /// previous face shared this layout, so only the differing region
    /// needs repainting.
    fn init<L: Lcd + ?Sized>(&mut self, flavor: InitFlavor, ctx: &mut ClockContext, lcd: &mut L);

    /// Advance the face by one tick
    fn update<L: Lcd + ?Sized>(&mut self, ctx: &mut ClockContext, lcd: &mut L);

    /// Handle a button press
    ///
    /// Faces without button behavior keep the default, which leaves the
    /// press to the host loop.
    fn button<L: Lcd + ?Sized>(
        &mut self,
        _button: Button,
        _ctx: &mut ClockContext,
        _lcd: &mut L,
    ) -> ButtonOutcome {
        ButtonOutcome::Unhandled
    }
}
