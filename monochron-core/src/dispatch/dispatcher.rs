//! Face dispatcher
//!
//! Owns the face table, the active index and the shared context. Every
//! `draw` call first folds the RTC state into the context, so faces only
//! have to look at the precomputed events to decide whether to paint.

use heapless::Vec;

use crate::state::{ClockContext, DateTime};
use crate::traits::{Button, ButtonOutcome, ClockFace, Lcd, RtcSource};

use super::table::{ClockDriver, ClockId, DrawMode, InitFlavor, MAX_CLOCKS};

/// Dispatcher errors
///
/// None of these are fatal; the dispatcher skips the affected call and
/// keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// The active entry is missing or carries the sentinel id
    NoActiveClock,
    /// The table is at capacity
    TableFull,
    /// No entry with the requested id
    UnknownClock,
}

/// Round-robin face dispatcher
pub struct Dispatcher<F> {
    table: Vec<ClockDriver<F>, MAX_CLOCKS>,
    active: usize,
    ctx: ClockContext,
}

impl<F: ClockFace> Dispatcher<F> {
    /// Create an empty dispatcher around a context
    pub fn new(ctx: ClockContext) -> Self {
        Self {
            table: Vec::new(),
            active: 0,
            ctx,
        }
    }

    /// Append a face to the table
    pub fn push(&mut self, id: ClockId, flavor: InitFlavor, face: F) -> Result<(), DispatchError> {
        self.table
            .push(ClockDriver::new(id, flavor, face))
            .map_err(|_| DispatchError::TableFull)
    }

    /// Number of faces in the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Id of the active face, `ClockId::NONE` for an empty table
    pub fn active_id(&self) -> ClockId {
        self.table
            .get(self.active)
            .map(|entry| entry.id)
            .unwrap_or(ClockId::NONE)
    }

    /// The active table entry
    pub fn active(&self) -> Option<&ClockDriver<F>> {
        self.table.get(self.active)
    }

    pub fn context(&self) -> &ClockContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut ClockContext {
        &mut self.ctx
    }

    /// Select the next face, wrapping after the last
    ///
    /// Returns the init flavor of the newly selected entry. Only the
    /// active index changes.
    pub fn advance(&mut self) -> InitFlavor {
        if self.table.is_empty() {
            return InitFlavor::Full;
        }
        self.active = (self.active + 1) % self.table.len();

        #[cfg(feature = "defmt")]
        defmt::debug!("Advanced to clock index {}", self.active);

        self.table
            .get(self.active)
            .map(|entry| entry.flavor)
            .unwrap_or(InitFlavor::Full)
    }

    /// Make the first entry with `id` active
    pub fn select(&mut self, id: ClockId) -> Result<(), DispatchError> {
        let index = self
            .table
            .iter()
            .position(|entry| entry.id == id && !id.is_none())
            .ok_or(DispatchError::UnknownClock)?;
        self.active = index;

        #[cfg(feature = "defmt")]
        defmt::debug!("Selected clock {} at index {}", id, index);

        Ok(())
    }

    /// Run one draw request against the active face
    ///
    /// `Cycle` advances the face by one tick; the init modes (re)paint it
    /// after a switch. Time and date events are computed from the RTC at
    /// the start of the call and consumed at its end.
    pub fn draw<R, L>(&mut self, mode: DrawMode, rtc: &mut R, lcd: &mut L) -> Result<(), DispatchError>
    where
        R: RtcSource + ?Sized,
        L: Lcd + ?Sized,
    {
        self.ctx.alarm.set_alarming(rtc.alarming());

        let Some(entry) = self
            .table
            .get_mut(self.active)
            .filter(|entry| !entry.id.is_none())
        else {
            #[cfg(feature = "defmt")]
            defmt::warn!("No valid clock at index {}, skipping draw", self.active);
            return Err(DispatchError::NoActiveClock);
        };
        let ctx = &mut self.ctx;

        let pending = rtc.time_event_pending();
        if pending {
            ctx.sample(rtc.sample());
        }

        match mode.init_flavor() {
            None => {
                ctx.alarm.check_switch(rtc.alarm_switch_on());
                entry.face.update(ctx, lcd);
                if pending {
                    ctx.time.commit();
                }
                ctx.set_just_initialized(false);
            }
            Some(flavor) => {
                if flavor == InitFlavor::Full {
                    ctx.alarm.reset_switch();
                    lcd.clear(ctx.colors.bg());
                }
                ctx.time.commit();
                ctx.set_just_initialized(true);

                #[cfg(feature = "defmt")]
                defmt::info!("Init clock {} ({})", entry.id, flavor);

                entry.face.init(flavor, ctx, lcd);
            }
        }

        if pending {
            ctx.clear_events();
            rtc.acknowledge();
        }
        Ok(())
    }

    /// Forward a button press to the active face
    pub fn button<L: Lcd + ?Sized>(&mut self, button: Button, lcd: &mut L) -> ButtonOutcome {
        match self.table.get_mut(self.active) {
            Some(entry) if !entry.id.is_none() => entry.face.button(button, &mut self.ctx, lcd),
            _ => ButtonOutcome::Unhandled,
        }
    }

    /// Overwrite both old and new time, e.g. after the clock was set
    pub fn set_time(&mut self, now: DateTime) {
        self.ctx.time.new = now;
        self.ctx.time.commit();
    }
}
