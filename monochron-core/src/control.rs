//! Host-loop controller
//!
//! Ties the periodic animation tick and the button events to the
//! dispatcher:
//! - Applies the start-up configuration
//! - Bumps the cycle counter and draws one cycle per tick
//! - Offers button presses to the active face first
//! - Switches to the next face when `Plus` is left unhandled

use crate::config::ClockConfig;
use crate::dispatch::{ClockId, DispatchError, Dispatcher, DrawMode};
use crate::state::{AlarmState, ClockContext, DateTime};
use crate::traits::{Button, ButtonOutcome, ClockFace, Lcd, RtcSource};

/// Animation tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 75;

/// What the controller did with a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlOutcome {
    /// The active face consumed the press
    Handled,
    /// Switched to the face with this id
    Switched(ClockId),
    /// Nobody used the press
    Ignored,
}

/// Controller owning the dispatcher
pub struct Controller<F> {
    dispatcher: Dispatcher<F>,
}

impl<F: ClockFace> Controller<F> {
    /// Wrap a populated dispatcher and apply the configuration
    ///
    /// An unknown start-up face is logged and the first entry is kept.
    pub fn new(mut dispatcher: Dispatcher<F>, config: &ClockConfig) -> Self {
        let ctx = dispatcher.context_mut();
        ctx.alarm = AlarmState::new(config.alarm_hour, config.alarm_minute);
        if ctx.colors.palette() != config.palette {
            ctx.colors.swap();
        }

        if !config.initial_clock.is_none() {
            if let Err(_e) = dispatcher.select(config.initial_clock) {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Configured clock {} not available: {}",
                    config.initial_clock,
                    _e
                );
            }
        }

        Self { dispatcher }
    }

    /// Build a controller around a fresh context at `now`
    pub fn with_time(dispatcher: Dispatcher<F>, config: &ClockConfig, now: DateTime) -> Self {
        let mut controller = Self::new(dispatcher, config);
        controller.dispatcher.set_time(now);
        controller
    }

    pub fn dispatcher(&self) -> &Dispatcher<F> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<F> {
        &mut self.dispatcher
    }

    pub fn context(&self) -> &ClockContext {
        self.dispatcher.context()
    }

    /// Paint the active face from scratch
    pub fn start<R, L>(&mut self, rtc: &mut R, lcd: &mut L) -> Result<(), DispatchError>
    where
        R: RtcSource + ?Sized,
        L: Lcd + ?Sized,
    {
        #[cfg(feature = "defmt")]
        defmt::info!("Starting with clock {}", self.dispatcher.active_id());

        self.dispatcher.draw(DrawMode::InitFull, rtc, lcd)
    }

    /// One animation tick
    pub fn tick<R, L>(&mut self, rtc: &mut R, lcd: &mut L) -> Result<(), DispatchError>
    where
        R: RtcSource + ?Sized,
        L: Lcd + ?Sized,
    {
        self.dispatcher.context_mut().tick();
        self.dispatcher.draw(DrawMode::Cycle, rtc, lcd)
    }

    /// Handle a button press
    pub fn button<R, L>(
        &mut self,
        button: Button,
        rtc: &mut R,
        lcd: &mut L,
    ) -> Result<ControlOutcome, DispatchError>
    where
        R: RtcSource + ?Sized,
        L: Lcd + ?Sized,
    {
        if self.dispatcher.button(button, lcd) == ButtonOutcome::Handled {
            return Ok(ControlOutcome::Handled);
        }

        match button {
            Button::Plus => {
                let flavor = self.dispatcher.advance();
                let id = self.dispatcher.active_id();

                #[cfg(feature = "defmt")]
                defmt::info!("Switching to clock {}", id);

                self.dispatcher.draw(DrawMode::from(flavor), rtc, lcd)?;
                Ok(ControlOutcome::Switched(id))
            }
            Button::Menu | Button::Set => Ok(ControlOutcome::Ignored),
        }
    }
}
