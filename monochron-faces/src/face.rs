//! Face enum and the default face table

use monochron_core::dispatch::{ClockId, DispatchError, Dispatcher};
use monochron_core::state::ClockContext;
use monochron_core::traits::{Button, ButtonOutcome, ClockFace, Lcd};
use monochron_core::InitFlavor;

use crate::analog::AnalogFace;
use crate::bar::BarFace;
use crate::digital::DigitalFace;

pub const ANALOG_HMS: ClockId = ClockId(1);
pub const ANALOG_HM: ClockId = ClockId(2);
pub const DIGITAL_HMS: ClockId = ClockId(3);
pub const DIGITAL_HM: ClockId = ClockId(4);
pub const BAR: ClockId = ClockId(5);

/// Any face in the table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Face {
    Analog(AnalogFace),
    Digital(DigitalFace),
    Bar(BarFace),
}

impl From<AnalogFace> for Face {
    fn from(face: AnalogFace) -> Self {
        Face::Analog(face)
    }
}

impl From<DigitalFace> for Face {
    fn from(face: DigitalFace) -> Self {
        Face::Digital(face)
    }
}

impl From<BarFace> for Face {
    fn from(face: BarFace) -> Self {
        Face::Bar(face)
    }
}

impl ClockFace for Face {
    fn init<L: Lcd + ?Sized>(&mut self, flavor: InitFlavor, ctx: &mut ClockContext, lcd: &mut L) {
        match self {
            Face::Analog(face) => face.init(flavor, ctx, lcd),
            Face::Digital(face) => face.init(flavor, ctx, lcd),
            Face::Bar(face) => face.init(flavor, ctx, lcd),
        }
    }

    fn update<L: Lcd + ?Sized>(&mut self, ctx: &mut ClockContext, lcd: &mut L) {
        match self {
            Face::Analog(face) => face.update(ctx, lcd),
            Face::Digital(face) => face.update(ctx, lcd),
            Face::Bar(face) => face.update(ctx, lcd),
        }
    }

    fn button<L: Lcd + ?Sized>(
        &mut self,
        button: Button,
        ctx: &mut ClockContext,
        lcd: &mut L,
    ) -> ButtonOutcome {
        match self {
            Face::Analog(face) => face.button(button, ctx, lcd),
            Face::Digital(face) => face.button(button, ctx, lcd),
            Face::Bar(face) => face.button(button, ctx, lcd),
        }
    }
}

/// Build the standard face rotation
///
/// Each HM variant follows its HMS sibling and shares its layout, so it is
/// entered with a partial init.
pub fn default_table(ctx: ClockContext) -> Result<Dispatcher<Face>, DispatchError> {
    let mut dispatcher = Dispatcher::new(ctx);
    dispatcher.push(ANALOG_HMS, InitFlavor::Full, AnalogFace::hms().into())?;
    dispatcher.push(ANALOG_HM, InitFlavor::Partial, AnalogFace::hm().into())?;
    dispatcher.push(DIGITAL_HMS, InitFlavor::Full, DigitalFace::hms().into())?;
    dispatcher.push(DIGITAL_HM, InitFlavor::Partial, DigitalFace::hm().into())?;
    dispatcher.push(BAR, InitFlavor::Full, BarFace::new().into())?;
    Ok(dispatcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{hms, ScriptedRtc};
    use monochron_core::config::ClockConfig;
    use monochron_core::control::{ControlOutcome, Controller};
    use monochron_core::state::Palette;
    use monochron_display::FrameBuffer;

    fn controller(config: &ClockConfig) -> Controller<Face> {
        let ctx = ClockContext::new(hms(9, 41, 0), Palette::Normal);
        Controller::new(default_table(ctx).unwrap(), config)
    }

    #[test]
    fn test_default_table_order() {
        let dispatcher = default_table(ClockContext::default()).unwrap();
        assert_eq!(dispatcher.len(), 5);
        assert_eq!(dispatcher.active_id(), ANALOG_HMS);
        assert!(matches!(dispatcher.active().unwrap().face, Face::Analog(_)));
    }

    #[test]
    fn test_plus_cycles_through_all_faces() {
        let mut controller = controller(&ClockConfig::default());
        let mut rtc = ScriptedRtc::at(hms(9, 41, 0));
        let mut fb = FrameBuffer::new();
        controller.start(&mut rtc, &mut fb).unwrap();

        let mut visited = heapless::Vec::<ClockId, 8>::new();
        for _ in 0..5 {
            match controller.button(Button::Plus, &mut rtc, &mut fb).unwrap() {
                ControlOutcome::Switched(id) => visited.push(id).unwrap(),
                outcome => panic!("unexpected {outcome:?}"),
            }
            controller.tick(&mut rtc, &mut fb).unwrap();
        }
        assert_eq!(
            visited.as_slice(),
            &[ANALOG_HM, DIGITAL_HMS, DIGITAL_HM, BAR, ANALOG_HMS]
        );
    }

    #[test]
    fn test_full_switch_clears_previous_face() {
        let config = ClockConfig {
            initial_clock: ANALOG_HM,
            ..ClockConfig::default()
        };
        let mut controller = controller(&config);
        let mut rtc = ScriptedRtc::at(hms(9, 41, 0));
        let mut fb = FrameBuffer::new();
        controller.start(&mut rtc, &mut fb).unwrap();
        // Dial outline at the top
        assert!(fb.pixel(64, 1));

        controller.button(Button::Plus, &mut rtc, &mut fb).unwrap();
        assert_eq!(controller.dispatcher().active_id(), DIGITAL_HMS);
        assert!(!fb.pixel(64, 1));
    }

    #[test]
    fn test_set_reaches_digital_face_only() {
        let config = ClockConfig {
            initial_clock: DIGITAL_HM,
            ..ClockConfig::default()
        };
        let mut controller = controller(&config);
        let mut rtc = ScriptedRtc::at(hms(9, 41, 0));
        let mut fb = FrameBuffer::new();
        controller.start(&mut rtc, &mut fb).unwrap();

        let outcome = controller.button(Button::Set, &mut rtc, &mut fb).unwrap();
        assert_eq!(outcome, ControlOutcome::Handled);

        controller.button(Button::Plus, &mut rtc, &mut fb).unwrap();
        let outcome = controller.button(Button::Set, &mut rtc, &mut fb).unwrap();
        assert_eq!(outcome, ControlOutcome::Ignored);
    }

    #[test]
    fn test_inverted_palette_renders_light_on_dark() {
        let config = ClockConfig {
            initial_clock: BAR,
            palette: Palette::Inverted,
            ..ClockConfig::default()
        };
        let mut controller = controller(&config);
        let mut rtc = ScriptedRtc::at(hms(9, 41, 0));
        let mut fb = FrameBuffer::new();
        controller.start(&mut rtc, &mut fb).unwrap();

        // Background cleared on, drawing done in off
        assert!(fb.pixel(127, 0));
        assert!(!fb.pixel(12, 6));
    }
}
