//! `embedded-hal` pin adapters for the stepper traits.
//!
//! Only infallible pins are accepted (the AVR port pins are).

use super::{HomeSensor, PhaseOutput, PhasePattern, Wire};
use core::convert::Infallible;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Four output pins, one per motor wire (IN1..IN4 of a ULN2003 board).
pub struct PhasePins<PinA, PinB, PinC, PinD> {
    in_1: PinA,
    in_2: PinB,
    in_3: PinC,
    in_4: PinD,
}

impl<PinA, PinB, PinC, PinD> PhasePins<PinA, PinB, PinC, PinD>
where
    PinA: OutputPin<Error = Infallible>,
    PinB: OutputPin<Error = Infallible>,
    PinC: OutputPin<Error = Infallible>,
    PinD: OutputPin<Error = Infallible>,
{
    /// Takes the pins and drives all of them low.
    pub fn new(in_1: PinA, in_2: PinB, in_3: PinC, in_4: PinD) -> Self {
        let mut pins = Self {
            in_1,
            in_2,
            in_3,
            in_4,
        };
        pins.write(PhasePattern::OFF);

        pins
    }

    fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, pattern: PhasePattern, wire: Wire) {
        let state = PinState::from(pattern.is_energised(wire));
        match pin.set_state(state) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<PinA, PinB, PinC, PinD> PhaseOutput for PhasePins<PinA, PinB, PinC, PinD>
where
    PinA: OutputPin<Error = Infallible>,
    PinB: OutputPin<Error = Infallible>,
    PinC: OutputPin<Error = Infallible>,
    PinD: OutputPin<Error = Infallible>,
{
    fn write(&mut self, pattern: PhasePattern) {
        Self::drive(&mut self.in_1, pattern, Wire::A);
        Self::drive(&mut self.in_2, pattern, Wire::B);
        Self::drive(&mut self.in_3, pattern, Wire::C);
        Self::drive(&mut self.in_4, pattern, Wire::D);
    }
}

/// Logic level the switch input shows once the mechanism has moved off it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwitchPolarity {
    /// Switch to ground with a pull-up: high = released.
    #[default]
    ReleasedHigh,
    ReleasedLow,
}

pub struct HomeSwitch<Pin> {
    pin: Pin,
    polarity: SwitchPolarity,
}

impl<Pin: InputPin<Error = Infallible>> HomeSwitch<Pin> {
    pub fn new(pin: Pin, polarity: SwitchPolarity) -> Self {
        Self { pin, polarity }
    }

}

impl<Pin: InputPin<Error = Infallible>> HomeSensor for HomeSwitch<Pin> {
    fn is_released(&mut self) -> bool {
        let high = match self.pin.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        };

        match self.polarity {
            SwitchPolarity::ReleasedHigh => high,
            SwitchPolarity::ReleasedLow => !high,
        }
    }
}
