mod cursor;
#[cfg(test)]
pub(crate) mod fakes;
pub mod gearing;
pub mod pins;
mod sequencer;
mod table;

pub use cursor::{Cursor, RotationDirection};
pub use sequencer::{HomingOutcome, Sequencer};
pub use table::{HalfStep, PhasePattern, StepTable, Wire};

/// Periodic timer event, polled and acknowledged by the sequencer.
pub trait TickSource {
    /// Time between two tick events.
    const PERIOD_NS: u32;

    /// Non-destructive peek at the "tick occurred" flag.
    fn has_ticked(&self) -> bool;

    fn clear_tick(&mut self);
}

/// The four driver lines of the motor.
pub trait PhaseOutput {
    fn write(&mut self, pattern: PhasePattern);
}

/// Limit switch used to find the home position.
pub trait HomeSensor {
    fn is_released(&mut self) -> bool;
}

impl<T: TickSource> TickSource for &mut T {
    const PERIOD_NS: u32 = T::PERIOD_NS;

    fn has_ticked(&self) -> bool {
        T::has_ticked(self)
    }

    fn clear_tick(&mut self) {
        T::clear_tick(self)
    }
}

impl<T: PhaseOutput> PhaseOutput for &mut T {
    fn write(&mut self, pattern: PhasePattern) {
        T::write(self, pattern)
    }
}

impl<T: HomeSensor> HomeSensor for &mut T {
    fn is_released(&mut self) -> bool {
        T::is_released(self)
    }
}
