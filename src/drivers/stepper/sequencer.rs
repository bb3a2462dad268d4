use super::{
    cursor::{Cursor, RotationDirection},
    table::{PhasePattern, StepTable},
    HomeSensor, PhaseOutput, TickSource,
};

/// How a homing sweep ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomingOutcome {
    /// The switch reported "released" after `steps` half-steps.
    Home { steps: u16 },
    /// The whole sweep ran without the switch releasing.
    SweepExhausted { steps: u16 },
}

/// Drives the half-step cycle on `Port`, paced by `Ticks`.
///
/// The cursor starts at 0 and is only ever moved by [`Sequencer::advance`].
/// Nothing here yields: every wait is a busy poll of the tick flag.
pub struct Sequencer<Port: PhaseOutput, Ticks: TickSource> {
    port: Port,
    ticks: Ticks,
    cursor: Cursor,
}

impl<Port: PhaseOutput, Ticks: TickSource> Sequencer<Port, Ticks> {
    pub fn new(port: Port, ticks: Ticks) -> Self {
        Self {
            port,
            ticks,
            cursor: Cursor::default(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Drives the pattern under the cursor, then moves the cursor one position.
    pub fn advance(&mut self, direction: RotationDirection) -> PhasePattern {
        let pattern = StepTable::pattern(self.cursor);
        self.port.write(pattern);
        self.cursor = self.cursor.stepped(direction);

        pattern
    }

    /// Blocks until `count` distinct tick events have been observed.
    pub fn wait_ticks(&mut self, count: u8) {
        self.pause_ticks(count.into())
    }

    /// [`Sequencer::wait_ticks`] with a wider count, for dwell pauses between moves.
    pub fn pause_ticks(&mut self, count: u16) {
        for _ in 0..count {
            while !self.ticks.has_ticked() {
                core::hint::spin_loop();
            }
            // Acknowledge before polling for the next event
            self.ticks.clear_tick();
        }
    }

    /// Takes `|count|` half-steps, clockwise for a positive count.
    ///
    /// The delay follows every step, the last one included. Returns the
    /// number of half-steps taken.
    pub fn run(&mut self, count: i16, ticks_per_step: u8) -> u16 {
        let mut remaining = count;
        let mut taken = 0;

        while let Some(direction) = RotationDirection::of(remaining) {
            self.advance(direction);
            remaining = direction.consume(remaining);
            taken += 1;

            self.wait_ticks(ticks_per_step);
        }

        taken
    }

    /// Same as [`Sequencer::run`], but stops as soon as `sensor` reports
    /// released. The sensor is sampled before each step; a released sample
    /// ends the sweep without stepping or waiting.
    pub fn run_homing<Sensor: HomeSensor>(
        &mut self,
        count: i16,
        ticks_per_step: u8,
        sensor: &mut Sensor,
    ) -> HomingOutcome {
        let mut remaining = count;
        let mut taken = 0;

        while let Some(direction) = RotationDirection::of(remaining) {
            if sensor.is_released() {
                return HomingOutcome::Home { steps: taken };
            }

            self.advance(direction);
            remaining = direction.consume(remaining);
            taken += 1;

            self.wait_ticks(ticks_per_step);
        }

        HomingOutcome::SweepExhausted { steps: taken }
    }

    /// De-energises every wire. The cursor is kept, so the next step resumes
    /// from the same electrical position.
    pub fn release_coils(&mut self) {
        self.port.write(PhasePattern::OFF);
    }

    pub fn into_parts(self) -> (Port, Ticks) {
        (self.port, self.ticks)
    }
}
