use crate::{
    config::{MotionConfig, ShuttleMove},
    drivers::stepper::{HomeSensor, HomingOutcome, PhaseOutput, Sequencer, TickSource},
};

/// Motor plus its home switch: homes once, then moves back and forth.
pub struct Shuttle<Port: PhaseOutput, Ticks: TickSource, Sensor: HomeSensor> {
    stepper_motor: Sequencer<Port, Ticks>,
    home_switch: Sensor,
}

impl<Port: PhaseOutput, Ticks: TickSource, Sensor: HomeSensor> Shuttle<Port, Ticks, Sensor> {
    pub fn new(stepper_motor: Sequencer<Port, Ticks>, home_switch: Sensor) -> Self {
        Self {
            stepper_motor,
            home_switch,
        }
    }

    /// Sweeps toward the switch until it releases or the sweep runs out.
    pub fn init_position(&mut self, config: &MotionConfig) -> HomingOutcome {
        self.stepper_motor.run_homing(
            config.home_sweep_steps,
            config.home_ticks_per_step,
            &mut self.home_switch,
        )
    }

    /// Runs one leg, then idles for its dwell. Returns the half-steps taken.
    ///
    /// `config` is expected to have passed [`MotionConfig::validate`] for
    /// this tick source; a dwell longer than `u16::MAX` ticks is cut to
    /// `u16::MAX` ticks.
    pub fn shuttle(&mut self, config: &MotionConfig, shuttle_move: &ShuttleMove) -> u16 {
        let steps = self
            .stepper_motor
            .run(shuttle_move.steps, shuttle_move.ticks_per_step);

        if config.release_coils_when_idle {
            self.stepper_motor.release_coils();
        }

        let dwell = shuttle_move.dwell_ticks(Ticks::PERIOD_NS);
        self.stepper_motor
            .pause_ticks(u16::try_from(dwell).unwrap_or(u16::MAX));

        steps
    }

    pub fn stepper_motor(&self) -> &Sequencer<Port, Ticks> {
        &self.stepper_motor
    }

    pub fn into_parts(self) -> (Sequencer<Port, Ticks>, Sensor) {
        (self.stepper_motor, self.home_switch)
    }
}
