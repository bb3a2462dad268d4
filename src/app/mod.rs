mod shuttle;

pub use shuttle::Shuttle;

use crate::{
    config::{ConfigError, MotionConfig},
    drivers::stepper::{HomeSensor, HomingOutcome, PhaseOutput, Sequencer, TickSource},
};
use core::convert::Infallible;
use ufmt::{uWrite, uwriteln};

pub struct Application<Port, Ticks, Sensor, Log>
where
    Port: PhaseOutput,
    Ticks: TickSource,
    Sensor: HomeSensor,
    Log: uWrite,
{
    shuttle: Shuttle<Port, Ticks, Sensor>,
    config: MotionConfig,
    log: Log,
    cycle: u32,
}

impl<Port, Ticks, Sensor, Log> Application<Port, Ticks, Sensor, Log>
where
    Port: PhaseOutput,
    Ticks: TickSource,
    Sensor: HomeSensor,
    Log: uWrite,
{
    pub fn new(
        stepper_motor: Sequencer<Port, Ticks>,
        home_switch: Sensor,
        config: MotionConfig,
        log: Log,
    ) -> Self {
        Self {
            shuttle: Shuttle::new(stepper_motor, home_switch),
            config,
            log,
            cycle: 0,
        }
    }

    /// Homes the motor, then shuttles forever. Only returns if the
    /// configuration is rejected.
    pub fn run(mut self) -> Result<Infallible, ConfigError> {
        if let Err(err) = self.config.validate(Ticks::PERIOD_NS) {
            uwriteln!(self.log, "config: {}", err).ok();
            return Err(err);
        }

        self.init_position();

        loop {
            self.update();
        }
    }

    pub fn init_position(&mut self) -> HomingOutcome {
        uwriteln!(
            self.log,
            "home: sweep {} steps, {} ticks/step, tick {} us",
            self.config.home_sweep_steps,
            self.config.home_ticks_per_step,
            Ticks::PERIOD_NS / 1_000
        )
        .ok();

        let outcome = self.shuttle.init_position(&self.config);
        match outcome {
            HomingOutcome::Home { steps } => {
                uwriteln!(self.log, "home: switch released after {} steps", steps).ok();
            }
            HomingOutcome::SweepExhausted { steps } => {
                uwriteln!(self.log, "home: sweep exhausted after {} steps", steps).ok();
            }
        }

        outcome
    }

    /// One back-and-forth cycle through every configured move.
    pub fn update(&mut self) {
        for shuttle_move in self.config.moves.iter() {
            self.shuttle.shuttle(&self.config, shuttle_move);
        }

        self.cycle = self.cycle.wrapping_add(1);

        let cursor = self.shuttle.stepper_motor().cursor().index() as u8;
        uwriteln!(self.log, "cycle {}: cursor {}", self.cycle, cursor).ok();
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn into_parts(self) -> (Shuttle<Port, Ticks, Sensor>, Log) {
        (self.shuttle, self.log)
    }
}
