use crate::drivers::{stepper::gearing::Gearing, time::ticks_for_millis};
use ufmt::{uDisplay, uWrite, Formatter};

/// One leg of the back-and-forth motion run after homing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuttleMove {
    /// Signed half-steps, clockwise when positive.
    pub steps: i16,
    pub ticks_per_step: u8,
    /// Idle time after the move.
    pub dwell_ms: u16,
}

impl ShuttleMove {
    pub const fn new(steps: i16, ticks_per_step: u8, dwell_ms: u16) -> Self {
        Self {
            steps,
            ticks_per_step,
            dwell_ms,
        }
    }

    /// Move of `angle_deg` of the output shaft at `speed_deg_s`, paced by
    /// ticks of `tick_period_ns`.
    pub fn for_angle(
        gearing: &Gearing,
        angle_deg: f32,
        speed_deg_s: f32,
        tick_period_ns: u32,
        dwell_ms: u16,
    ) -> Self {
        Self {
            steps: gearing.steps_for_angle(angle_deg),
            ticks_per_step: gearing.ticks_per_step_for_speed(speed_deg_s, tick_period_ns / 1_000),
            dwell_ms,
        }
    }

    /// Dwell in ticks of `tick_period_ns`, rounded to the nearest tick.
    pub const fn dwell_ticks(&self, tick_period_ns: u32) -> u32 {
        ticks_for_millis(self.dwell_ms as u32, tick_period_ns)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyHomeSweep,
    EmptyMove { index: usize },
    DwellTooLong { index: usize },
}

impl uDisplay for ConfigError {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            ConfigError::EmptyHomeSweep => f.write_str("home sweep has no steps"),
            ConfigError::EmptyMove { index } => {
                ufmt::uwrite!(f, "move {} has no steps", *index as u16)
            }
            ConfigError::DwellTooLong { index } => {
                ufmt::uwrite!(f, "move {} dwell overflows the tick count", *index as u16)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionConfig {
    /// Homing sweep, signed like a step count. One output revolution of a
    /// 28BYJ-48 by default so the switch is found from any start position.
    pub home_sweep_steps: i16,
    pub home_ticks_per_step: u8,
    pub moves: [ShuttleMove; 2],
    /// De-energise the wires during dwells instead of holding position.
    pub release_coils_when_idle: bool,
}

impl MotionConfig {
    const HOME_SWEEP_STEPS: i16 = -(Gearing::BYJ48.half_steps_per_rev() as i16);
    const HOME_TICKS_PER_STEP: u8 = 20; // ~20 ms per half-step

    const QUARTER_TURN_STEPS: i16 = Gearing::BYJ48.quarter_turn_steps();

    pub const DEFAULT: MotionConfig = MotionConfig {
        home_sweep_steps: Self::HOME_SWEEP_STEPS,
        home_ticks_per_step: Self::HOME_TICKS_PER_STEP,
        moves: [
            // ~4.2 s clockwise
            ShuttleMove::new(Self::QUARTER_TURN_STEPS, 4, 500),
            // ~2.1 s back
            ShuttleMove::new(-Self::QUARTER_TURN_STEPS, 2, 250),
        ],
        release_coils_when_idle: false,
    };

    /// Checks the config against a tick source of `tick_period_ns`.
    pub fn validate(&self, tick_period_ns: u32) -> Result<(), ConfigError> {
        if self.home_sweep_steps == 0 {
            return Err(ConfigError::EmptyHomeSweep);
        }

        for (index, shuttle_move) in self.moves.iter().enumerate() {
            if shuttle_move.steps == 0 {
                return Err(ConfigError::EmptyMove { index });
            }
            if shuttle_move.dwell_ticks(tick_period_ns) > u16::MAX as u32 {
                return Err(ConfigError::DwellTooLong { index });
            }
        }

        Ok(())
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::time::Atmega328pTick;

    struct Line(String);

    impl uWrite for Line {
        type Error = core::convert::Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    const TICK_NS: u32 = Atmega328pTick::PERIOD_NS;

    #[test]
    fn default_is_valid() {
        let config = MotionConfig::default();
        assert_eq!(config.validate(TICK_NS), Ok(()));
        assert_eq!(config.moves[0].dwell_ticks(TICK_NS), 488);
        assert_eq!(config.moves[1].dwell_ticks(TICK_NS), 244);
    }

    #[test]
    fn default_sweep_and_moves_follow_the_gearing() {
        let config = MotionConfig::DEFAULT;
        let gearing = Gearing::BYJ48;

        assert_eq!(config.home_sweep_steps, -4076);
        assert_eq!(config.home_sweep_steps, -(gearing.half_steps_per_rev() as i16));
        assert_eq!(config.moves[0].steps, gearing.quarter_turn_steps());
        assert_eq!(config.moves[1].steps, -gearing.quarter_turn_steps());
    }

    #[test]
    fn move_from_angle_and_speed() {
        // quarter turn out in ~4.17 s, back in ~2.09 s
        let out = ShuttleMove::for_angle(&Gearing::BYJ48, 90.0, 90.0 / 4.174, TICK_NS, 500);
        let back = ShuttleMove::for_angle(&Gearing::BYJ48, -90.0, 90.0 / 2.087, TICK_NS, 250);

        assert_eq!([out, back], MotionConfig::DEFAULT.moves);
    }

    #[test]
    fn rejects_empty_sweep_and_moves() {
        let mut config = MotionConfig::DEFAULT;
        config.home_sweep_steps = 0;
        assert_eq!(config.validate(TICK_NS), Err(ConfigError::EmptyHomeSweep));

        let mut config = MotionConfig::DEFAULT;
        config.moves[1].steps = 0;
        assert_eq!(config.validate(TICK_NS), Err(ConfigError::EmptyMove { index: 1 }));
    }

    #[test]
    fn rejects_dwell_that_overflows_the_pause_counter() {
        let mut config = MotionConfig::DEFAULT;
        config.moves[0].dwell_ms = 20_000;

        assert_eq!(config.validate(TICK_NS), Ok(()));
        assert_eq!(
            config.validate(256_000),
            Err(ConfigError::DwellTooLong { index: 0 })
        );
    }

    #[test]
    fn errors_print_over_ufmt() {
        let mut line = Line(String::new());
        ufmt::uwrite!(line, "{}", ConfigError::DwellTooLong { index: 1 }).ok();
        assert_eq!(line.0, "move 1 dwell overflows the tick count");
    }
}
