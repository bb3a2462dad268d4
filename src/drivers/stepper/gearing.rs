#[allow(unused_imports)]
use micromath::F32Ext;

/// Half-steps per output shaft revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gearing {
    half_steps_per_rev: u16,
}

impl Gearing {
    /// 28BYJ-48: 64 half-steps per rotor turn through a 63.684:1 gearbox.
    pub const BYJ48: Gearing = Gearing::new(4076);

    pub const fn new(half_steps_per_rev: u16) -> Self {
        Self { half_steps_per_rev }
    }

    pub const fn half_steps_per_rev(&self) -> u16 {
        self.half_steps_per_rev
    }

    /// Half-steps for a quarter of an output revolution, rounded down.
    pub const fn quarter_turn_steps(&self) -> i16 {
        (self.half_steps_per_rev / 4) as i16
    }

    pub fn step_angle_deg(&self) -> f32 {
        360.0 / self.half_steps_per_rev as f32
    }

    /// Signed half-step count for a rotation, clockwise for a positive angle.
    /// Saturates at the `i16` range.
    pub fn steps_for_angle(&self, angle_deg: f32) -> i16 {
        let steps = (angle_deg / self.step_angle_deg()).round();
        if steps >= i16::MAX as f32 {
            i16::MAX
        } else if steps <= i16::MIN as f32 {
            i16::MIN
        } else {
            steps as i16
        }
    }

    /// Inter-step delay, in ticks of `tick_period_us`, for a shaft speed.
    ///
    /// Clamped to 1..=255: a step can't be paced faster than one tick, and
    /// the per-step delay is an 8-bit count.
    pub fn ticks_per_step_for_speed(&self, speed_deg_s: f32, tick_period_us: u32) -> u8 {
        let speed = speed_deg_s.abs();
        if speed == 0.0 || tick_period_us == 0 {
            return u8::MAX;
        }

        let step_period_us = self.step_angle_deg() / speed * 1_000_000.0;
        let ticks = (step_period_us / tick_period_us as f32).round();

        if ticks <= 1.0 {
            1
        } else if ticks >= u8::MAX as f32 {
            u8::MAX
        } else {
            ticks as u8
        }
    }
}

impl Default for Gearing {
    fn default() -> Self {
        Self::BYJ48
    }
}
