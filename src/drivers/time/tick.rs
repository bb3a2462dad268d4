/// Period of a free-running timer that raises its flag every `ROLLOVER`
/// counts of a `TIMER_CLK_HZ / PRESCALER` clock.
///
/// ╔═════════════════════════╦═══════════╦══════════╦═════════════╗
/// ║ TIMER CLOCK             ║ PRESCALER ║ ROLLOVER ║ Tick period ║
/// ╠═════════════════════════╬═══════════╬══════════╬═════════════╣
/// ║ PIC16 4 MHz (FOSC/4)    ║         4 ║      256 ║    1.024 ms ║
/// ║ ATmega328P 16 MHz       ║        64 ║      256 ║    1.024 ms ║
/// ║ ATmega328P 16 MHz       ║       256 ║      256 ║    4.096 ms ║
/// ╚═════════════════════════╩═══════════╩══════════╩═════════════╝
pub struct TickClock<const TIMER_CLK_HZ: u32, const PRESCALER: u32, const ROLLOVER: u32>;

impl<const TIMER_CLK_HZ: u32, const PRESCALER: u32, const ROLLOVER: u32>
    TickClock<TIMER_CLK_HZ, PRESCALER, ROLLOVER>
{
    const PRESCALER_TEST: () = assert!(
        (PRESCALER == 1)
            || (PRESCALER == 2)
            || (PRESCALER == 4)
            || (PRESCALER == 8)
            || (PRESCALER == 16)
            || (PRESCALER == 32)
            || (PRESCALER == 64)
            || (PRESCALER == 128)
            || (PRESCALER == 256)
            || (PRESCALER == 1024),
        "unsupported timer prescaler"
    );

    const RANGE_TEST: () = assert!(
        TIMER_CLK_HZ > 0 && ROLLOVER > 0,
        "timer clock and rollover must be non zero"
    );

    pub const PERIOD_NS: u32 = {
        let _ = Self::PRESCALER_TEST;
        let _ = Self::RANGE_TEST;

        ((PRESCALER as u64 * ROLLOVER as u64 * 1_000_000_000) / TIMER_CLK_HZ as u64) as u32
    };
}

/// Number of ticks of `period_ns` closest to `millis`, saturating at
/// `u32::MAX`. A zero period yields zero ticks.
pub const fn ticks_for_millis(millis: u32, period_ns: u32) -> u32 {
    if period_ns == 0 {
        return 0;
    }

    let period_ns = period_ns as u64;
    let ticks = (millis as u64 * 1_000_000 + period_ns / 2) / period_ns;

    if ticks > u32::MAX as u64 {
        u32::MAX
    } else {
        ticks as u32
    }
}

/// PIC16F676 at 4 MHz: TIMER0 from FOSC/4, 1:4, 256 counts.
pub type Pic16Tick = TickClock<1_000_000, 4, 256>;

/// Timer0 of an ATmega328P at 16 MHz, 1:64, 256 counts (normal mode).
pub type Atmega328pTick = TickClock<16_000_000, 64, 256>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_boards_tick_every_1024_us() {
        assert_eq!(Pic16Tick::PERIOD_NS, 1_024_000);
        assert_eq!(Atmega328pTick::PERIOD_NS, 1_024_000);
        assert_eq!(TickClock::<16_000_000, 256, 256>::PERIOD_NS, 4_096_000);
    }

    #[test]
    fn millis_round_to_nearest_tick() {
        assert_eq!(ticks_for_millis(500, Atmega328pTick::PERIOD_NS), 488);
        assert_eq!(ticks_for_millis(250, Atmega328pTick::PERIOD_NS), 244);
        assert_eq!(ticks_for_millis(0, Atmega328pTick::PERIOD_NS), 0);
        assert_eq!(ticks_for_millis(1, Atmega328pTick::PERIOD_NS), 1);
    }

    #[test]
    fn short_periods_saturate() {
        assert_eq!(ticks_for_millis(u32::MAX, 1), u32::MAX);
        assert_eq!(ticks_for_millis(100, 0), 0);
    }
}
