use arduino_hal::pac::TC0;
use halfstep::drivers::{stepper::TickSource, time::Atmega328pTick};

/// Timer0 as a polled tick source: normal mode, clk/64, TOV0 set on every
/// wrap of the 8-bit counter (1.024 ms at 16 MHz). Interrupts stay off.
pub struct Timer0Tick {
    timer_counter: TC0,
}

impl Timer0Tick {
    pub fn new(timer_counter: TC0) -> Self {
        // TCCR0A (Timer/Counter Control Register): WGM01:0 Waveform Generation Mode : Normal, TOP = 0xFF
        timer_counter.tccr0a().write(|w| w.wgm0().normal_top());

        // TIMSK0 (Timer/Counter Interrupt Mask): nothing, the overflow flag is polled
        timer_counter.timsk0().reset();

        timer_counter.tcnt0().reset();

        // TCCR0B (Timer/Counter Control Register): CS0 (Clock Select) clk/64
        timer_counter.tccr0b().write(|w| w.cs0().prescale_64());

        let mut tick = Self { timer_counter };
        // Drop any overflow raised before the prescaler was set
        tick.clear_tick();

        tick
    }
}

impl TickSource for Timer0Tick {
    const PERIOD_NS: u32 = Atmega328pTick::PERIOD_NS;

    fn has_ticked(&self) -> bool {
        self.timer_counter.tifr0().read().tov0().bit_is_set()
    }

    fn clear_tick(&mut self) {
        // TIFR0: TOV0 is cleared by writing a logic one to it
        self.timer_counter.tifr0().write(|w| w.tov0().set_bit());
    }
}
