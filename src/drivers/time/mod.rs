pub mod tick;

pub use tick::{ticks_for_millis, Atmega328pTick, Pic16Tick, TickClock};
