//! Arduino Nano bring-up.
//!
//! ╔═══════╦══════════════════════════════╗
//! ║ Pin   ║ Use                          ║
//! ╠═══════╬══════════════════════════════╣
//! ║ D8    ║ ULN2003 IN1, wire A (orange) ║
//! ║ D9    ║ ULN2003 IN2, wire B (yellow) ║
//! ║ D10   ║ ULN2003 IN3, wire C (pink)   ║
//! ║ D11   ║ ULN2003 IN4, wire D (blue)   ║
//! ║ D2    ║ home switch to GND, pull-up  ║
//! ║ D13   ║ on-board LED, panic only     ║
//! ║ D0/D1 ║ USART log, 57600 baud        ║
//! ╚═══════╩══════════════════════════════╝

mod timer0;

pub use timer0::Timer0Tick;

pub const LOG_BAUD_RATE: u32 = 57_600;
