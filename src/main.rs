#![no_std]
#![no_main]

mod board;
mod panic;

use board::{Timer0Tick, LOG_BAUD_RATE};
use halfstep::{
    app::Application,
    drivers::stepper::{
        pins::{HomeSwitch, PhasePins, SwitchPolarity},
        Sequencer,
    },
    MotionConfig,
};

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    // Motion is paced by polling TOV0, nothing may preempt a step
    avr_device::interrupt::disable();

    let mut serial = arduino_hal::default_serial!(dp, pins, LOG_BAUD_RATE);
    ufmt::uwriteln!(&mut serial, "halfstep").ok();

    // ULN2003 IN1..IN4
    let phases = PhasePins::new(
        pins.d8.into_output(),
        pins.d9.into_output(),
        pins.d10.into_output(),
        pins.d11.into_output(),
    );

    // Switch pulls D2 low while the shuttle sits on it
    let home_switch = HomeSwitch::new(pins.d2.into_pull_up_input(), SwitchPolarity::ReleasedHigh);

    let stepper_motor = Sequencer::new(phases, Timer0Tick::new(dp.TC0));

    let app = Application::new(stepper_motor, home_switch, MotionConfig::DEFAULT, serial);

    match app.run() {
        Ok(never) => match never {},
        Err(_) => panic!("invalid motion config"),
    }
}
