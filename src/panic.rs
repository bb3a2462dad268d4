use crate::board::LOG_BAUD_RATE;
use arduino_hal::delay_ms;
use core::panic::PanicInfo;
use halfstep::tools::msg_buffer::MsgBuffer;

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    avr_device::interrupt::disable();

    let dp = unsafe { arduino_hal::Peripherals::steal() };
    let pins = arduino_hal::pins!(dp);

    // De-energise the ULN2003 inputs
    pins.d8.into_output().set_low();
    pins.d9.into_output().set_low();
    pins.d10.into_output().set_low();
    pins.d11.into_output().set_low();

    let mut led_pin = pins.d13.into_output();
    led_pin.set_high();

    let mut serial = arduino_hal::default_serial!(dp, pins, LOG_BAUD_RATE);

    let mut msg_buffer = MsgBuffer::<100>::new();
    let msg = msg_buffer.format(format_args!("{}", info.message()));

    loop {
        if let Some(loc) = info.location() {
            ufmt::uwriteln!(
                &mut serial,
                "Panic: {} at file: {} | line: {}",
                msg,
                loc.file(),
                loc.line()
            )
            .ok();
        } else {
            ufmt::uwriteln!(&mut serial, "Panic: {}", msg).ok();
        }

        led_pin.toggle();
        delay_ms(1_000);
    }
}
