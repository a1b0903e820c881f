//! MacroPad firmware
//!
//! Firmware binary for an RP2040-based USB macro keypad: three keys, a
//! rotary encoder with switch, and a WS2812 indicator strip. All control
//! logic lives in `macropad-core`; this crate wires it to the hardware.
//!
//! Hold the encoder switch while connecting the pad via USB to enter the
//! bootloader (the strip lights up white while in flashing mode).

#![no_std]
#![no_main]

mod hid;
mod indicator;
mod sampler;
mod system;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::{PIO0, USB};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_rp::watchdog::Watchdog;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use macropad_core::boot;
use macropad_core::config::{LOOP_DELAY_MS, USB_ENUMERATION_DELAY_MS};
use macropad_core::keymap::Keymap;
use macropad_core::keypad::Keypad;
use macropad_core::liveness::Supervisor;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("MacroPad firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Keys and encoder lines against internal pull-ups; the sampler maps
    // each line's electrical polarity.
    let mut sampler = sampler::Lines::new(
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
    );

    // WS2812 strip on PIO0.
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let ws2812_program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_8, &ws2812_program);
    let mut indicator = indicator::NeoStrip::new(ws2812);

    // USB HID stack is assembled here but its tasks only start once the
    // boot sequencer asks for HID init.
    let usb_driver = Driver::new(p.USB, Irqs);
    let mut hid = hid::UsbHid::new(spawner, usb_driver);

    let mut sys = system::Board::new(Watchdog::new(p.WATCHDOG));
    let mut supervisor = Supervisor::new();

    // Diverges into the bootloader if the encoder switch is held; returns
    // with the HID tasks spawned otherwise.
    boot::sequence(&mut sampler, &mut indicator, &mut hid, &mut sys);

    // The USB device task runs during this wait, so the host can configure
    // the device before the first loop iteration and the watchdog arms only
    // once that window has passed.
    Timer::after_millis(USB_ENUMERATION_DELAY_MS as u64).await;
    supervisor.arm(&mut sys);
    info!("boot sequence complete, entering control loop");

    let mut keypad = Keypad::new(Keymap::default());
    loop {
        keypad.service(&mut sampler, &mut hid);
        // The fixed loop period is the debounce window.
        Timer::after_millis(LOOP_DELAY_MS as u64).await;
        supervisor.refresh(&mut sys);
    }
}
