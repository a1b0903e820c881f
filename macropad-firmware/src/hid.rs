//! USB HID keyboard collaborator
//!
//! The device enumerates as a boot keyboard. Action calls from the control
//! loop are queued on a bounded channel and consumed by a writer task that
//! maintains the 6-slot key roster; a full queue or an unconfigured bus
//! drops events, matching the fire-and-forget contract.

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::Channel;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, UsbDevice};
use static_cell::StaticCell;
use usbd_hid::descriptor::{KeyboardReport, SerializedDescriptor};

use macropad_core::keymap::KeyCode;
use macropad_core::traits::HidActions;

const USB_VID: u16 = 0x16c0;
const USB_PID: u16 = 0x27db;

type UsbDriver = Driver<'static, USB>;

/// A queued key state change.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum KeyEvent {
    Press(KeyCode),
    Release(KeyCode),
    /// Press and release in one report pair.
    Tap(KeyCode),
}

static KEY_EVENTS: Channel<ThreadModeRawMutex, KeyEvent, 8> = Channel::new();

static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static HID_STATE: StaticCell<State<'static>> = StaticCell::new();

struct Parts {
    device: UsbDevice<'static, UsbDriver>,
    writer: HidWriter<'static, UsbDriver, 8>,
}

/// HID actions over the USB device stack.
///
/// The stack is assembled eagerly so the builder buffers get their static
/// homes, but its tasks start only on `init` - the bootloader boot path
/// never brings up USB.
pub struct UsbHid {
    spawner: Spawner,
    parts: Option<Parts>,
}

impl UsbHid {
    pub fn new(spawner: Spawner, driver: UsbDriver) -> Self {
        let mut config = embassy_usb::Config::new(USB_VID, USB_PID);
        config.manufacturer = Some("macropad");
        config.product = Some("MacroPad");
        config.serial_number = Some("0001");
        config.device_class = 0x03; // HID
        config.device_sub_class = 0x01; // Boot Interface Subclass
        config.device_protocol = 0x01; // Keyboard
        config.max_power = 100;
        config.max_packet_size_0 = 64;

        let mut builder = Builder::new(
            driver,
            config,
            CONFIG_DESCRIPTOR.init([0; 256]),
            BOS_DESCRIPTOR.init([0; 256]),
            MSOS_DESCRIPTOR.init([0; 256]),
            CONTROL_BUF.init([0; 64]),
        );

        let writer = HidWriter::new(
            &mut builder,
            HID_STATE.init(State::new()),
            HidConfig {
                report_descriptor: KeyboardReport::desc(),
                request_handler: None,
                poll_ms: 1,
                max_packet_size: 8,
            },
        );

        let device = builder.build();

        Self {
            spawner,
            parts: Some(Parts { device, writer }),
        }
    }

    fn send(&self, event: KeyEvent) {
        // Dropping under backpressure is the contract; the watchdog covers
        // everything worse.
        if KEY_EVENTS.try_send(event).is_err() {
            warn!("HID queue full, dropping {:?}", event);
        }
    }
}

impl HidActions for UsbHid {
    fn init(&mut self) {
        if let Some(parts) = self.parts.take() {
            self.spawner.must_spawn(usb_task(parts.device));
            self.spawner.must_spawn(writer_task(parts.writer));
            info!("USB HID interface up");
        }
    }

    fn press(&mut self, code: KeyCode) {
        self.send(KeyEvent::Press(code));
    }

    fn release(&mut self, code: KeyCode) {
        self.send(KeyEvent::Release(code));
    }

    fn type_once(&mut self, code: KeyCode) {
        self.send(KeyEvent::Tap(code));
    }
}

/// Currently-held keys, mirroring the 6-slot boot keyboard report.
#[derive(Default)]
struct KeyRoster {
    slots: [u8; 6],
}

impl KeyRoster {
    fn press(&mut self, code: KeyCode) {
        if self.slots.contains(&code.0) {
            return;
        }
        // More than six held keys: drop the newest, best-effort.
        if let Some(slot) = self.slots.iter_mut().find(|slot| **slot == 0) {
            *slot = code.0;
        }
    }

    fn release(&mut self, code: KeyCode) {
        for slot in self.slots.iter_mut() {
            if *slot == code.0 {
                *slot = 0;
            }
        }
    }

    fn report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: 0,
            reserved: 0,
            leds: 0,
            keycodes: self.slots,
        }
    }
}

#[embassy_executor::task]
async fn usb_task(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    device.run().await
}

#[embassy_executor::task]
async fn writer_task(mut writer: HidWriter<'static, UsbDriver, 8>) {
    let mut roster = KeyRoster::default();
    loop {
        let event = KEY_EVENTS.receive().await;
        trace!("key event: {:?}", event);
        match event {
            KeyEvent::Press(code) => roster.press(code),
            KeyEvent::Release(code) => roster.release(code),
            KeyEvent::Tap(code) => {
                roster.press(code);
                writer.write_serialize(&roster.report()).await.ok();
                roster.release(code);
            }
        }
        // Write errors mean the bus is unconfigured or stalled; reports are
        // fire-and-forget either way.
        writer.write_serialize(&roster.report()).await.ok();
    }
}
