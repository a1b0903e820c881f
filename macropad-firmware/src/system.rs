//! RP2040 system services: timed waits, watchdog, bootloader entry

use embassy_rp::watchdog::Watchdog;
use embassy_time::{block_for, Duration};

use macropad_core::config::LIVENESS_BOUND_MS;
use macropad_core::traits::System;

pub struct Board {
    watchdog: Watchdog,
}

impl Board {
    pub fn new(watchdog: Watchdog) -> Self {
        Self { watchdog }
    }
}

impl System for Board {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }

    fn watchdog_start(&mut self) {
        self.watchdog.start(Duration::from_millis(LIVENESS_BOUND_MS as u64));
    }

    fn watchdog_feed(&mut self) {
        self.watchdog.feed();
    }

    fn enter_bootloader(&mut self) -> ! {
        // Reboot into the ROM's USB mass-storage flashing mode.
        embassy_rp::rom_data::reset_to_usb_boot(0, 0);
        loop {
            cortex_m::asm::wfe();
        }
    }
}
