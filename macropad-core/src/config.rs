//! Fixed configuration of the keypad
//!
//! The device is configured entirely at build time. Pin-to-line wiring lives
//! in the firmware crate; everything the core logic needs is here.

use crate::traits::Rgb;

/// Number of standalone keys (the encoder switch is handled separately).
pub const KEY_COUNT: usize = 3;

/// Number of pixels on the indicator strip.
pub const PIXEL_COUNT: usize = 3;

/// Fixed inter-iteration delay of the control loop. This is the debounce
/// window: contact bounce shorter than one loop period is invisible to the
/// single-sample edge detector.
pub const LOOP_DELAY_MS: u32 = 2;

/// Settle delay after clock configuration, before the boot decision.
pub const SETTLE_DELAY_MS: u32 = 10;

/// Wait after HID init to accommodate host-side USB enumeration latency.
pub const USB_ENUMERATION_DELAY_MS: u32 = 500;

/// Maximum permitted time between watchdog refreshes before a forced reset.
pub const LIVENESS_BOUND_MS: u32 = 100;

/// All pixels lit at near-full brightness while waiting in bootloader mode.
pub const BOOTLOADER_FILL: Rgb = Rgb::new(127, 127, 127);

/// Static "ready" signature shown on the strip after a normal boot.
pub const READY_SIGNATURE: [Rgb; PIXEL_COUNT] = [
    Rgb::new(255, 33, 140),
    Rgb::new(255, 216, 0),
    Rgb::new(33, 177, 255),
];
