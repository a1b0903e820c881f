//! Board-agnostic core logic for the MacroPad firmware
//!
//! This crate contains all control-flow logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (input sampler, HID, indicator, system)
//! - Debounced edge detection for the keys and encoder lines
//! - Rotary encoder direction decoding
//! - The per-iteration dispatch of transitions to HID actions
//! - Boot sequencing (bootloader fork, ready signature, HID bring-up)
//! - Watchdog supervision of the main loop

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod boot;
pub mod config;
pub mod input;
pub mod keymap;
pub mod keypad;
pub mod liveness;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
