//! Key bindings
//!
//! A static, compile-time table mapping each detected transition source to a
//! HID keyboard usage. Immutable after program start; customize the device by
//! editing [`Keymap::default`] and rebuilding.

use crate::config::KEY_COUNT;

/// A HID keyboard usage ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(pub u8);

impl KeyCode {
    pub const F13: Self = Self(0x68);
    pub const F14: Self = Self(0x69);
    pub const F15: Self = Self(0x6a);
    pub const F16: Self = Self(0x6b);
    pub const F17: Self = Self(0x6c);
    pub const F18: Self = Self(0x6d);
}

/// The bindings table: one code per key, one per rotation direction, one for
/// the encoder switch.
///
/// Keys dispatch press/release pairs tracking the physical switch. Rotation
/// ticks are discrete momentary events and dispatch a single type-once call
/// per detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keymap {
    pub keys: [KeyCode; KEY_COUNT],
    pub rotate_cw: KeyCode,
    pub rotate_ccw: KeyCode,
    pub encoder_switch: KeyCode,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            keys: [KeyCode::F13, KeyCode::F14, KeyCode::F15],
            rotate_cw: KeyCode::F18,
            rotate_ccw: KeyCode::F16,
            encoder_switch: KeyCode::F17,
        }
    }
}
