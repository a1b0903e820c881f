//! Transition-to-action dispatch
//!
//! [`Keypad`] owns all per-channel edge-detector state and drives one
//! iteration of the control loop: sample every channel in a fixed order and
//! invoke the bound HID action for each detected transition.

use crate::config::KEY_COUNT;
use crate::input::{Encoder, InputChannel, Rotation, Transition};
use crate::keymap::Keymap;
use crate::traits::{HidActions, InputSampler, Line};

/// The loop driver: edge detectors for every input plus the bindings table.
///
/// Exclusively owned and mutated by the single loop thread; there is no
/// second mutator and no locking.
#[derive(Debug)]
pub struct Keypad {
    keys: [InputChannel; KEY_COUNT],
    encoder: Encoder,
    switch: InputChannel,
    keymap: Keymap,
}

impl Keypad {
    pub const fn new(keymap: Keymap) -> Self {
        Self {
            keys: [
                InputChannel::new(Line::Key1),
                InputChannel::new(Line::Key2),
                InputChannel::new(Line::Key3),
            ],
            encoder: Encoder::new(),
            switch: InputChannel::new(Line::EncoderSwitch),
            keymap,
        }
    }

    /// Run one loop iteration: keys in order, then encoder rotation, then
    /// the encoder switch. At most one transition per channel is processed
    /// per call, and each transition invokes exactly one action.
    ///
    /// Call once per loop period ([`crate::config::LOOP_DELAY_MS`]); the
    /// fixed period between calls is the debounce window.
    pub fn service<S, H>(&mut self, sampler: &mut S, hid: &mut H)
    where
        S: InputSampler,
        H: HidActions,
    {
        for (channel, code) in self.keys.iter_mut().zip(self.keymap.keys) {
            match channel.detect(sampler) {
                Some(Transition::Rose) => hid.press(code),
                Some(Transition::Fell) => hid.release(code),
                None => {}
            }
        }

        match self.encoder.poll(sampler) {
            Some(Rotation::Clockwise) => hid.type_once(self.keymap.rotate_cw),
            Some(Rotation::CounterClockwise) => hid.type_once(self.keymap.rotate_ccw),
            None => {}
        }

        match self.switch.detect(sampler) {
            Some(Transition::Rose) => hid.press(self.keymap.encoder_switch),
            Some(Transition::Fell) => hid.release(self.keymap.encoder_switch),
            None => {}
        }
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(Keymap::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyCode;
    use crate::mock::{HidCall, MockHid, MockSampler};

    #[test]
    fn test_quiet_iteration_dispatches_nothing() {
        let mut sampler = MockSampler::new();
        let mut hid = MockHid::new();
        let mut keypad = Keypad::default();

        keypad.service(&mut sampler, &mut hid);
        keypad.service(&mut sampler, &mut hid);
        assert!(hid.calls.is_empty());
    }

    #[test]
    fn test_dispatch_order_is_deterministic() {
        let mut sampler = MockSampler::new();
        let mut hid = MockHid::new();
        let mut keypad = Keypad::default();

        // Keys 1 and 3 and the encoder switch all transition in the same
        // iteration.
        sampler.set(Line::Key1, true);
        sampler.set(Line::Key3, true);
        sampler.set(Line::EncoderSwitch, true);
        keypad.service(&mut sampler, &mut hid);

        assert_eq!(
            hid.calls,
            [
                HidCall::Press(KeyCode::F13),
                HidCall::Press(KeyCode::F15),
                HidCall::Press(KeyCode::F17),
            ]
        );
    }

    #[test]
    fn test_rotation_dispatches_between_keys_and_switch() {
        let mut sampler = MockSampler::new();
        let mut hid = MockHid::new();
        let mut keypad = Keypad::default();

        sampler.set(Line::Key2, true);
        sampler.set(Line::EncoderA, true);
        sampler.set(Line::EncoderB, true);
        sampler.set(Line::EncoderSwitch, true);
        keypad.service(&mut sampler, &mut hid);

        assert_eq!(
            hid.calls,
            [
                HidCall::Press(KeyCode::F14),
                HidCall::Type(KeyCode::F18),
                HidCall::Press(KeyCode::F17),
            ]
        );
    }

    #[test]
    fn test_counter_clockwise_tick_types_bound_code() {
        let mut sampler = MockSampler::new();
        let mut hid = MockHid::new();
        let mut keypad = Keypad::default();

        sampler.set(Line::EncoderA, true);
        keypad.service(&mut sampler, &mut hid);

        assert_eq!(hid.calls, [HidCall::Type(KeyCode::F16)]);
    }

    #[test]
    fn test_press_release_press_end_to_end() {
        let mut sampler = MockSampler::new();
        let mut hid = MockHid::new();
        let mut keypad = Keypad::default();

        sampler.set(Line::Key1, true);
        keypad.service(&mut sampler, &mut hid);
        sampler.set(Line::Key1, false);
        keypad.service(&mut sampler, &mut hid);
        sampler.set(Line::Key1, true);
        keypad.service(&mut sampler, &mut hid);

        assert_eq!(
            hid.calls,
            [
                HidCall::Press(KeyCode::F13),
                HidCall::Release(KeyCode::F13),
                HidCall::Press(KeyCode::F13),
            ]
        );
    }

    #[test]
    fn test_held_key_dispatches_once() {
        let mut sampler = MockSampler::new();
        let mut hid = MockHid::new();
        let mut keypad = Keypad::default();

        sampler.set(Line::Key1, true);
        for _ in 0..10 {
            keypad.service(&mut sampler, &mut hid);
        }

        assert_eq!(hid.calls, [HidCall::Press(KeyCode::F13)]);
    }
}
