//! GPIO-backed input sampling

use embassy_rp::gpio::Input;

use macropad_core::traits::{InputSampler, Line};

/// The six monitored lines. The switches pull their lines to ground, so
/// "active" is electrically low for them; encoder channel B is reported as
/// its raw phase level.
pub struct Lines<'d> {
    key1: Input<'d>,
    key2: Input<'d>,
    key3: Input<'d>,
    encoder_a: Input<'d>,
    encoder_b: Input<'d>,
    encoder_switch: Input<'d>,
}

impl<'d> Lines<'d> {
    pub fn new(
        key1: Input<'d>,
        key2: Input<'d>,
        key3: Input<'d>,
        encoder_a: Input<'d>,
        encoder_b: Input<'d>,
        encoder_switch: Input<'d>,
    ) -> Self {
        Self {
            key1,
            key2,
            key3,
            encoder_a,
            encoder_b,
            encoder_switch,
        }
    }
}

impl InputSampler for Lines<'_> {
    fn read(&mut self, line: Line) -> bool {
        let pin = match line {
            Line::Key1 => &self.key1,
            Line::Key2 => &self.key2,
            Line::Key3 => &self.key3,
            Line::EncoderA => &self.encoder_a,
            Line::EncoderB => &self.encoder_b,
            Line::EncoderSwitch => &self.encoder_switch,
        };
        let high = pin.is_high();
        if line.active_high() {
            high
        } else {
            !high
        }
    }
}
