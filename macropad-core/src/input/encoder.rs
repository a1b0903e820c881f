//! Rotary encoder direction decoding
//!
//! A half-step decoder: rotation is derived from the relative phase of the
//! two encoder channels at the moment channel A rises. Channel B is always
//! sampled fresh at that instant, never stored. If both channels change
//! within the same sampling instant, whichever level B holds wins; no retry,
//! no ambiguity detection.

use super::channel::{InputChannel, Transition};
use crate::traits::{InputSampler, Line};

/// One detected rotation step, directionally classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Direction decoder over the encoder's A/B channels.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Encoder {
    channel_a: InputChannel,
}

impl Encoder {
    pub const fn new() -> Self {
        Self {
            channel_a: InputChannel::new(Line::EncoderA),
        }
    }

    /// Sample channel A once; on a rising edge, classify the tick by channel
    /// B's current level. A falling edge updates the stored A state but
    /// produces no rotation event.
    pub fn poll<S: InputSampler>(&mut self, sampler: &mut S) -> Option<Rotation> {
        match self.channel_a.detect(sampler)? {
            Transition::Rose => {
                if sampler.read(Line::EncoderB) {
                    Some(Rotation::Clockwise)
                } else {
                    Some(Rotation::CounterClockwise)
                }
            }
            Transition::Fell => None,
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
