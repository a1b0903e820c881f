//! Input event detection
//!
//! Debounced edge detection for the digital lines and direction decoding for
//! the rotary encoder.

pub mod channel;
pub mod encoder;

pub use channel::{InputChannel, Transition};
pub use encoder::{Encoder, Rotation};
