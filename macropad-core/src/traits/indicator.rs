//! Indicator strip interface

use crate::config::PIXEL_COUNT;

/// One pixel color on the indicator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The addressable-LED collaborator: stage pixel colors, then commit.
///
/// Calls are best-effort and have no return value; indices beyond the strip
/// length are ignored.
pub trait Indicator {
    /// Stage `color` for the pixel at `index`.
    fn set(&mut self, index: usize, color: Rgb);

    /// Commit the staged colors to the strip.
    fn flush(&mut self);

    /// Stage all pixels off.
    fn clear(&mut self) {
        self.fill(Rgb::OFF);
    }

    /// Stage `color` on every pixel.
    fn fill(&mut self, color: Rgb) {
        for index in 0..PIXEL_COUNT {
            self.set(index, color);
        }
    }
}
