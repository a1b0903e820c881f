//! Raw input sampling

/// Logical identity of one monitored input line.
///
/// The physical layout, left to right: three keys, then the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Key1,
    Key2,
    Key3,
    EncoderA,
    EncoderB,
    EncoderSwitch,
}

impl Line {
    /// Electrical convention for samplers reading raw pin levels.
    ///
    /// The switches all close to ground against pull-ups, so their active
    /// level is low. Encoder channel B is the exception: it carries the raw
    /// quadrature phase, and a clockwise step reads channel B high at
    /// channel A's active edge.
    pub const fn active_high(self) -> bool {
        matches!(self, Line::EncoderB)
    }
}

/// Access to the current logical level of each input line.
///
/// Implementations return `true` for "active" (key pressed, channel
/// asserted), mapping raw pin levels per [`Line::active_high`].
pub trait InputSampler {
    /// Read the current level of `line`.
    ///
    /// No debouncing, never blocks.
    fn read(&mut self, line: Line) -> bool;
}
