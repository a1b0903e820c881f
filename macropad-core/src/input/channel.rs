//! Debounced edge detection for one input line
//!
//! A single-sample edge trigger: each line is sampled once per loop iteration
//! and compared against one stored prior state. The fixed inter-iteration
//! delay is the debounce window. Bounce lasting longer than one loop period
//! can register as a spurious extra transition; this is a known, accepted
//! limitation of the design and must not be "fixed" with multi-sample
//! filtering, which would change the observable timing behavior.

use crate::traits::{InputSampler, Line};

/// A detected change in a line's stable level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Inactive -> active (key pressed).
    Rose,
    /// Active -> inactive (key released).
    Fell,
}

/// Edge detector state for one monitored line.
///
/// `last_stable` is the single source of truth for what the dispatcher
/// believes is currently true about this line. It is mutated only here, once
/// per loop iteration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputChannel {
    line: Line,
    last_stable: bool,
}

impl InputChannel {
    /// Create a channel at its rest state (inactive).
    pub const fn new(line: Line) -> Self {
        Self {
            line,
            last_stable: false,
        }
    }

    /// Sample the line once and report a transition if the level changed.
    ///
    /// Updates `last_stable` in place when a transition is detected, so the
    /// same flip is never reported twice.
    pub fn detect<S: InputSampler>(&mut self, sampler: &mut S) -> Option<Transition> {
        let level = sampler.read(self.line);
        if level == self.last_stable {
            return None;
        }
        self.last_stable = level;
        if level {
            Some(Transition::Rose)
        } else {
            Some(Transition::Fell)
        }
    }

    /// The level observed at the end of the previous iteration.
    pub fn last_stable(&self) -> bool {
        self.last_stable
    }

    pub fn line(&self) -> Line {
        self.line
    }
}
