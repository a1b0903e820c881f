//! Watchdog supervision of the control loop
//!
//! A coarse hang-recovery mechanism: the hardware watchdog is armed once
//! after HID init and must be refreshed every loop iteration. If any action
//! call stalls past the liveness bound, the device force-resets. No
//! diagnosis, no local recovery; only guaranteed forward progress.

use crate::traits::System;

/// Armed/disarmed state of the liveness timer.
///
/// Refreshes before arming are ignored, so the loop may call
/// [`Supervisor::refresh`] unconditionally.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Supervisor {
    armed: bool,
}

impl Supervisor {
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Arm the hardware watchdog. Called once, after HID init.
    pub fn arm<S: System>(&mut self, sys: &mut S) {
        sys.watchdog_start();
        self.armed = true;
    }

    /// Refresh the watchdog to its full bound. No-op until armed.
    pub fn refresh<S: System>(&mut self, sys: &mut S) {
        if self.armed {
            sys.watchdog_feed();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}
