//! Boot sequencing
//!
//! Runs exactly once at startup, before any loop iteration. Decides between
//! firmware-update mode and normal operation from a single sample of the
//! encoder switch, then brings up the indicator signature and the HID
//! interface for normal operation. The decision cannot be re-entered without
//! a power cycle.

use crate::config::{BOOTLOADER_FILL, READY_SIGNATURE, SETTLE_DELAY_MS};
use crate::traits::{HidActions, Indicator, InputSampler, Line, System};

/// The startup mode fork, computed once from the encoder-switch level at
/// power-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootMode {
    /// Re-execute under the firmware-update program.
    Bootloader,
    /// Initialize HID and enter the control loop.
    Normal,
}

impl BootMode {
    /// Hold the encoder switch while connecting the device to request
    /// bootloader entry.
    pub fn from_switch(switch_active: bool) -> Self {
        if switch_active {
            Self::Bootloader
        } else {
            Self::Normal
        }
    }
}

/// Run the boot sequence.
///
/// The caller has already configured the system clock and constructed the
/// indicator driver. On the bootloader path this function diverges through
/// [`System::enter_bootloader`]; on the normal path it returns with HID
/// initialized. The caller then waits out the host's enumeration latency
/// ([`crate::config::USB_ENUMERATION_DELAY_MS`]) in its own scheduling
/// idiom and arms the supervisor; a scheduler-driven HID transport must
/// keep running through that wait.
pub fn sequence<P, I, H, S>(sampler: &mut P, indicator: &mut I, hid: &mut H, sys: &mut S)
where
    P: InputSampler,
    I: Indicator,
    H: HidActions,
    S: System,
{
    sys.delay_ms(SETTLE_DELAY_MS);
    indicator.clear();
    indicator.flush();

    match BootMode::from_switch(sampler.read(Line::EncoderSwitch)) {
        BootMode::Bootloader => {
            // Light the whole strip as long as the device waits in
            // firmware-update mode.
            indicator.fill(BOOTLOADER_FILL);
            indicator.flush();
            sys.enter_bootloader()
        }
        BootMode::Normal => {
            for (index, color) in READY_SIGNATURE.iter().enumerate() {
                indicator.set(index, *color);
            }
            indicator.flush();

            hid.init();
        }
    }
}
