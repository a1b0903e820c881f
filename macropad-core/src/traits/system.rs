//! System services: timing, watchdog, bootloader entry

/// Timing and supervision primitives owned by the target platform.
pub trait System {
    /// Busy-wait for approximately `ms` milliseconds.
    ///
    /// This is a synchronous timed wait. The fixed iteration period of the
    /// control loop doubles as the debounce window, so this must not be
    /// replaced with anything that can return early or suspend indefinitely.
    fn delay_ms(&mut self, ms: u32);

    /// Arm the hardware watchdog with the liveness bound.
    fn watchdog_start(&mut self);

    /// Refresh the watchdog to its full bound.
    fn watchdog_feed(&mut self);

    /// Reboot into firmware update mode. Never returns; the device
    /// re-executes under a different program.
    fn enter_bootloader(&mut self) -> !;
}
