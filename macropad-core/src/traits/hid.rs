//! HID action interface

use crate::keymap::KeyCode;

/// The USB HID collaborator, consumed as fire-and-forget action calls.
///
/// Implementations are expected to enqueue report changes and silently drop
/// them under backpressure or while the bus is not yet configured; none of
/// these calls may block the control loop.
pub trait HidActions {
    /// Bring up the USB HID interface. Called exactly once, before the
    /// control loop starts.
    fn init(&mut self);

    /// Report `code` as held down.
    fn press(&mut self, code: KeyCode);

    /// Report `code` as released.
    fn release(&mut self, code: KeyCode);

    /// Synthesize a full press-and-release of `code` in one call.
    fn type_once(&mut self, code: KeyCode);
}
