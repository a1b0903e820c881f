//! Recording fakes for the hardware traits, shared by the unit tests.

use std::vec::Vec;

use crate::config::{LIVENESS_BOUND_MS, PIXEL_COUNT};
use crate::keymap::KeyCode;
use crate::traits::{HidActions, Indicator, InputSampler, Line, Rgb, System};

/// Scriptable input levels, one per line. All lines start at rest (inactive).
pub struct MockSampler {
    levels: [bool; 6],
}

impl MockSampler {
    pub fn new() -> Self {
        Self { levels: [false; 6] }
    }

    pub fn set(&mut self, line: Line, active: bool) {
        self.levels[line as usize] = active;
    }
}

impl InputSampler for MockSampler {
    fn read(&mut self, line: Line) -> bool {
        self.levels[line as usize]
    }
}

/// One recorded HID action call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidCall {
    Init,
    Press(KeyCode),
    Release(KeyCode),
    Type(KeyCode),
}

/// Records every action call in order.
pub struct MockHid {
    pub calls: Vec<HidCall>,
}

impl MockHid {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }
}

impl HidActions for MockHid {
    fn init(&mut self) {
        self.calls.push(HidCall::Init);
    }

    fn press(&mut self, code: KeyCode) {
        self.calls.push(HidCall::Press(code));
    }

    fn release(&mut self, code: KeyCode) {
        self.calls.push(HidCall::Release(code));
    }

    fn type_once(&mut self, code: KeyCode) {
        self.calls.push(HidCall::Type(code));
    }
}

/// In-memory pixel strip. Captures the frame at the first flush so tests can
/// assert on intermediate states.
pub struct MockIndicator {
    pub pixels: [Rgb; PIXEL_COUNT],
    pub flushes: usize,
    pub pixels_at_first_flush: Option<[Rgb; PIXEL_COUNT]>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb::OFF; PIXEL_COUNT],
            flushes: 0,
            pixels_at_first_flush: None,
        }
    }
}

impl Indicator for MockIndicator {
    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        if self.flushes == 0 {
            self.pixels_at_first_flush = Some(self.pixels);
        }
        self.flushes += 1;
    }
}

/// Simulated liveness timer: armed by `watchdog_start`, advanced by elapsed
/// mock time, fires when the bound is exceeded between feeds.
pub struct MockWatchdog {
    pub armed: bool,
    pub bound_ms: u32,
    pub since_feed_ms: u32,
    pub feeds: usize,
    pub fired: bool,
}

impl MockWatchdog {
    fn advance(&mut self, ms: u32) {
        if !self.armed {
            return;
        }
        self.since_feed_ms = self.since_feed_ms.saturating_add(ms);
        if self.since_feed_ms > self.bound_ms {
            self.fired = true;
        }
    }
}

/// Mock system services with a virtual clock driving the watchdog.
pub struct MockSystem {
    pub delays: Vec<u32>,
    pub bootloader_entered: bool,
    pub watchdog: MockWatchdog,
}

impl MockSystem {
    pub fn new() -> Self {
        Self {
            delays: Vec::new(),
            bootloader_entered: false,
            watchdog: MockWatchdog {
                armed: false,
                bound_ms: LIVENESS_BOUND_MS,
                since_feed_ms: 0,
                feeds: 0,
                fired: false,
            },
        }
    }
}

impl System for MockSystem {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.watchdog.advance(ms);
    }

    fn watchdog_start(&mut self) {
        self.watchdog.armed = true;
        self.watchdog.since_feed_ms = 0;
    }

    fn watchdog_feed(&mut self) {
        self.watchdog.feeds += 1;
        self.watchdog.since_feed_ms = 0;
    }

    fn enter_bootloader(&mut self) -> ! {
        self.bootloader_entered = true;
        // The real call never returns; tests observe the jump as an unwind.
        panic!("entered bootloader");
    }
}
