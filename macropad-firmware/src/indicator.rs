//! WS2812 indicator strip driven by PIO

use embassy_futures::block_on;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use macropad_core::config::PIXEL_COUNT;
use macropad_core::traits::{Indicator, Rgb};

/// Staged pixel frame committed to the strip on flush.
pub struct NeoStrip<'d> {
    ws2812: PioWs2812<'d, PIO0, 0, PIXEL_COUNT>,
    frame: [RGB8; PIXEL_COUNT],
}

impl<'d> NeoStrip<'d> {
    pub fn new(ws2812: PioWs2812<'d, PIO0, 0, PIXEL_COUNT>) -> Self {
        Self {
            ws2812,
            frame: [RGB8::default(); PIXEL_COUNT],
        }
    }
}

impl Indicator for NeoStrip<'_> {
    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = RGB8::new(color.r, color.g, color.b);
        }
    }

    fn flush(&mut self) {
        // The DMA transfer for three pixels completes in well under a loop
        // period; waiting for it here keeps the trait synchronous.
        block_on(self.ws2812.write(&self.frame));
    }
}
