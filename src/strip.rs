//! Hand-off point between rainbows and the LED hardware.
//!
//! Defines the [`LedStrip`] trait for the driver that pushes pixels to an
//! addressable strip, and [`render`], which paints one animation frame from a
//! rainbow into a caller-owned buffer and writes it out.

use crate::color::Color;
use crate::rainbow::Rainbow;
use crate::types::PaletteError;

/// Trait for abstracting addressable LED strip hardware.
///
/// Implement this for your strip driver (WS2812 over SPI, PIO, bit-banged
/// GPIO, etc.). Pixels arrive as packed `0x00RRGGBB` colors; convert them to
/// the wire order the hardware expects (often GRB). Handle any hardware errors
/// internally - this method cannot fail.
pub trait LedStrip {
    /// Writes one frame. `pixels[0]` is the LED closest to the data input.
    fn write(&mut self, pixels: &[Color]);
}

/// Paints `buffer` from `rainbow` starting at `step` and writes it to `strip`.
///
/// LED `i` shows `rainbow.color_at(step + i)`; advancing `step` by one each
/// frame scrolls the rainbow along the strip.
///
/// # Errors
/// * `EmptyPalette` - The rainbow has no colors; nothing is written
pub fn render<S: LedStrip, const N: usize>(
    strip: &mut S,
    rainbow: &Rainbow<N>,
    step: u64,
    buffer: &mut [Color],
) -> Result<(), PaletteError> {
    rainbow.fill(step, buffer)?;
    strip.write(buffer);
    Ok(())
}
