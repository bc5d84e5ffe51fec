//! Packed 24-bit RGB color values.
//!
//! A [`Color`] stores red, green and blue in a single `u32` laid out as
//! `0x00RRGGBB`, the format addressable-LED drivers for NeoPixel-style strips
//! accept directly. Conversions to `palette::Srgb` are provided for drivers
//! built on the `palette` crate; they change representation only.

use crate::types::{Channel, PaletteError};
use palette::Srgb;

/// A single RGB color packed as `0x00RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u32);

impl Color {
    /// Creates a color from 8-bit channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Creates a color from wide integer channels.
    ///
    /// Channels outside `0..=255` are rejected rather than clamped or wrapped,
    /// so a typo in a literal can never silently shift the hue.
    ///
    /// # Errors
    /// * `OutOfRangeColor` - The first channel (red, green, blue order) out of range
    pub fn try_new(red: i32, green: i32, blue: i32) -> Result<Self, PaletteError> {
        let red = channel(Channel::Red, red)?;
        let green = channel(Channel::Green, green)?;
        let blue = channel(Channel::Blue, blue)?;
        Ok(Self::new(red, green, blue))
    }

    /// Creates a color from a packed value. The top byte is ignored.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Color(packed & 0x00FF_FFFF)
    }

    /// Returns the packed `0x00RRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns `(red, green, blue)`.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// True when all channels are zero (the LED is dark).
    #[inline]
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }
}

fn channel(which: Channel, value: i32) -> Result<u8, PaletteError> {
    u8::try_from(value).map_err(|_| PaletteError::OutOfRangeColor {
        channel: which,
        value,
    })
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::new(red, green, blue)
    }
}

impl TryFrom<(i32, i32, i32)> for Color {
    type Error = PaletteError;

    fn try_from((red, green, blue): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Color::try_new(red, green, blue)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Color::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.red(), color.green(), color.blue())
    }
}

impl From<Color> for Srgb {
    /// Scales each channel into the `0.0..=1.0` range.
    fn from(color: Color) -> Self {
        let rgb: Srgb<u8> = color.into();
        rgb.into_format()
    }
}
