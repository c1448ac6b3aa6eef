//! Packed RGBA color keys
//!
//! Palette lookups compare colors as a single `u32` with the channels laid out
//! as `0xRRGGBBAA`. The value is only ever hashed and compared.

use image::Rgba;

/// A color packed into 32 bits, red in the most significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub u32);

impl Color {
    /// Pack four channels into a color key.
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Unpack into `[r, g, b, a]`.
    pub const fn channels(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color::from_channels(r, g, b, a)
    }
}

impl From<&Rgba<u8>> for Color {
    fn from(px: &Rgba<u8>) -> Self {
        Color::from(*px)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba(color.channels())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
