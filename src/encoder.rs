//! Sub-byte pixel packing
//!
//! Each pixel's palette index is written into a byte buffer using 1 or 2 bits,
//! most significant bits first, rows laid out back to back. Because rows are
//! not padded, the image width must be a multiple of the pixels per byte.

use image::RgbaImage;

use crate::color::Color;
use crate::error::ConvertError;
use crate::palette::{BitDepth, ResolvedPalette};

/// Packed palette indices for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
    depth: BitDepth,
}

/// Byte index and bit shift of pixel `(x, y)` in a packed buffer.
fn locate(depth: BitDepth, width: u32, x: u32, y: u32) -> (usize, u8) {
    let linear = y as usize * width as usize + x as usize;
    match depth {
        BitDepth::One => (linear >> 3, 7 - (x & 0x7) as u8),
        BitDepth::Two => (linear >> 2, 6 - ((x & 0x3) << 1) as u8),
    }
}

impl PixelBuffer {
    /// A zero-filled buffer for an image of the given size.
    fn zeroed(width: u32, height: u32, depth: BitDepth) -> Self {
        Self { bytes: vec![0; depth.buffer_len(width, height)], width, height, depth }
    }

    fn write(&mut self, x: u32, y: u32, index: u8) {
        let (byte, shift) = locate(self.depth, self.width, x, y);
        let mask = self.depth.mask() << shift;
        self.bytes[byte] = ((index << shift) & mask) | (self.bytes[byte] & !mask);
    }

    /// Read back the palette index stored for pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        let (byte, shift) = locate(self.depth, self.width, x, y);
        (self.bytes[byte] >> shift) & self.depth.mask()
    }

    /// All palette indices in row-major order.
    pub fn unpack(&self) -> Vec<u8> {
        let mut indices = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                indices.push(self.index_at(x, y));
            }
        }
        indices
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.depth
    }
}

/// Check that rows of `width` pixels end on a byte boundary at `depth`.
pub fn check_alignment(width: u32, depth: BitDepth) -> Result<(), ConvertError> {
    let divisor = depth.pixels_per_byte();
    if width % divisor != 0 {
        return Err(ConvertError::Alignment { bpp: depth.bits(), divisor, width });
    }
    Ok(())
}

/// Pack every pixel of `pixels` as its palette index.
///
/// # Errors
///
/// * `ConvertError::Alignment` if the width is not a multiple of the pixels
///   per byte for the palette's depth.
/// * `ConvertError::UnknownColor` for the first pixel whose color is not in the
///   palette.
pub fn encode_pixels(
    pixels: &RgbaImage,
    palette: &ResolvedPalette,
) -> Result<PixelBuffer, ConvertError> {
    let (width, height) = pixels.dimensions();
    let depth = palette.bit_depth();
    check_alignment(width, depth)?;

    let mut buffer = PixelBuffer::zeroed(width, height, depth);
    for y in 0..height {
        for x in 0..width {
            let rgba = *pixels.get_pixel(x, y);
            let index = palette
                .index_of(Color::from(rgba))
                .ok_or(ConvertError::UnknownColor { x, y, rgba })?;
            buffer.write(x, y, index);
        }
    }

    Ok(buffer)
}
