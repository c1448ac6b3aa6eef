//! PNG input decoding
//!
//! Reads a PNG into the pieces the encoder needs: dimensions, the indexed
//! color table (if the image has one) and every pixel as its RGBA color.
//! Indices past the end of the color table are rejected rather than decoded
//! to a fallback color.

use image::{Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::ConvertError;

/// A decoded source image.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Ordered color table; `None` when the PNG is not palette-based
    pub color_table: Option<Vec<Rgba<u8>>>,
    /// Per-pixel samples
    pub pixels: RgbaImage,
}

impl SourceImage {
    /// Build an image from an explicit color table and pixel samples.
    pub fn new(color_table: Option<Vec<Rgba<u8>>>, pixels: RgbaImage) -> Self {
        Self { color_table, pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Decode a PNG file.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path)?;
        Self::from_png(BufReader::new(file))
    }

    /// Decode a PNG stream.
    ///
    /// Indexed images are decoded to their raw palette indices, and every
    /// index is checked against the color table before it is looked up. Other
    /// color types carry no table and are expanded to RGBA.
    pub fn from_png<R: Read>(mut input: R) -> Result<Self, ConvertError> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;

        let mut decoder = png::Decoder::new(bytes.as_slice());
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info()?;
        if reader.info().color_type != png::ColorType::Indexed {
            return Self::from_expanded_png(&bytes);
        }

        let table = {
            let info = reader.info();
            let plte = info.palette.as_deref().ok_or(ConvertError::MissingPalette)?;
            color_table(plte, info.trns.as_deref().unwrap_or(&[]))
        };

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;
        let pixels = indexed_pixels(&buf, &frame, &table)?;

        Ok(Self { color_table: Some(table), pixels })
    }

    /// Decode a non-indexed PNG, expanding every sample to 8-bit RGBA.
    fn from_expanded_png(bytes: &[u8]) -> Result<Self, ConvertError> {
        let mut decoder = png::Decoder::new(bytes);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder.read_info()?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;
        buf.truncate(frame.buffer_size());

        let rgba = expand_to_rgba(buf, frame.color_type)?;
        let pixels = RgbaImage::from_raw(frame.width, frame.height, rgba).ok_or_else(|| {
            ConvertError::UnsupportedColorType(format!("{:?} (short frame)", frame.color_type))
        })?;

        Ok(Self { color_table: None, pixels })
    }
}

/// Unpack raw 1/2/4/8-bit palette indices, MSB first, and look each one up in
/// the color table.
fn indexed_pixels(
    buf: &[u8],
    frame: &png::OutputInfo,
    table: &[Rgba<u8>],
) -> Result<RgbaImage, ConvertError> {
    let mut pixels = RgbaImage::new(frame.width, frame.height);
    if frame.line_size == 0 {
        return Ok(pixels);
    }

    let bits = frame.bit_depth as usize;
    let mask = ((1u16 << bits) - 1) as u8;
    for (y, row) in (0..frame.height).zip(buf.chunks_exact(frame.line_size)) {
        for x in 0..frame.width {
            let bit = x as usize * bits;
            let index = (row[bit / 8] >> (8 - bits - bit % 8)) & mask;
            let rgba = table.get(index as usize).copied().ok_or(ConvertError::IndexOutOfRange {
                x,
                y,
                index,
                len: table.len(),
            })?;
            pixels.put_pixel(x, y, rgba);
        }
    }
    Ok(pixels)
}

/// Pair PLTE RGB triples with tRNS alpha values; entries past the end of tRNS are opaque.
fn color_table(plte: &[u8], trns: &[u8]) -> Vec<Rgba<u8>> {
    plte.chunks_exact(3)
        .enumerate()
        .map(|(i, rgb)| Rgba([rgb[0], rgb[1], rgb[2], trns.get(i).copied().unwrap_or(255)]))
        .collect()
}

fn expand_to_rgba(buf: Vec<u8>, color_type: png::ColorType) -> Result<Vec<u8>, ConvertError> {
    let rgba = match color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf.chunks_exact(3).flat_map(|p| [p[0], p[1], p[2], 255]).collect(),
        png::ColorType::GrayscaleAlpha => {
            buf.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0], p[1]]).collect()
        }
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(ConvertError::UnsupportedColorType(format!("{:?}", color_type)))
        }
    };
    Ok(rgba)
}
