//! Error types for sprite conversion

use image::Rgba;
use thiserror::Error;

/// Error raised while turning one image into a sprite descriptor.
///
/// Every variant is fatal for the image being converted; batch conversion
/// stops at the first one.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The image has no indexed color table
    #[error("Does not have indexed color palette")]
    MissingPalette,
    /// The color table has no colors or more than four distinct ones
    #[error("{}", palette_size_message(*colors))]
    PaletteSize { colors: usize },
    /// A color first appears at a table index that does not fit in 2bpp
    #[error(
        "Color at palette index {index} does not fit in 2BPP (table has {distinct} distinct colors)"
    )]
    PaletteIndexRange { index: usize, distinct: usize },
    /// The width cannot be packed into whole bytes at this depth
    #[error("{bpp}BPP sprites must have a width divisible by {divisor} (width is {width})")]
    Alignment { bpp: u8, divisor: u32, width: u32 },
    /// A pixel uses a color that is not in the palette
    #[error(
        "Pixel ({x}, {y}) has color rgba({r}, {g}, {b}, {a}) which is not in the palette",
        r = rgba.0[0], g = rgba.0[1], b = rgba.0[2], a = rgba.0[3]
    )]
    UnknownColor { x: u32, y: u32, rgba: Rgba<u8> },
    /// A pixel refers to an entry past the end of the color table
    #[error("Pixel ({x}, {y}) uses palette index {index} but the palette has {len} entries")]
    IndexOutOfRange { x: u32, y: u32, index: u8, len: usize },
    /// The PNG stream could not be decoded
    #[error("Failed to decode PNG: {0}")]
    Decode(#[from] png::DecodingError),
    /// The decoder produced a pixel layout that carries no palette
    #[error("Unsupported decoded color type {0}")]
    UnsupportedColorType(String),
    /// Reading the image failed
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

fn palette_size_message(size: usize) -> String {
    if size == 0 {
        "Palette is empty".to_string()
    } else {
        format!("Palette is larger than 4 colors ({} colors)", size)
    }
}
