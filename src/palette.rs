//! Palette resolution and bit depth selection.
//!
//! A sprite palette is the image's color table: the position of each color in
//! the table is the index written into the packed pixel data. Tables with one
//! or two colors pack at 1 bit per pixel, three or four colors at 2 bits per
//! pixel. Anything else is rejected.

use image::Rgba;
use std::collections::{HashMap, HashSet};

use crate::color::Color;
use crate::error::ConvertError;

/// Largest palette that can be packed.
pub const MAX_COLORS: usize = 4;

/// Bits used per packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 1 bit per pixel, 8 pixels per byte
    One,
    /// 2 bits per pixel, 4 pixels per byte
    Two,
}

impl BitDepth {
    /// Select the depth for a palette of `colors` distinct entries.
    pub fn for_palette_size(colors: usize) -> Result<Self, ConvertError> {
        match colors {
            1..=2 => Ok(BitDepth::One),
            3..=MAX_COLORS => Ok(BitDepth::Two),
            _ => Err(ConvertError::PaletteSize { colors }),
        }
    }

    /// Number of bits per pixel.
    pub fn bits(self) -> u8 {
        match self {
            BitDepth::One => 1,
            BitDepth::Two => 2,
        }
    }

    /// Pixels packed into a single byte (`8 / bpp`).
    pub fn pixels_per_byte(self) -> u32 {
        8 / self.bits() as u32
    }

    /// Mask covering one pixel's bits at shift 0.
    pub fn mask(self) -> u8 {
        match self {
            BitDepth::One => 0x1,
            BitDepth::Two => 0x3,
        }
    }

    /// Blit flag value written into generated code.
    pub fn flags(self) -> u8 {
        match self {
            BitDepth::One => 0,
            BitDepth::Two => 1,
        }
    }

    /// Symbolic name of the blit flag.
    pub fn flags_label(self) -> &'static str {
        match self {
            BitDepth::One => "BLIT_1BPP",
            BitDepth::Two => "BLIT_2BPP",
        }
    }

    /// Blit flag as an Odin `bit_set` expression.
    pub fn odin_flags(self) -> &'static str {
        match self {
            BitDepth::One => "nil",
            BitDepth::Two => "{ .USE_2BPP }",
        }
    }

    /// Packed buffer length for an image of the given size.
    pub fn buffer_len(self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.bits() as usize / 8
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}bpp", self.bits())
    }
}

/// Lookup from packed color to palette index.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPalette {
    indices: HashMap<Color, u8>,
    depth: BitDepth,
}

impl ResolvedPalette {
    /// Palette index of `color`, if it is part of the palette.
    pub fn index_of(&self, color: Color) -> Option<u8> {
        self.indices.get(&color).copied()
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.depth
    }
}

/// Build the color to index lookup for an image's color table.
///
/// `None` means the image was not palette-based. When a color occurs more than
/// once in the table its first position is the index, and the palette size is
/// the number of table entries up to the last first occurrence, so every index
/// fits in the selected depth.
pub fn resolve_palette(color_table: Option<&[Rgba<u8>]>) -> Result<ResolvedPalette, ConvertError> {
    let table = color_table.ok_or(ConvertError::MissingPalette)?;

    let mut indices = HashMap::with_capacity(table.len());
    let mut size = 0;
    for (position, rgba) in table.iter().enumerate() {
        if indices.contains_key(&Color::from(rgba)) {
            continue;
        }
        if position >= MAX_COLORS {
            return Err(table_overflow(table, position));
        }
        indices.insert(Color::from(rgba), position as u8);
        size = position + 1;
    }

    let depth = BitDepth::for_palette_size(size)?;
    Ok(ResolvedPalette { indices, depth })
}

/// Error for a new color at `position` past the 2bpp range. Reports the size
/// when the table really has too many colors, otherwise the offending index.
fn table_overflow(table: &[Rgba<u8>], position: usize) -> ConvertError {
    let distinct = table.iter().map(Color::from).collect::<HashSet<_>>().len();
    if distinct > MAX_COLORS {
        ConvertError::PaletteSize { colors: distinct }
    } else {
        ConvertError::PaletteIndexRange { index: position, distinct }
    }
}
