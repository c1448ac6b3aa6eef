//! Sprite descriptors: the canonical record handed to the templates.

use serde::Serialize;

use crate::encoder::{encode_pixels, PixelBuffer};
use crate::error::ConvertError;
use crate::ident::SpriteName;
use crate::palette::{resolve_palette, BitDepth};
use crate::source::SourceImage;

/// Everything the templates know about one sprite.
///
/// Serialized field names are the template placeholders (`name`,
/// `flagsHumanReadable`, `firstByte`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteDescriptor {
    pub name: String,
    pub rust_name: String,
    pub odin_name: String,
    pub width: u32,
    pub height: u32,
    pub flags: u8,
    pub flags_human_readable: &'static str,
    pub odin_flags: &'static str,
    /// Comma-separated `0x..` literals
    pub bytes: String,
    pub length: usize,
    pub first_byte: String,
    pub rest_bytes: String,
    #[serde(skip)]
    pub data: Vec<u8>,
    #[serde(skip)]
    pub depth: BitDepth,
}

/// Render a byte as a two-digit lowercase hex literal.
pub fn hex_literal(byte: u8) -> String {
    format!("0x{:02x}", byte)
}

impl SpriteDescriptor {
    /// Assemble a descriptor from an encoded buffer.
    pub fn build(name: SpriteName, buffer: PixelBuffer) -> Self {
        let (width, height, depth) = (buffer.width(), buffer.height(), buffer.bit_depth());
        let data = buffer.into_bytes();
        let literals: Vec<String> = data.iter().map(|&b| hex_literal(b)).collect();
        let first_byte = literals.first().cloned().unwrap_or_default();
        let rest_bytes = literals.get(1..).map(|rest| rest.join(",")).unwrap_or_default();

        Self {
            name: name.name,
            rust_name: name.upper_snake,
            odin_name: name.lower_snake,
            width,
            height,
            flags: depth.flags(),
            flags_human_readable: depth.flags_label(),
            odin_flags: depth.odin_flags(),
            bytes: literals.join(","),
            length: data.len(),
            first_byte,
            rest_bytes,
            data,
            depth,
        }
    }
}

/// Resolve, encode and describe one image.
pub fn convert_image(name: SpriteName, image: &SourceImage) -> Result<SpriteDescriptor, ConvertError> {
    let palette = resolve_palette(image.color_table.as_deref())?;
    let buffer = encode_pixels(&image.pixels, &palette)?;
    Ok(SpriteDescriptor::build(name, buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn striped(width: u32, height: u32, table: &[Rgba<u8>]) -> SourceImage {
        let pixels = RgbaImage::from_fn(width, height, |x, _| table[x as usize % table.len()]);
        SourceImage::new(Some(table.to_vec()), pixels)
    }

    #[test]
    fn test_hex_literal_is_lowercase_two_digit() {
        assert_eq!(hex_literal(0), "0x00");
        assert_eq!(hex_literal(0xAB), "0xab");
        assert_eq!(hex_literal(7), "0x07");
    }

    #[test]
    fn test_1bpp_descriptor_fields() {
        let image = striped(16, 1, &[BLACK, WHITE]);
        let sprite = convert_image(SpriteName::from_stem("heroIdle"), &image).unwrap();

        assert_eq!(sprite.name, "heroIdle");
        assert_eq!(sprite.rust_name, "HERO_IDLE");
        assert_eq!(sprite.odin_name, "hero_idle");
        assert_eq!((sprite.width, sprite.height), (16, 1));
        assert_eq!(sprite.flags, 0);
        assert_eq!(sprite.flags_human_readable, "BLIT_1BPP");
        assert_eq!(sprite.odin_flags, "nil");
        assert_eq!(sprite.data, vec![0x55, 0x55]);
        assert_eq!(sprite.bytes, "0x55,0x55");
        assert_eq!(sprite.length, 2);
        assert_eq!(sprite.first_byte, "0x55");
        assert_eq!(sprite.rest_bytes, "0x55");
    }

    #[test]
    fn test_2bpp_descriptor_fields() {
        let image = striped(8, 1, &[BLACK, WHITE, RED]);
        let sprite = convert_image(SpriteName::from_stem("gem"), &image).unwrap();

        // indices 0 1 2 0 | 1 2 0 1
        assert_eq!(sprite.data, vec![0b00_01_10_00, 0b01_10_00_01]);
        assert_eq!(sprite.bytes, "0x18,0x61");
        assert_eq!(sprite.flags, 1);
        assert_eq!(sprite.flags_human_readable, "BLIT_2BPP");
        assert_eq!(sprite.odin_flags, "{ .USE_2BPP }");
        assert_eq!(sprite.depth, BitDepth::Two);
    }

    #[test]
    fn test_first_and_rest_split() {
        let image = striped(8, 3, &[BLACK, WHITE]);
        let sprite = convert_image(SpriteName::from_stem("bars"), &image).unwrap();
        assert_eq!(sprite.bytes, "0x55,0x55,0x55");
        assert_eq!(sprite.first_byte, "0x55");
        assert_eq!(sprite.rest_bytes, "0x55,0x55");
    }

    #[test]
    fn test_single_byte_sprite_has_empty_rest() {
        let image = striped(8, 1, &[BLACK]);
        let sprite = convert_image(SpriteName::from_stem("dot"), &image).unwrap();
        assert_eq!(sprite.bytes, "0x00");
        assert_eq!(sprite.first_byte, "0x00");
        assert_eq!(sprite.rest_bytes, "");
    }

    #[test]
    fn test_missing_palette_propagates() {
        let image = SourceImage::new(None, RgbaImage::new(8, 1));
        let err = convert_image(SpriteName::from_stem("x"), &image).unwrap_err();
        assert!(matches!(err, ConvertError::MissingPalette));
    }

    #[test]
    fn test_alignment_propagates() {
        let image = striped(5, 1, &[BLACK, WHITE]);
        let err = convert_image(SpriteName::from_stem("x"), &image).unwrap_err();
        assert!(matches!(err, ConvertError::Alignment { .. }));
    }
}
