//! png2src - Library for packing indexed PNG sprites into source code
//!
//! This library provides functionality to:
//! - Resolve a PNG's color table into palette indices and pick 1bpp or 2bpp
//! - Pack pixels into byte arrays, most significant bits first
//! - Derive identifiers for each sprite from its file name
//! - Render sprite collections through per-language mustache templates

pub mod cli;
pub mod color;
pub mod config;
pub mod encoder;
pub mod error;
pub mod export;
pub mod ident;
pub mod output;
pub mod palette;
pub mod pipeline;
pub mod source;
pub mod sprite;
pub mod templates;

pub use encoder::{encode_pixels, PixelBuffer};
pub use error::ConvertError;
pub use export::{render, TemplateSource};
pub use ident::SpriteName;
pub use palette::{resolve_palette, BitDepth, ResolvedPalette};
pub use pipeline::{convert_all, convert_file, BatchError};
pub use source::SourceImage;
pub use sprite::{convert_image, SpriteDescriptor};
pub use templates::TemplateId;
