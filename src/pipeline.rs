//! Batch conversion of PNG files into sprite descriptors.
//!
//! Files are converted one at a time in the order given. The first failure
//! stops the batch and nothing converted so far is returned.

use glob::{glob_with, MatchOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::ConvertError;
use crate::ident::SpriteName;
use crate::source::SourceImage;
use crate::sprite::{convert_image, SpriteDescriptor};

/// A conversion failure together with the file that caused it.
#[derive(Debug, Error)]
#[error("Error processing {}: {source}", path.display())]
pub struct BatchError {
    pub path: PathBuf,
    pub source: ConvertError,
}

/// Convert one PNG file, naming the sprite after the file stem.
pub fn convert_file(path: &Path) -> Result<SpriteDescriptor, ConvertError> {
    let image = SourceImage::open(path)?;
    let sprite = convert_image(SpriteName::from_path(path), &image)?;
    log::debug!(
        "{}: {}x{} {} -> {} bytes as '{}'",
        path.display(),
        sprite.width,
        sprite.height,
        sprite.depth,
        sprite.length,
        sprite.name
    );
    Ok(sprite)
}

/// Convert every file in order, stopping at the first error.
pub fn convert_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SpriteDescriptor>, BatchError> {
    let mut sprites = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let sprite = convert_file(path)
            .map_err(|source| BatchError { path: path.to_path_buf(), source })?;
        sprites.push(sprite);
    }
    log::info!("Converted {} sprite(s)", sprites.len());
    Ok(sprites)
}

/// Find all PNG files directly inside a directory, sorted by path.
///
/// The extension is matched case-insensitively. Entries that cannot be read
/// are skipped with a warning.
pub fn find_png_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/*.png", glob::Pattern::escape(&dir.display().to_string()));
    let options = MatchOptions { case_sensitive: false, ..MatchOptions::new() };
    let paths = match glob_with(&pattern, options) {
        Ok(paths) => paths,
        Err(e) => {
            log::warn!("Cannot search {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => log::warn!("Skipping unreadable entry {}: {}", e.path().display(), e),
        }
    }
    files.sort();
    files
}

/// Expand command-line inputs: directories become their PNG files, other
/// paths are kept as given. Order is preserved.
pub fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::with_capacity(inputs.len());
    for input in inputs {
        if input.is_dir() {
            files.extend(find_png_files(input));
        } else {
            files.push(input.clone());
        }
    }
    files
}
