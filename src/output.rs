//! Output sink for generated source

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker that selects standard output instead of a file.
pub const STDOUT_MARKER: &str = "-";

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error while writing to stdout
    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
    /// IO error while writing a file
    #[error("Failed to write '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },
}

/// Destination for the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Standard output
    #[default]
    Stdout,
    /// A file that is created or overwritten
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret an `--output` argument: `-` means stdout, anything else a path.
    pub fn parse(arg: &str) -> Self {
        if arg == STDOUT_MARKER {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write `text` to `target`.
///
/// Files are overwritten, and missing parent directories are created.
pub fn write_output(text: &str, target: &OutputTarget) -> Result<(), OutputError> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(OutputError::Stdout)
        }
        OutputTarget::File(path) => {
            write_file(text, path)
                .map_err(|source| OutputError::File { path: path.clone(), source })?;
            log::info!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn write_file(text: &str, path: &Path) -> io::Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, text)
}
