//! Identifier derivation from sprite file names.
//!
//! Generated code names each sprite after its source file. The file stem is
//! reduced to a safe identifier, and snake-case variants are derived from it
//! for targets whose constants follow `SCREAMING_SNAKE_CASE` or `snake_case`.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z]+").expect("valid identifier regex"));

/// Convert a file stem into an identifier.
///
/// Every run of characters outside `[0-9A-Za-z]` becomes a single `_`, and an
/// identifier that would start with a digit gets a leading `_`.
///
/// ```
/// use png2src::ident::canonical_identifier;
///
/// assert_eq!(canonical_identifier("Hero Walk"), "Hero_Walk");
/// assert_eq!(canonical_identifier("01-hero"), "_01_hero");
/// ```
pub fn canonical_identifier(stem: &str) -> String {
    let replaced = NON_ALPHANUMERIC_RUN.replace_all(stem, "_");
    if replaced.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", replaced)
    } else {
        replaced.into_owned()
    }
}

/// Insert `_` before every uppercase letter except the first character.
fn split_camel(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for (i, c) in identifier.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c);
    }
    out
}

/// The identifier forms a sprite is known by in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteName {
    /// Canonical identifier, used as-is by camelCase targets
    pub name: String,
    /// `SCREAMING_SNAKE_CASE` form
    pub upper_snake: String,
    /// `snake_case` form
    pub lower_snake: String,
}

impl SpriteName {
    /// Derive all name variants from a file stem.
    pub fn from_stem(stem: &str) -> Self {
        let name = canonical_identifier(stem);
        let split = split_camel(&name);
        Self { upper_snake: split.to_uppercase(), lower_snake: split.to_lowercase(), name }
    }

    /// Derive the name from a path's file stem (the file name without its extension).
    pub fn from_path(path: &Path) -> Self {
        let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        Self::from_stem(&stem)
    }
}
