//! Source code emission.
//!
//! Renders a sprite collection through a mustache template. Built-in targets
//! and caller-supplied templates are handled the same way: the template is
//! rendered once against `{ "sprites": [...] }` and is expected to repeat a
//! block per sprite.
//!
//! Templates are not validated. Unknown placeholders render empty; only text
//! the template engine cannot parse at all is reported as an error.
//!
//! # Example
//!
//! ```ignore
//! use png2src::export::{render, TemplateSource};
//! use png2src::templates::TemplateId;
//!
//! let code = render(&sprites, &TemplateSource::Builtin(TemplateId::Rust))?;
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::output::{write_output, OutputError, OutputTarget};
use crate::sprite::SpriteDescriptor;
use crate::templates::TemplateId;

/// Error type for emission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The template could not be compiled or rendered
    #[error("Template error: {0}")]
    Template(#[from] mustache::Error),
    /// Rendered text was not UTF-8
    #[error("Rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Writing the result failed
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Where the template text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// One of the built-in targets
    Builtin(TemplateId),
    /// Raw template text supplied by the caller
    Custom(String),
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self::Builtin(TemplateId::default())
    }
}

impl TemplateSource {
    /// The mustache text to render.
    pub fn text(&self) -> &str {
        match self {
            Self::Builtin(id) => id.body(),
            Self::Custom(text) => text,
        }
    }

    /// Short description for log messages.
    pub fn label(&self) -> String {
        match self {
            Self::Builtin(id) => id.name().to_string(),
            Self::Custom(_) => "custom template".to_string(),
        }
    }
}

#[derive(Serialize)]
struct TemplateData<'a> {
    sprites: &'a [SpriteDescriptor],
}

/// Render the sprite collection with `template`.
pub fn render(sprites: &[SpriteDescriptor], template: &TemplateSource) -> Result<String, ExportError> {
    let compiled = mustache::compile_str(template.text())?;
    let mut out = Vec::new();
    compiled.render(&mut out, &TemplateData { sprites })?;
    Ok(String::from_utf8(out)?)
}

/// Render the sprite collection and write it to `target`.
pub fn export(
    sprites: &[SpriteDescriptor],
    template: &TemplateSource,
    target: &OutputTarget,
) -> Result<(), ExportError> {
    let text = render(sprites, template)?;
    log::debug!("rendered {} sprite(s) with {}", sprites.len(), template.label());
    write_output(&text, target)?;
    Ok(())
}
