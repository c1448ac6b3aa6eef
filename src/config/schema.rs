//! Configuration schema types for `png2src.toml`
//!
//! ```toml
//! [emit]
//! lang = "rust"
//! template = "templates/sprites.mustache"
//! output = "src/sprites.rs"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::{OutputTarget, STDOUT_MARKER};
use crate::templates::TemplateId;

/// Emission settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EmitConfig {
    /// Target language name or alias
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Custom template file; takes precedence over `lang`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub template: Option<PathBuf>,
    /// Output path, or `-` for stdout
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_lang() -> String {
    TemplateId::default().name().to_string()
}

fn default_output() -> String {
    STDOUT_MARKER.to_string()
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self { lang: default_lang(), template: None, output: default_output() }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PngConfig {
    #[serde(default)]
    pub emit: EmitConfig,
}

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override target language
    pub lang: Option<TemplateId>,
    /// Override template file
    pub template: Option<PathBuf>,
    /// Override output destination
    pub output: Option<String>,
}

impl PngConfig {
    /// Check values that serde cannot.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if TemplateId::from_alias(&self.emit.lang).is_none() {
            issues.push(ConfigIssue {
                field: "emit.lang",
                message: format!(
                    "unknown target '{}', expected one of: {}",
                    self.emit.lang,
                    TemplateId::ALL.map(|id| id.name()).join(", ")
                ),
            });
        }
        if self.emit.output.is_empty() {
            issues.push(ConfigIssue {
                field: "emit.output",
                message: "must be a path or '-'".to_string(),
            });
        }
        issues
    }

    /// Apply command-line overrides. An explicit `lang` on the command line
    /// also clears a template file set in the config.
    pub fn merge_cli(&mut self, overrides: &CliOverrides) {
        if let Some(lang) = overrides.lang {
            self.emit.lang = lang.name().to_string();
            self.emit.template = None;
        }
        if let Some(template) = &overrides.template {
            self.emit.template = Some(template.clone());
        }
        if let Some(output) = &overrides.output {
            self.emit.output = output.clone();
        }
    }

    /// Resolved target; unknown names fall back to the default target.
    pub fn target(&self) -> TemplateId {
        TemplateId::from_alias(&self.emit.lang).unwrap_or_default()
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::parse(&self.emit.output)
    }
}
