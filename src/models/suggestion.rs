//! AI suggestion model
//!
//! A `Suggestion` is produced once per invocation by a suggestion provider
//! and consumed immediately by the emitter. It is never stored.

use serde::{Deserialize, Serialize};

use crate::models::ProjectType;

/// A template: relative path plus content with `{{ident}}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    /// Path relative to the project root (forward slashes)
    #[serde(alias = "path")]
    pub relative_path: String,

    /// File content, with placeholders still unsubstituted
    #[serde(alias = "content")]
    pub content_template: String,
}

impl TemplateFile {
    /// Build a template from borrowed parts
    #[must_use]
    pub fn new(relative_path: impl Into<String>, content_template: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content_template: content_template.into(),
        }
    }
}

/// The AI endpoint's recommendation for a free-text description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Recommended project type (one of the types the caller offered)
    pub recommended_type: ProjectType,

    /// Recommended project name (kebab-case)
    pub recommended_name: String,

    /// Recommended short description
    #[serde(default)]
    pub recommended_description: String,

    /// Template overrides: replace catalog entries by path, append new ones
    #[serde(default)]
    pub recommended_files: Vec<TemplateFile>,

    /// Why this type/name was chosen (free text, may be empty)
    #[serde(default)]
    pub rationale: String,
}
