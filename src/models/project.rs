//! Project specification model
//!
//! A `ProjectSpec` captures everything the emitter needs: name, description,
//! type, target directory, and any extra template parameters. It is validated
//! on construction and never mutated afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

/// Project type - selects which template set to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Python package layout (src/, setup.py, requirements.txt)
    #[default]
    Python,
    /// Rust binary crate layout (Cargo.toml, src/main.rs)
    Rust,
    /// Language-neutral layout (src/, docs/, examples/)
    Common,
}

impl ProjectType {
    /// All built-in project types
    pub const ALL: [Self; 3] = [Self::Python, Self::Rust, Self::Common];

    /// The type name as it appears in CLI flags and API payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Common => "common",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "rust" | "rs" => Ok(Self::Rust),
            "common" | "generic" => Ok(Self::Common),
            _ => Err(format!("Invalid project type: {s}. Use: python, rust, common")),
        }
    }
}

/// A validated, immutable description of the project to scaffold
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Project name (also the directory created under `output_path`)
    name: String,

    /// Short human description, substituted into templates
    description: String,

    /// Which template set to emit
    project_type: ProjectType,

    /// Directory the project directory is created in
    output_path: PathBuf,

    /// Replace pre-existing files instead of failing
    overwrite: bool,

    /// Extra template parameters (author, version overrides, ...)
    extra_params: BTreeMap<String, String>,
}

impl ProjectSpec {
    /// Create a spec, validating the project name
    ///
    /// The name must be non-empty and filesystem-safe: no path separators,
    /// no `..`, no leading dot, only alphanumerics plus `-` and `_`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        project_type: ProjectType,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, ScaffoldError> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            name,
            description: description.into(),
            project_type,
            output_path: output_path.into(),
            overwrite: false,
            extra_params: BTreeMap::new(),
        })
    }

    /// Enable replacing pre-existing files
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Attach extra template parameters
    #[must_use]
    pub fn with_extra_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.extra_params = params;
        self
    }

    /// Project name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Selected project type
    #[must_use]
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Directory the project directory is created in
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Whether pre-existing files may be replaced
    #[must_use]
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Extra template parameters
    #[must_use]
    pub const fn extra_params(&self) -> &BTreeMap<String, String> {
        &self.extra_params
    }

    /// The project root directory: `output_path/<name>`
    #[must_use]
    pub fn project_root(&self) -> PathBuf {
        self.output_path.join(&self.name)
    }

    /// Template parameters for this spec: name, description, type,
    /// plus any extras (extras never shadow the built-in three)
    #[must_use]
    pub fn template_params(&self) -> BTreeMap<String, String> {
        let mut params = self.extra_params.clone();
        params.insert("name".to_string(), self.name.clone());
        params.insert("description".to_string(), self.description.clone());
        params.insert("type".to_string(), self.project_type.to_string());
        params
    }
}

/// Check that a name is usable as a single directory component
fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::InvalidProjectName("name is empty".to_string()));
    }
    if name.starts_with('.') {
        return Err(ScaffoldError::InvalidProjectName(format!(
            "{name}: must not start with a dot"
        )));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ScaffoldError::InvalidProjectName(format!(
            "{name}: must not contain path separators"
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ScaffoldError::InvalidProjectName(format!(
            "{name}: only letters, digits, '-' and '_' are allowed"
        )));
    }
    Ok(())
}
