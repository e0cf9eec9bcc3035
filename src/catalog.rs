//! Template catalog
//!
//! Static, per-project-type lists of files to emit. Adding a project type is
//! a data edit here plus a `Catalog::register` call, not a new subtype.
//! Both relative paths and contents may contain `{{ident}}` placeholders;
//! the emitter renders both.

use std::collections::BTreeMap;

use crate::error::ScaffoldError;
use crate::models::{ProjectType, TemplateFile};

const PYTHON_SETUP_PY: &str = r#"from setuptools import setup, find_packages

setup(
    name="{{name}}",
    version="0.1.0",
    packages=find_packages(where="src"),
    package_dir={"": "src"},
    install_requires=[],
    python_requires=">=3.8",
)
"#;

const PYTHON_TEST: &str = r#"import unittest
from {{name}} import __version__


class TestVersion(unittest.TestCase):
    def test_version(self):
        self.assertTrue(__version__)


if __name__ == "__main__":
    unittest.main()
"#;

const README_PYTHON: &str = r#"# {{name}}

{{description}}

## Overview

This is a {{type}} project created with spindlewrit.

## Setup

1. Create and activate a virtual environment:
   ```bash
   python -m venv venv
   source venv/bin/activate
   ```
2. Install dependencies:
   ```bash
   pip install -r requirements.txt
   ```
"#;

const README_RUST: &str = r#"# {{name}}

{{description}}

## Overview

This is a {{type}} project created with spindlewrit.

## Setup

1. Build the project:
   ```bash
   cargo build
   ```
2. Run tests:
   ```bash
   cargo test
   ```
"#;

const README_COMMON: &str = r#"# {{name}}

{{description}}

## Overview

This is a {{type}} project created with spindlewrit.
"#;

const RUST_CARGO_TOML: &str = r#"[package]
name = "{{name}}"
version = "0.1.0"
edition = "2021"
description = "{{description}}"

[dependencies]
"#;

const RUST_MAIN: &str = r#"fn main() {
    println!("{{name}}: {{description}}");
}
"#;

const RUST_GITIGNORE: &str = "/target\n";

fn python_templates() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("README.md", README_PYTHON),
        TemplateFile::new("requirements.txt", "# Core dependencies\n"),
        TemplateFile::new("setup.py", PYTHON_SETUP_PY),
        TemplateFile::new("src/{{name}}/__init__.py", ""),
        TemplateFile::new("src/{{name}}/__version__.py", "__version__ = \"0.1.0\"\n"),
        TemplateFile::new("src/tests/__init__.py", ""),
        TemplateFile::new("src/tests/test_{{name}}.py", PYTHON_TEST),
    ]
}

fn rust_templates() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("README.md", README_RUST),
        TemplateFile::new("Cargo.toml", RUST_CARGO_TOML),
        TemplateFile::new("src/main.rs", RUST_MAIN),
        TemplateFile::new(".gitignore", RUST_GITIGNORE),
    ]
}

fn common_templates() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("README.md", README_COMMON),
        TemplateFile::new("src/.gitkeep", ""),
        TemplateFile::new("docs/.gitkeep", ""),
        TemplateFile::new("examples/.gitkeep", ""),
    ]
}

/// Registry of template sets, keyed by project type
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<ProjectType, Vec<TemplateFile>>,
}

impl Catalog {
    /// An empty catalog with nothing registered
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The catalog with all built-in project types registered
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        // Registration of the built-ins cannot collide
        let _ = catalog.register(ProjectType::Python, python_templates());
        let _ = catalog.register(ProjectType::Rust, rust_templates());
        let _ = catalog.register(ProjectType::Common, common_templates());
        catalog
    }

    /// Register a template set for a project type
    ///
    /// Fails with `DuplicateProjectType` if the type is already registered.
    pub fn register(
        &mut self,
        project_type: ProjectType,
        files: Vec<TemplateFile>,
    ) -> Result<(), ScaffoldError> {
        if self.entries.contains_key(&project_type) {
            return Err(ScaffoldError::DuplicateProjectType(project_type.to_string()));
        }
        self.entries.insert(project_type, files);
        Ok(())
    }

    /// Look up the template set for a project type
    ///
    /// Pure lookup, no side effects. Fails with `UnknownProjectType` if the
    /// type was never registered.
    pub fn templates(&self, project_type: ProjectType) -> Result<&[TemplateFile], ScaffoldError> {
        self.entries.get(&project_type).map(Vec::as_slice).ok_or_else(|| {
            ScaffoldError::UnknownProjectType(project_type.to_string(), self.registered_names())
        })
    }

    /// Registered project types, in stable order
    #[must_use]
    pub fn registered(&self) -> Vec<ProjectType> {
        self.entries.keys().copied().collect()
    }

    fn registered_names(&self) -> String {
        self.entries.keys().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }

    /// Merge suggestion overrides over a catalog template set
    ///
    /// Overrides replace catalog entries with the same relative path;
    /// paths not in the catalog set are appended in order.
    #[must_use]
    pub fn merge_overrides(base: &[TemplateFile], overrides: &[TemplateFile]) -> Vec<TemplateFile> {
        let mut merged: Vec<TemplateFile> = base.to_vec();
        for over in overrides {
            match merged.iter_mut().find(|t| t.relative_path == over.relative_path) {
                Some(existing) => existing.content_template = over.content_template.clone(),
                None => merged.push(over.clone()),
            }
        }
        merged
    }
}
