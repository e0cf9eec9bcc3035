//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::emit::EmitReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a scaffold operation (`create` or `from-todo`)
#[derive(Debug, Serialize)]
pub struct ScaffoldResult {
    /// Whether every file was written
    pub success: bool,
    /// Summary line
    pub message: String,
    /// The project root directory
    pub project_path: String,
    /// Files written fresh (relative to the project root)
    pub created: Vec<String>,
    /// Files replaced (overwrite mode)
    pub overwritten: Vec<String>,
    /// Write failures, empty on success
    pub errors: Vec<String>,
}

impl ScaffoldResult {
    /// Build a result from an emit report
    #[must_use]
    pub fn from_report(report: &EmitReport, message: impl Into<String>) -> Self {
        Self {
            success: !report.is_partial(),
            message: message.into(),
            project_path: report.root.display().to_string(),
            created: report.created.iter().map(|p| p.display().to_string()).collect(),
            overwritten: report.overwritten.iter().map(|p| p.display().to_string()).collect(),
            errors: report
                .failed
                .iter()
                .map(|f| format!("{}: {}", f.path.display(), f.message))
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.success {
            println!("{}", self.message.green());
        } else {
            println!("{}", self.message.red());
        }
        println!("Project created at: {}", self.project_path);

        for path in &self.created {
            println!("  Created   {path}");
        }
        for path in &self.overwritten {
            println!("  Replaced  {path}");
        }
        for error in &self.errors {
            println!("  {} {error}", "Failed".red());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// One registered project type
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    /// Type name as used in CLI flags
    pub name: String,
    /// Number of files the template set emits
    pub files: usize,
}

/// Result of a `types` listing
#[derive(Debug, Serialize)]
pub struct TypesResult {
    /// Registered types, stable order
    pub types: Vec<TypeInfo>,
}

impl TypesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Registered project types:\n");
                for t in &self.types {
                    println!("  {:<10} {} file(s)", t.name, t.files);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
