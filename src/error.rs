//! Error types for scaffolding operations
//!
//! Every failure the library can produce is a variant here, so the CLI
//! boundary can report a single clear message and pick an exit code.
//! Network-dependent variants (`AiService`, `TodoServiceUnavailable`) are
//! recoverable by callers; the rest abort the current invocation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scaffolding a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Requested project type has no catalog entry
    #[error("unknown project type: {0} (registered: {1})")]
    UnknownProjectType(String, String),

    /// A project type was registered twice
    #[error("project type already registered: {0}")]
    DuplicateProjectType(String),

    /// A template referenced a placeholder with no matching parameter
    #[error("missing template parameter: {name} (in {template})")]
    MissingParameter {
        /// The placeholder name with no value
        name: String,
        /// Relative path of the template being rendered
        template: String,
    },

    /// Project name is empty or not filesystem-safe
    #[error("invalid project name: {0}")]
    InvalidProjectName(String),

    /// Files already exist at the target and overwrite was not requested
    #[error("{} file(s) already exist (use --overwrite to replace): {}", .0.len(), format_paths(.0))]
    FileConflict(Vec<PathBuf>),

    /// A template path would escape the project root
    #[error("template path escapes project root: {0}")]
    PathTraversal(String),

    /// The AI suggestion endpoint failed or returned an unusable response
    #[error("AI suggestion failed: {0}")]
    AiService(String),

    /// The todo service has no item with the given id
    #[error("todo item not found: {0}")]
    TodoNotFound(String),

    /// The todo service could not be reached
    #[error("todo service unavailable: {0}")]
    TodoServiceUnavailable(String),

    /// Writing a rendered file failed
    #[error("failed to write {path}: {source}")]
    FilesystemWrite {
        /// The path that could not be written
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

impl ScaffoldError {
    /// Whether the caller can recover by falling back to a default
    /// (currently: only the network-dependent variants)
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::AiService(_) | Self::TodoServiceUnavailable(_))
    }
}
