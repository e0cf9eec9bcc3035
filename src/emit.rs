//! Project emitter
//!
//! Turns a `ProjectSpec` plus an ordered template list into files on disk,
//! under `output_path/<name>` and nowhere else.
//!
//! Emission runs in phases so that validation failures cost nothing:
//! 1. render every path and content (fail-fast on missing parameters)
//! 2. check every rendered path stays inside the project root
//! 3. unless overwrite is set, collect all pre-existing files and refuse
//!    the whole run if there are any
//! 4. write files, creating parent directories as needed
//!
//! A write failure mid-run leaves already-written files in place; the
//! report records the failure instead of rolling back.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::ScaffoldError;
use crate::models::{ProjectSpec, TemplateFile};
use crate::render::render_named;

/// A single failed write
#[derive(Debug, Clone, Serialize)]
pub struct EmitFailure {
    /// Path that could not be written (relative to the project root)
    pub path: PathBuf,
    /// The I/O error text
    pub message: String,
}

/// What an emit run did
#[derive(Debug, Serialize)]
pub struct EmitReport {
    /// The project root directory
    pub root: PathBuf,
    /// Files written fresh (relative to root, emission order)
    pub created: Vec<PathBuf>,
    /// Files replaced because overwrite was set (relative to root)
    pub overwritten: Vec<PathBuf>,
    /// Writes that failed; non-empty means the run was partial
    pub failed: Vec<EmitFailure>,
    /// When the run happened (RFC3339)
    pub created_at: String,
}

impl EmitReport {
    /// Whether some files were written but the run did not finish
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Total number of files written (created + overwritten)
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.created.len() + self.overwritten.len()
    }
}

/// Emit a project: render the templates and write them under the project root
///
/// Returns `Ok` with a (possibly partial) report once writing has started;
/// all validation errors surface as `Err` before anything touches the disk.
pub fn emit(spec: &ProjectSpec, templates: &[TemplateFile]) -> Result<EmitReport, ScaffoldError> {
    let root = spec.project_root();
    let params = spec.template_params();

    // Phase 1+2: render everything, validate containment
    let mut rendered: Vec<(PathBuf, String)> = Vec::with_capacity(templates.len());
    for template in templates {
        let rel = render_named(&template.relative_path, &template.relative_path, &params)?;
        let rel_path = contained_path(&rel)?;
        let content = render_named(&rel, &template.content_template, &params)?;
        rendered.push((rel_path, content));
    }

    // Phase 3: whole-run conflict check, so a refused run writes nothing
    if !spec.overwrite() {
        let conflicts: Vec<PathBuf> =
            rendered.iter().map(|(rel, _)| root.join(rel)).filter(|p| p.exists()).collect();
        if !conflicts.is_empty() {
            return Err(ScaffoldError::FileConflict(conflicts));
        }
    }

    // Phase 4: write. A root that cannot be created aborts before anything
    // is written; later failures are partial and land in the report.
    fs::create_dir_all(&root).map_err(|e| ScaffoldError::FilesystemWrite {
        path: root.clone(),
        source: e,
    })?;

    let mut report = EmitReport {
        root: root.clone(),
        created: Vec::new(),
        overwritten: Vec::new(),
        failed: Vec::new(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    for (rel, content) in rendered {
        let target = root.join(&rel);
        let existed = target.exists();

        if let Err(e) = write_file(&target, &content) {
            log::error!("write failed for {}: {e}", target.display());
            report.failed.push(EmitFailure {
                path: rel,
                message: e.to_string(),
            });
            // Already-written files stay; report the partial run
            break;
        }

        if existed {
            report.overwritten.push(rel);
        } else {
            report.created.push(rel);
        }
    }

    Ok(report)
}

fn write_file(target: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, content)
}

/// Validate that a rendered relative path cannot escape the project root
///
/// Rejects absolute paths, parent-directory components, and empty paths.
fn contained_path(rel: &str) -> Result<PathBuf, ScaffoldError> {
    if rel.is_empty() {
        return Err(ScaffoldError::PathTraversal("(empty path)".to_string()));
    }

    let path = Path::new(rel);
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {},
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ScaffoldError::PathTraversal(rel.to_string()));
            },
        }
    }

    Ok(path.to_path_buf())
}
