//! Create a project from a named template set

use std::path::PathBuf;

use anyhow::bail;

use spindlewrit::catalog::Catalog;
use spindlewrit::emit;
use spindlewrit::models::{ProjectSpec, ProjectType};
use spindlewrit::output::{OutputMode, ScaffoldResult};

/// Scaffold a project from CLI-provided name, description, and type
pub fn create(
    name: &str,
    description: &str,
    project_type: ProjectType,
    path: Option<PathBuf>,
    overwrite: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let output_path = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };

    let spec = ProjectSpec::new(name, description, project_type, output_path)?
        .with_overwrite(overwrite);

    let catalog = Catalog::builtin();
    let templates = catalog.templates(project_type)?;

    let report = emit::emit(&spec, templates)?;

    let result = ScaffoldResult::from_report(
        &report,
        if report.is_partial() {
            format!("Partially created {project_type} project: {name}")
        } else {
            format!("Successfully created {project_type} project: {name}")
        },
    );
    result.render(mode);

    if report.is_partial() {
        bail!("{} of {} file(s) were not written", report.failed.len(), templates.len());
    }

    Ok(())
}
