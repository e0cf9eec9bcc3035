//! List registered project types

use spindlewrit::catalog::Catalog;
use spindlewrit::output::{OutputMode, TypeInfo, TypesResult};

/// Show the registered project types and their template file counts
pub fn types(mode: OutputMode) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();

    let types = catalog
        .registered()
        .into_iter()
        .map(|pt| TypeInfo {
            name: pt.to_string(),
            files: catalog.templates(pt).map(<[_]>::len).unwrap_or_default(),
        })
        .collect();

    TypesResult { types }.render(mode);
    Ok(())
}
