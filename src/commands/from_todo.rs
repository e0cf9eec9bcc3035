//! Create a project from a todo item
//!
//! Pipeline: fetch the todo item, ask a suggestion provider for a type and
//! structure, then emit. Todo failures abort (there is nothing to scaffold
//! from); suggestion failures fall back to the `--type` flag and a name
//! derived from the todo text.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::bail;

use spindlewrit::catalog::Catalog;
use spindlewrit::clients::suggest::kebab_case;
use spindlewrit::clients::{GemmaClient, OfflineSuggester, SuggestionProvider, TodoClient};
use spindlewrit::config::Config;
use spindlewrit::emit;
use spindlewrit::error::ScaffoldError;
use spindlewrit::models::{ProjectSpec, ProjectType, Suggestion, TodoItem};
use spindlewrit::output::{OutputMode, ScaffoldResult};

/// Scaffold a project from a todo item, with AI-suggested structure
pub fn from_todo(
    todo_id: &str,
    output_dir: Option<PathBuf>,
    fallback_type: ProjectType,
    overwrite: bool,
    offline: bool,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let output_path = match output_dir {
        Some(p) => p,
        None => std::env::current_dir()?,
    };

    // No todo item, nothing to scaffold - these errors are not recoverable
    let todo = TodoClient::new(&config.todo)?.fetch(todo_id)?;
    log::info!("fetched todo {todo_id}: {}", todo.title);

    let available: BTreeSet<ProjectType> = ProjectType::ALL.into_iter().collect();
    let suggestion = match obtain_suggestion(&todo, &available, offline, config) {
        Ok(suggestion) => suggestion,
        Err(e) if e.is_recoverable() => {
            log::warn!("suggestion unavailable ({e}), falling back to {fallback_type}");
            fallback_suggestion(&todo, fallback_type)
        },
        Err(e) => return Err(e.into()),
    };

    let description = if suggestion.recommended_description.is_empty() {
        todo.suggestion_text().to_string()
    } else {
        suggestion.recommended_description.clone()
    };

    let spec = ProjectSpec::new(
        &suggestion.recommended_name,
        description,
        suggestion.recommended_type,
        output_path,
    )?
    .with_overwrite(overwrite);

    let catalog = Catalog::builtin();
    let templates = Catalog::merge_overrides(
        catalog.templates(suggestion.recommended_type)?,
        &suggestion.recommended_files,
    );

    let report = emit::emit(&spec, &templates)?;

    let result = ScaffoldResult::from_report(
        &report,
        if report.is_partial() {
            format!(
                "Partially created {} project from todo {todo_id}",
                suggestion.recommended_type
            )
        } else {
            format!(
                "Successfully created {} project from todo {todo_id}: {}",
                suggestion.recommended_type, suggestion.recommended_name
            )
        },
    );
    result.render(mode);

    if report.is_partial() {
        bail!("{} of {} file(s) were not written", report.failed.len(), templates.len());
    }

    Ok(())
}

/// Ask the configured provider for a suggestion
///
/// The AI dependency is best-effort: every failure (no key, network, bad
/// response) surfaces as a recoverable error for the caller to degrade on.
fn obtain_suggestion(
    todo: &TodoItem,
    available: &BTreeSet<ProjectType>,
    offline: bool,
    config: &Config,
) -> Result<Suggestion, ScaffoldError> {
    let suggestion = if offline {
        OfflineSuggester.suggest(todo.suggestion_text(), available)?
    } else {
        GemmaClient::new(&config.ai)
            .and_then(|client| client.suggest(todo.suggestion_text(), available))?
    };

    if !suggestion.rationale.is_empty() {
        log::debug!("suggestion rationale: {}", suggestion.rationale);
    }
    Ok(suggestion)
}

/// Deterministic suggestion built from the todo item alone
fn fallback_suggestion(todo: &TodoItem, fallback_type: ProjectType) -> Suggestion {
    let mut name = kebab_case(todo.suggestion_text());
    if name.is_empty() {
        name = kebab_case(&format!("todo-{}", todo.id));
    }
    if name.is_empty() {
        name = "generated-project".to_string();
    }

    Suggestion {
        recommended_type: fallback_type,
        recommended_name: name,
        recommended_description: todo.suggestion_text().to_string(),
        recommended_files: Vec::new(),
        rationale: String::new(),
    }
}
