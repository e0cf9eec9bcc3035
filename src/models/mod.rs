//! Data models for spindlewrit
//!
//! Core abstractions:
//! - `ProjectSpec`: "What to scaffold, where" (validated, immutable)
//! - `TemplateFile`: "A path plus content with placeholders"
//! - `TodoItem`: "A task record from the external tracker"
//! - `Suggestion`: "The AI endpoint's recommendation for a description"

pub mod project;
pub mod suggestion;
pub mod todo;

pub use project::{ProjectSpec, ProjectType};
pub use suggestion::{Suggestion, TemplateFile};
pub use todo::TodoItem;
