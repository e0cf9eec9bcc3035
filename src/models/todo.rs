//! Todo item model
//!
//! A read-only task record fetched from the external todo service.
//! Never persisted locally.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A task record from the external tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    /// Identifier in the todo service
    pub id: String,

    /// Short title
    #[serde(default)]
    pub title: String,

    /// Longer free-text description (the AI prompt source)
    #[serde(default)]
    pub description: String,

    /// Labels attached to the item
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl TodoItem {
    /// The text used to drive AI suggestion: description, falling back to
    /// the title when the description is empty
    #[must_use]
    pub fn suggestion_text(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.title
        } else {
            &self.description
        }
    }
}
