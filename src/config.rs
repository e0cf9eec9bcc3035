//! Configuration
//!
//! Endpoint URLs, the AI API key, and timeouts. Values come from
//! `~/.config/spindlewrit/config.toml` (XDG standard), with environment
//! variables taking precedence:
//!
//! - `GEMMA_API_KEY` - enables AI suggestion; `create` works without it
//! - `GEMMA_BASE_URL` - overrides the AI endpoint
//! - `TODO_SERVER_URL` - overrides the todo service endpoint
//!
//! Config is read once at startup and passed down explicitly; nothing
//! consults the environment afterwards.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// AI suggestion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Bearer token; absence disables AI suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Endpoint base URL
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (single attempt, no retries)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Todo service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Endpoint base URL
    #[serde(default = "default_todo_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ai_base_url() -> String {
    "https://api.gemma.ai/v1".to_string()
}

fn default_todo_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_ai_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            base_url: default_todo_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Spindlewrit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// AI suggestion endpoint
    #[serde(default)]
    pub ai: AiConfig,
    /// Todo service endpoint
    #[serde(default)]
    pub todo: TodoConfig,
}

impl Config {
    /// Get the config file path (`~/.config/spindlewrit/config.toml`)
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spindlewrit")
            .join("config.toml")
    }

    /// Load config: file if present, then environment overrides
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::from_file(&Self::config_path());
        config.apply_env_overrides();
        config
    }

    /// Parse a config file, falling back to defaults on any problem
    #[must_use]
    pub fn from_file(path: &std::path::Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("GEMMA_API_KEY")
            && !key.is_empty()
        {
            self.ai.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("GEMMA_BASE_URL")
            && !url.is_empty()
        {
            self.ai.base_url = url;
        }
        if let Ok(url) = std::env::var("TODO_SERVER_URL")
            && !url.is_empty()
        {
            self.todo.base_url = url;
        }
    }

    /// AI request timeout
    #[must_use]
    pub const fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai.timeout_secs)
    }

    /// Todo request timeout
    #[must_use]
    pub const fn todo_timeout(&self) -> Duration {
        Duration::from_secs(self.todo.timeout_secs)
    }
}
