//! AI suggestion client
//!
//! Asks an external function-calling endpoint to recommend a project type,
//! name, and optional file overrides for a free-text task description. The
//! endpoint is offered one function per allowed project type
//! (`create_python_project`, `create_rust_project`, `create_common_project`)
//! and must answer with exactly one call.
//!
//! The dependency is best-effort, not authoritative: one bounded attempt,
//! and every failure mode collapses into `AiService` so callers can fall
//! back to a default type.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::config::AiConfig;
use crate::error::ScaffoldError;
use crate::models::{ProjectType, Suggestion, TemplateFile};

/// Narrow seam for suggestion sources, substitutable in tests
pub trait SuggestionProvider {
    /// Recommend a project type and structure for a description
    ///
    /// The recommended type is guaranteed to be in `available_types`.
    fn suggest(
        &self,
        description: &str,
        available_types: &BTreeSet<ProjectType>,
    ) -> Result<Suggestion, ScaffoldError>;
}

/// Arguments carried by the selected function call
#[derive(Debug, Deserialize)]
struct FunctionArguments {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    files: Vec<TemplateFile>,
    #[serde(default)]
    rationale: String,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    // Older endpoints return the call at the top level
    #[serde(default)]
    function_call: Option<FunctionCall>,
}

/// Client for the Gemma function-calling endpoint
pub struct GemmaClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for GemmaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key
        f.debug_struct("GemmaClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl GemmaClient {
    /// Build a client from config
    ///
    /// Fails with `AiService` if no API key is configured or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &AiConfig) -> Result<Self, ScaffoldError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ScaffoldError::AiService("no API key configured".to_string()))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ScaffoldError::AiService(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    fn request_payload(
        description: &str,
        available_types: &BTreeSet<ProjectType>,
    ) -> serde_json::Value {
        let tools: Vec<serde_json::Value> = available_types
            .iter()
            .map(|pt| {
                serde_json::json!({
                    "type": "function",
                    "function": {
                        "name": function_name(*pt),
                        "description": format!("Scaffold a new {pt} project for the task"),
                        "parameters": {
                            "type": "object",
                            "properties": {
                                "name": {
                                    "type": "string",
                                    "description": "Project name (kebab-case)"
                                },
                                "description": {
                                    "type": "string",
                                    "description": "Short description of the project"
                                },
                                "files": {
                                    "type": "array",
                                    "description": "Optional extra or replacement files",
                                    "items": {
                                        "type": "object",
                                        "properties": {
                                            "path": { "type": "string" },
                                            "content": { "type": "string" }
                                        },
                                        "required": ["path", "content"]
                                    }
                                },
                                "rationale": {
                                    "type": "string",
                                    "description": "Why this project type fits"
                                }
                            },
                            "required": ["name", "description"]
                        }
                    }
                })
            })
            .collect();

        serde_json::json!({
            "model": "gemma-7b-it",
            "messages": [{
                "role": "user",
                "content": format!(
                    "Pick the most suitable project scaffold for this task and call the \
                     matching function.\n\nTask description: {description}"
                ),
            }],
            "tools": tools,
            "tool_choice": "required",
        })
    }

    fn extract_call(response: ChatResponse) -> Result<FunctionCall, ScaffoldError> {
        // Current endpoints: choices[0].message.tool_calls[0]
        if let Some(choice) = response.choices.into_iter().next()
            && let Some(tool_call) = choice.message.tool_calls.into_iter().next()
        {
            return Ok(tool_call.function);
        }
        // Older endpoints: top-level function_call
        if let Some(call) = response.function_call {
            return Ok(call);
        }
        Err(ScaffoldError::AiService("response contains no function call".to_string()))
    }
}

impl SuggestionProvider for GemmaClient {
    fn suggest(
        &self,
        description: &str,
        available_types: &BTreeSet<ProjectType>,
    ) -> Result<Suggestion, ScaffoldError> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = Self::request_payload(description, available_types);

        log::debug!("requesting suggestion from {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| ScaffoldError::AiService(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ScaffoldError::AiService(format!(
                "endpoint returned HTTP {}",
                response.status()
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| ScaffoldError::AiService(format!("malformed response: {e}")))?;

        let call = Self::extract_call(parsed)?;

        let recommended_type = type_for_function(&call.name).ok_or_else(|| {
            ScaffoldError::AiService(format!("unrecognized function call: {}", call.name))
        })?;
        if !available_types.contains(&recommended_type) {
            return Err(ScaffoldError::AiService(format!(
                "endpoint selected unavailable type: {recommended_type}"
            )));
        }

        let args: FunctionArguments = serde_json::from_str(&call.arguments)
            .map_err(|e| ScaffoldError::AiService(format!("malformed function arguments: {e}")))?;

        let recommended_name = kebab_case(&args.name);
        if recommended_name.is_empty() {
            return Err(ScaffoldError::AiService(format!(
                "unusable recommended name: {:?}",
                args.name
            )));
        }

        Ok(Suggestion {
            recommended_type,
            recommended_name,
            recommended_description: args.description,
            recommended_files: args.files,
            rationale: args.rationale,
        })
    }
}

/// Deterministic keyword-based suggester; no network, no key
///
/// Used with `--offline` and as the documented fallback when no API key is
/// configured. Rust-flavored words pick rust, web-flavored words pick
/// common, everything else picks python.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSuggester;

impl OfflineSuggester {
    const RUST_WORDS: [&'static str; 3] = ["rust", "cargo", "rustc"];
    const WEB_WORDS: [&'static str; 4] = ["web", "html", "css", "js"];

    fn pick_type(description: &str, available: &BTreeSet<ProjectType>) -> ProjectType {
        let lower = description.to_lowercase();
        let words: BTreeSet<&str> = lower.split(|c: char| !c.is_ascii_alphanumeric()).collect();

        let preferred = if Self::RUST_WORDS.iter().any(|w| words.contains(w)) {
            ProjectType::Rust
        } else if Self::WEB_WORDS.iter().any(|w| words.contains(w)) {
            ProjectType::Common
        } else {
            ProjectType::Python
        };

        if available.contains(&preferred) {
            preferred
        } else {
            // Degrade to whatever the caller allows
            available.iter().next().copied().unwrap_or_default()
        }
    }
}

impl SuggestionProvider for OfflineSuggester {
    fn suggest(
        &self,
        description: &str,
        available_types: &BTreeSet<ProjectType>,
    ) -> Result<Suggestion, ScaffoldError> {
        if available_types.is_empty() {
            return Err(ScaffoldError::AiService("no available project types".to_string()));
        }

        let recommended_type = Self::pick_type(description, available_types);
        let mut recommended_name = kebab_case(description);
        if recommended_name.is_empty() {
            recommended_name = "generated-project".to_string();
        }

        Ok(Suggestion {
            recommended_type,
            recommended_name,
            recommended_description: description.trim().to_string(),
            recommended_files: Vec::new(),
            rationale: format!("keyword match for {recommended_type}"),
        })
    }
}

const fn function_name(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Python => "create_python_project",
        ProjectType::Rust => "create_rust_project",
        ProjectType::Common => "create_common_project",
    }
}

fn type_for_function(name: &str) -> Option<ProjectType> {
    match name {
        "create_python_project" => Some(ProjectType::Python),
        "create_rust_project" => Some(ProjectType::Rust),
        "create_common_project" => Some(ProjectType::Common),
        _ => None,
    }
}

/// Derive a filesystem-safe kebab-case name from free text
///
/// Lowercase, strip anything but letters/digits/spaces/dashes, collapse
/// separators to single dashes, cap at 30 characters.
#[must_use]
pub fn kebab_case(text: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    static COLLAPSE: OnceLock<Regex> = OnceLock::new();

    let strip = STRIP.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").expect("pattern is static"));
    let collapse = COLLAPSE.get_or_init(|| Regex::new(r"[\s-]+").expect("pattern is static"));

    let lower = text.to_lowercase();
    let cleaned = strip.replace_all(&lower, "");
    let dashed = collapse.replace_all(cleaned.trim(), "-");

    let mut name: String = dashed.chars().take(30).collect();
    while name.ends_with('-') {
        name.pop();
    }
    name.trim_start_matches('-').to_string()
}
