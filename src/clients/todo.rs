//! Todo service client
//!
//! Fetches a single task record by id: `GET {base}/api/todos/{id}`.
//! Read-only; the remote item is never mutated.

use crate::config::TodoConfig;
use crate::error::ScaffoldError;
use crate::models::TodoItem;

/// Client for the external todo service
pub struct TodoClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for TodoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl TodoClient {
    /// Build a client from config
    pub fn new(config: &TodoConfig) -> Result<Self, ScaffoldError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ScaffoldError::TodoServiceUnavailable(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch a todo item by id
    ///
    /// 404 maps to `TodoNotFound`; every transport failure maps to
    /// `TodoServiceUnavailable`.
    pub fn fetch(&self, todo_id: &str) -> Result<TodoItem, ScaffoldError> {
        let url = format!("{}/api/todos/{todo_id}", self.base_url);
        log::debug!("fetching todo from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ScaffoldError::TodoServiceUnavailable(format!("request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ScaffoldError::TodoNotFound(todo_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(ScaffoldError::TodoServiceUnavailable(format!(
                "service returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| ScaffoldError::TodoServiceUnavailable(format!("malformed response: {e}")))
    }
}
