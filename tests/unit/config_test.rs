//! Tests for configuration loading and precedence

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use spindlewrit::config::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(config.ai.api_key.is_none());
    assert_eq!(config.ai.base_url, "https://api.gemma.ai/v1");
    assert_eq!(config.todo.base_url, "http://localhost:8000");
    assert_eq!(config.ai_timeout().as_secs(), 10);
}

#[test]
fn test_from_file_parses_partial_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ai]
api_key = "sk-test"
timeout_secs = 3

[todo]
base_url = "http://todos.internal:9000"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path);
    assert_eq!(config.ai.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.ai.timeout_secs, 3);
    // Unset fields keep defaults
    assert_eq!(config.ai.base_url, "https://api.gemma.ai/v1");
    assert_eq!(config.todo.base_url, "http://todos.internal:9000");
    assert_eq!(config.todo.timeout_secs, 10);
}

#[test]
fn test_from_file_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::from_file(&dir.path().join("nope.toml"));
    assert!(config.ai.api_key.is_none());
}

#[test]
fn test_from_file_garbage_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not = [valid").unwrap();

    let config = Config::from_file(&path);
    assert_eq!(config.todo.base_url, "http://localhost:8000");
}

#[test]
#[serial]
fn test_env_overrides_take_precedence() {
    unsafe {
        std::env::set_var("GEMMA_API_KEY", "sk-env");
        std::env::set_var("GEMMA_BASE_URL", "http://ai.env:1234");
        std::env::set_var("TODO_SERVER_URL", "http://todo.env:5678");
    }

    let config = Config::load();
    assert_eq!(config.ai.api_key.as_deref(), Some("sk-env"));
    assert_eq!(config.ai.base_url, "http://ai.env:1234");
    assert_eq!(config.todo.base_url, "http://todo.env:5678");

    unsafe {
        std::env::remove_var("GEMMA_API_KEY");
        std::env::remove_var("GEMMA_BASE_URL");
        std::env::remove_var("TODO_SERVER_URL");
    }
}

#[test]
#[serial]
fn test_empty_env_values_are_ignored() {
    unsafe {
        std::env::set_var("GEMMA_BASE_URL", "");
    }

    let config = Config::load();
    assert_eq!(config.ai.base_url, "https://api.gemma.ai/v1");

    unsafe {
        std::env::remove_var("GEMMA_BASE_URL");
    }
}
