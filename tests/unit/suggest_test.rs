//! Tests for suggestion providers
//!
//! Only the deterministic offline provider is exercised here; the HTTP
//! provider is covered in `tests/http_clients.rs` against a local server.

use std::collections::BTreeSet;

use spindlewrit::clients::suggest::kebab_case;
use spindlewrit::clients::{OfflineSuggester, SuggestionProvider};
use spindlewrit::models::ProjectType;

fn all_types() -> BTreeSet<ProjectType> {
    ProjectType::ALL.into_iter().collect()
}

#[test]
fn test_rust_description_recommends_rust() {
    let suggestion = OfflineSuggester.suggest("build a CLI in Rust", &all_types()).unwrap();
    assert_eq!(suggestion.recommended_type, ProjectType::Rust);
}

#[test]
fn test_cargo_keyword_recommends_rust() {
    let suggestion =
        OfflineSuggester.suggest("publish the crate with cargo", &all_types()).unwrap();
    assert_eq!(suggestion.recommended_type, ProjectType::Rust);
}

#[test]
fn test_web_description_recommends_common() {
    let suggestion =
        OfflineSuggester.suggest("simple HTML and CSS site", &all_types()).unwrap();
    assert_eq!(suggestion.recommended_type, ProjectType::Common);
}

#[test]
fn test_plain_description_recommends_python() {
    let suggestion =
        OfflineSuggester.suggest("scrape some data and chart it", &all_types()).unwrap();
    assert_eq!(suggestion.recommended_type, ProjectType::Python);
}

#[test]
fn test_keyword_must_be_whole_word() {
    // "trust" contains "rust" but is not a rust keyword
    let suggestion =
        OfflineSuggester.suggest("a trust scoring service", &all_types()).unwrap();
    assert_eq!(suggestion.recommended_type, ProjectType::Python);
}

#[test]
fn test_recommendation_stays_within_available_types() {
    let only_python: BTreeSet<ProjectType> = [ProjectType::Python].into_iter().collect();
    let suggestion = OfflineSuggester.suggest("build a CLI in Rust", &only_python).unwrap();
    assert_eq!(suggestion.recommended_type, ProjectType::Python);
}

#[test]
fn test_no_available_types_is_an_error() {
    let result = OfflineSuggester.suggest("anything", &BTreeSet::new());
    assert!(result.is_err());
}

#[test]
fn test_suggestion_is_deterministic() {
    let first = OfflineSuggester.suggest("build a CLI in Rust", &all_types()).unwrap();
    let second = OfflineSuggester.suggest("build a CLI in Rust", &all_types()).unwrap();
    assert_eq!(first.recommended_type, second.recommended_type);
    assert_eq!(first.recommended_name, second.recommended_name);
}

#[test]
fn test_name_is_filesystem_safe() {
    let suggestion = OfflineSuggester
        .suggest("Make (yet another!) C.I. dashboard -- v2", &all_types())
        .unwrap();
    assert!(
        suggestion
            .recommended_name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    );
}

#[test]
fn test_unusable_description_still_yields_a_name() {
    let suggestion = OfflineSuggester.suggest("!!! ???", &all_types()).unwrap();
    assert_eq!(suggestion.recommended_name, "generated-project");
}

#[test]
fn test_kebab_case_basics() {
    assert_eq!(kebab_case("Build a CLI in Rust"), "build-a-cli-in-rust");
    assert_eq!(kebab_case("  spaced   out  "), "spaced-out");
    assert_eq!(kebab_case(""), "");
}
