//! Tests for the template renderer
//!
//! The missing-parameter policy is fail-fast: a well-formed placeholder
//! with no value is an error, raised before anything is written.

use std::collections::BTreeMap;

use spindlewrit::render::{render, render_named};

fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[test]
fn test_basic_substitution() {
    let out = render("# {{name}}\n\n{{description}}\n", &params(&[
        ("name", "demo"),
        ("description", "a thing"),
    ]))
    .unwrap();
    assert_eq!(out, "# demo\n\na thing\n");
}

#[test]
fn test_missing_parameter_is_an_error() {
    let err = render("{{name}}", &params(&[("description", "x")])).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("missing template parameter"));
    assert!(message.contains("name"));
}

#[test]
fn test_error_carries_template_origin() {
    let err = render_named("README.md", "{{missing}}", &params(&[])).unwrap_err();
    assert!(err.to_string().contains("README.md"));
}

#[test]
fn test_deterministic_over_repeated_calls() {
    let p = params(&[("name", "demo"), ("description", "desc"), ("type", "python")]);
    let template = "# {{name}} ({{type}})\n{{description}}";
    let outputs: Vec<String> = (0..5).map(|_| render(template, &p).unwrap()).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_output_contains_no_placeholder_syntax() {
    let p = params(&[("name", "demo"), ("description", "desc"), ("type", "rust")]);
    let out = render("{{name}} {{description}} {{type}}", &p).unwrap();
    assert!(!out.contains("{{"));
}

#[test]
fn test_literal_braces_survive() {
    let template = r#"setup(package_dir={"": "src"})"#;
    let out = render(template, &params(&[])).unwrap();
    assert_eq!(out, template);
}

#[test]
fn test_value_containing_placeholder_syntax_is_not_rerendered() {
    // Substitution is a single pass; values are data, not templates
    let out = render("{{name}}", &params(&[("name", "{{description}}")])).unwrap();
    assert_eq!(out, "{{description}}");
}

#[test]
fn test_empty_template() {
    assert_eq!(render("", &params(&[])).unwrap(), "");
}

#[test]
fn test_placeholder_at_boundaries() {
    let out = render("{{a}}mid{{b}}", &params(&[("a", "start"), ("b", "end")])).unwrap();
    assert_eq!(out, "startmidend");
}
