//! Tests for the template catalog

use spindlewrit::catalog::Catalog;
use spindlewrit::models::{ProjectType, TemplateFile};

// =============================================================================
// LOOKUP TESTS
// =============================================================================

#[test]
fn test_all_builtin_types_have_templates() {
    let catalog = Catalog::builtin();
    for pt in ProjectType::ALL {
        let templates = catalog.templates(pt).unwrap();
        assert!(!templates.is_empty(), "{pt} should have at least one template");
    }
}

#[test]
fn test_lookup_is_pure() {
    let catalog = Catalog::builtin();
    let first: Vec<String> = catalog
        .templates(ProjectType::Python)
        .unwrap()
        .iter()
        .map(|t| t.relative_path.clone())
        .collect();
    let second: Vec<String> = catalog
        .templates(ProjectType::Python)
        .unwrap()
        .iter()
        .map(|t| t.relative_path.clone())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_type_error_lists_registered() {
    let catalog = Catalog::empty();
    let err = catalog.templates(ProjectType::Python).unwrap_err();
    assert!(err.to_string().contains("unknown project type: python"));
}

#[test]
fn test_registered_returns_stable_order() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.registered(),
        vec![ProjectType::Python, ProjectType::Rust, ProjectType::Common]
    );
}

// =============================================================================
// TEMPLATE SET CONTENT
// =============================================================================

#[test]
fn test_python_set_has_package_entry_file() {
    let catalog = Catalog::builtin();
    let templates = catalog.templates(ProjectType::Python).unwrap();
    assert!(templates.iter().any(|t| t.relative_path == "src/{{name}}/__init__.py"));
    assert!(templates.iter().any(|t| t.relative_path == "setup.py"));
}

#[test]
fn test_rust_set_has_cargo_manifest() {
    let catalog = Catalog::builtin();
    let templates = catalog.templates(ProjectType::Rust).unwrap();
    assert!(templates.iter().any(|t| t.relative_path == "Cargo.toml"));
    assert!(templates.iter().any(|t| t.relative_path == "src/main.rs"));
}

#[test]
fn test_no_template_path_is_absolute() {
    let catalog = Catalog::builtin();
    for pt in ProjectType::ALL {
        for template in catalog.templates(pt).unwrap() {
            assert!(
                !template.relative_path.starts_with('/'),
                "{} is absolute",
                template.relative_path
            );
            assert!(
                !template.relative_path.contains(".."),
                "{} contains ..",
                template.relative_path
            );
        }
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[test]
fn test_register_duplicate_rejected() {
    let mut catalog = Catalog::builtin();
    let result = catalog.register(ProjectType::Python, vec![TemplateFile::new("x", "y")]);
    assert!(result.is_err());
}

#[test]
fn test_register_into_empty_catalog() {
    let mut catalog = Catalog::empty();
    catalog
        .register(ProjectType::Common, vec![TemplateFile::new("README.md", "# {{name}}")])
        .unwrap();
    assert_eq!(catalog.templates(ProjectType::Common).unwrap().len(), 1);
}

// =============================================================================
// OVERRIDE MERGING
// =============================================================================

#[test]
fn test_merge_preserves_base_order() {
    let base = vec![
        TemplateFile::new("a", "1"),
        TemplateFile::new("b", "2"),
        TemplateFile::new("c", "3"),
    ];
    let overrides = vec![TemplateFile::new("b", "replaced")];

    let merged = Catalog::merge_overrides(&base, &overrides);
    let paths: Vec<&str> = merged.iter().map(|t| t.relative_path.as_str()).collect();
    assert_eq!(paths, vec!["a", "b", "c"]);
    assert_eq!(merged[1].content_template, "replaced");
}

#[test]
fn test_merge_with_no_overrides_is_identity() {
    let base = vec![TemplateFile::new("a", "1")];
    let merged = Catalog::merge_overrides(&base, &[]);
    assert_eq!(merged, base);
}
