//! Template renderer
//!
//! Substitutes `{{ident}}` placeholders from a parameter map. The policy is
//! fail-fast: a placeholder with no matching parameter is a
//! `MissingParameter` error, never silently left in the output. Anything
//! that is not a well-formed placeholder (single braces, `{{not ident}}`)
//! passes through untouched, so shell snippets and format strings inside
//! templates survive rendering.
//!
//! Rendering is deterministic: same template and params, same output.
//! No clock reads here - dates only appear if the caller passes them in.

use std::collections::BTreeMap;

use crate::error::ScaffoldError;

/// Render a template with the given parameters
///
/// Convenience wrapper over [`render_named`] for callers without a
/// meaningful template label.
pub fn render(
    template: &str,
    params: &BTreeMap<String, String>,
) -> Result<String, ScaffoldError> {
    render_named("template", template, params)
}

/// Render a template, labelling errors with `origin`
///
/// `origin` is typically the template's relative path; it only appears in
/// error messages.
pub fn render_named(
    origin: &str,
    template: &str,
    params: &BTreeMap<String, String>,
) -> Result<String, ScaffoldError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        if let Some(end) = after.find("}}") {
            let ident = &after[..end];
            if is_placeholder_ident(ident) {
                match params.get(ident) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(ScaffoldError::MissingParameter {
                            name: ident.to_string(),
                            template: origin.to_string(),
                        });
                    },
                }
                rest = &after[end + 2..];
                continue;
            }
        }

        // Not a placeholder: keep the opening braces literally and move on
        out.push_str("{{");
        rest = after;
    }

    out.push_str(rest);
    Ok(out)
}

/// Placeholder idents are lowercase identifiers: `name`, `extra_param`
fn is_placeholder_ident(s: &str) -> bool {
    !s.is_empty()
        && s.chars().next().is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
