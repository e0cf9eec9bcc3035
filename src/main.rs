//! spindlewrit - A CLI tool to scaffold new projects from templates, todo
//! items, and AI suggestions
//!
//! Given a name, description, and project type (or a task fetched from an
//! external todo service), spindlewrit creates a directory structure with
//! boilerplate files, optionally asking an AI function-calling endpoint to
//! suggest the structure.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use colored::Colorize;

mod cli;
mod commands;

/// Main entry point for the spindlewrit CLI
///
/// Every failure is reported on stderr and mapped to a non-zero exit code;
/// the process never aborts with a panic for expected error kinds.
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {e:#}", "Error:".red());
        std::process::exit(1);
    }
}
