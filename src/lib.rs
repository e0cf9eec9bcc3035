//! spindlewrit - A CLI tool to scaffold new projects from templates, todo
//! items, and AI suggestions
//!
//! This library provides the core functionality: the template catalog,
//! placeholder rendering, the project emitter, and the clients for the
//! external todo and AI suggestion services.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod clients;
pub mod config;
pub mod emit;
pub mod error;
pub mod models;
pub mod output;
pub mod render;
