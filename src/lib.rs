//! Shared library for the pattern catalog runner.
//!
//! The crate exposes the catalog types (examples, registry), the runner that
//! executes them, and the built-in set of CD store pattern demonstrations.
//! Public functions here form the contract that the `pattern` binary and the
//! integration tests depend on.

pub mod catalog;
pub mod error;
pub mod outcome;
pub mod patterns;
pub mod runner;
pub mod telemetry;

pub use catalog::{Example, ExampleAction, PatternFamily, Registry, Slug};
pub use error::{CatalogError, ExecutionError, RunError};
pub use outcome::{Observed, Outcome, RunReport};
pub use patterns::builtin_registry;
pub use runner::Runner;

/// Split comma- or whitespace-delimited selection lists into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a selection list into slugs, dropping repeats but keeping the first
/// occurrence's position.
pub fn parse_selection(value: &str) -> Vec<Slug> {
    let mut slugs: Vec<Slug> = Vec::new();
    for token in split_list(value) {
        let slug = Slug(token);
        if !slugs.contains(&slug) {
            slugs.push(slug);
        }
    }
    slugs
}
