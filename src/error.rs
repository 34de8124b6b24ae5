//! Error taxonomy for registration and execution.
//!
//! Registration failures are fatal to startup; execution failures are isolated
//! per example and recorded as data by batch runs.

use crate::catalog::Slug;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Registering a slug that is already present; the catalog never shadows
    /// an entry.
    #[error("duplicate example slug '{0}'")]
    DuplicateSlug(Slug),

    #[error("no example registered under '{0}'")]
    NotFound(Slug),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The action returned an error.
    #[error("example '{slug}' failed: {detail}")]
    Failed { slug: Slug, detail: String },

    #[error("example '{slug}' panicked: {detail}")]
    Panicked { slug: Slug, detail: String },

    /// The action produced a value of a different shape than declared.
    #[error("example '{slug}' produced {observed} where {expected} was declared")]
    ShapeMismatch {
        slug: Slug,
        observed: &'static str,
        expected: &'static str,
    },
}

impl ExecutionError {
    pub fn slug(&self) -> &Slug {
        match self {
            ExecutionError::Failed { slug, .. }
            | ExecutionError::Panicked { slug, .. }
            | ExecutionError::ShapeMismatch { slug, .. } => slug,
        }
    }
}

/// Failure surfaced by single-example and selected runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_slug() {
        let err = CatalogError::NotFound(Slug::from("nonexistent-slug"));
        assert_eq!(
            err.to_string(),
            "no example registered under 'nonexistent-slug'"
        );

        let err = ExecutionError::ShapeMismatch {
            slug: Slug::from("singleton"),
            observed: "text",
            expected: "number",
        };
        assert_eq!(
            err.to_string(),
            "example 'singleton' produced text where number was declared"
        );
        assert_eq!(err.slug().as_str(), "singleton");
    }

    #[test]
    fn run_error_is_transparent() {
        let err: RunError = CatalogError::DuplicateSlug(Slug::from("adapter")).into();
        assert_eq!(err.to_string(), "duplicate example slug 'adapter'");
    }
}
