//! In-memory representation of one catalog entry.
//!
//! An `Example` pairs an executable demonstration with the observation it is
//! expected to produce. Entries are built once when the catalog is assembled
//! and never mutated afterwards; use `Registry` for lookup and ordering.

use crate::catalog::identity::{PatternFamily, Slug};
use crate::outcome::Observed;
use anyhow::Result;
use std::fmt;

/// Zero-argument action behind an example.
pub type ExampleAction = Box<dyn Fn() -> Result<Observed> + Send + Sync>;

/// Named, self-contained illustration with a deterministic expected outcome.
pub struct Example {
    slug: Slug,
    description: String,
    family: PatternFamily,
    expected: Observed,
    action: ExampleAction,
}

impl Example {
    pub fn new<F>(
        slug: impl Into<String>,
        family: PatternFamily,
        description: impl Into<String>,
        expected: Observed,
        action: F,
    ) -> Self
    where
        F: Fn() -> Result<Observed> + Send + Sync + 'static,
    {
        Example {
            slug: Slug(slug.into()),
            description: description.into(),
            family,
            expected,
            action: Box::new(action),
        }
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn family(&self) -> &PatternFamily {
        &self.family
    }

    pub fn expected(&self) -> &Observed {
        &self.expected
    }

    /// Execute the action once. Comparison happens in the runner.
    pub fn execute(&self) -> Result<Observed> {
        (self.action)()
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("slug", &self.slug)
            .field("family", &self.family)
            .field("description", &self.description)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}
