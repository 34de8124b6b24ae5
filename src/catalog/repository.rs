//! Holds the ordered set of examples for lookup by slug.
//!
//! Insertion order is catalog order. The slug index is kept alongside the
//! entries so lookups stay cheap and duplicate registrations are rejected
//! before the entry list is touched.

use crate::catalog::identity::Slug;
use crate::catalog::model::Example;
use crate::error::CatalogError;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Default, Debug)]
/// In-memory catalog of examples keyed by `Slug`.
pub struct Registry {
    entries: Vec<Example>,
    by_slug: BTreeMap<Slug, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an example; rejects a slug that is already present.
    pub fn register(&mut self, example: Example) -> Result<(), CatalogError> {
        if self.by_slug.contains_key(example.slug()) {
            return Err(CatalogError::DuplicateSlug(example.slug().clone()));
        }
        debug!(slug = %example.slug(), "registered example");
        self.by_slug.insert(example.slug().clone(), self.entries.len());
        self.entries.push(example);
        Ok(())
    }

    /// Fetch an example by slug.
    pub fn get(&self, slug: &Slug) -> Result<&Example, CatalogError> {
        self.by_slug
            .get(slug)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| CatalogError::NotFound(slug.clone()))
    }

    pub fn contains(&self, slug: &Slug) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Iterates examples in catalog order. Calling it again restarts from the
    /// first entry.
    pub fn list(&self) -> impl Iterator<Item = &Example> {
        self.entries.iter()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &Slug> {
        self.entries.iter().map(Example::slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
