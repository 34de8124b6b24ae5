//! The built-in pattern catalog.
//!
//! Each submodule is one demonstration around the CD store model and exposes
//! a constructor for its example. `PATTERN_SPECS` fixes catalog order; add a
//! new demonstration there so `list`, `run` and `run-all` pick it up together.
//! Every demonstration runs against in-memory stand-ins only.

use crate::catalog::{Example, Registry};
use crate::error::CatalogError;

pub mod adapter;
pub mod builder;
pub mod dao;
pub mod decorator;
pub mod delegate;
pub mod facade;
pub mod factory;
pub mod interpreter;
pub mod iterator;
pub mod markup;
pub mod mediator;
pub mod observer;
pub mod prototype;
pub mod proxy;
pub mod singleton;
pub mod strategy;
pub mod template;
pub mod visitor;

pub(crate) const TITLE: &str = "Waste of a Rib";
pub(crate) const BAND: &str = "Never Again";
pub(crate) const TRACKS: [&str; 3] = ["What It Means", "Brr", "Goodbye"];

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

const PATTERN_SPECS: &[fn() -> Example] = &[
    adapter::example,
    builder::example,
    dao::example,
    decorator::example,
    delegate::example,
    facade::example,
    factory::example,
    interpreter::example,
    iterator::example,
    mediator::example,
    observer::example,
    prototype::example,
    proxy::example,
    singleton::example,
    strategy::xml_example,
    strategy::json_example,
    template::example,
    visitor::example,
];

/// Assemble the canonical catalog in `PATTERN_SPECS` order.
///
/// A duplicate slug in the table is a startup error; callers treat it as
/// fatal.
pub fn builtin_registry() -> Result<Registry, CatalogError> {
    let mut registry = Registry::new();
    for build in PATTERN_SPECS {
        registry.register(build())?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Slug;
    use crate::runner::Runner;

    #[test]
    fn catalog_order_is_stable() {
        let registry = builtin_registry().expect("builtin catalog registers");
        let slugs: Vec<&str> = registry.slugs().map(Slug::as_str).collect();
        assert_eq!(
            slugs,
            vec![
                "adapter",
                "builder",
                "dao",
                "decorator",
                "delegate",
                "facade",
                "factory",
                "interpreter",
                "iterator",
                "mediator",
                "observer",
                "prototype",
                "proxy",
                "singleton",
                "strategy-xml",
                "strategy-json",
                "template",
                "visitor",
            ]
        );
    }

    #[test]
    fn every_builtin_example_passes() {
        let registry = builtin_registry().expect("builtin catalog registers");
        let report = Runner::new(&registry).run_all();
        let failures: Vec<String> = report
            .outcomes()
            .iter()
            .filter(|o| !o.succeeded)
            .map(|o| format!("{}: {:?} {:?}", o.slug, o.observed, o.error))
            .collect();
        assert!(failures.is_empty(), "failing examples: {failures:#?}");
        assert_eq!(report.total(), PATTERN_SPECS.len());
    }

    #[test]
    fn builtin_examples_are_deterministic() {
        let registry = builtin_registry().expect("builtin catalog registers");
        for example in registry.list() {
            let first = example.execute().expect("first run");
            let second = example.execute().expect("second run");
            assert_eq!(first, second, "{} is not deterministic", example.slug());
        }
    }

    #[test]
    fn descriptions_are_present() {
        let registry = builtin_registry().expect("builtin catalog registers");
        for example in registry.list() {
            assert!(
                !example.description().trim().is_empty(),
                "{} has no description",
                example.slug()
            );
        }
    }
}
