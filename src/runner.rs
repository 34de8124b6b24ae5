//! Executes catalog examples and compares them against their expectations.
//!
//! Runs are single linear passes in catalog order. A failing, panicking or
//! mis-shaped example is converted into an `ExecutionError`; batch runs record
//! that error in the report and move on to the next example.

use crate::catalog::{Example, Registry, Slug};
use crate::error::{ExecutionError, RunError};
use crate::outcome::{Outcome, RunReport};
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use tracing::{debug, info, warn};

thread_local! {
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static PANIC_HOOK: Once = Once::new();

/// Wrap the current panic hook so panics raised inside an example action are
/// not printed; the runner reports them as `ExecutionError::Panicked` instead.
/// Panics on other threads, or outside an action, still reach the old hook.
fn install_quiet_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET_PANICS.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

fn run_quietly<T>(action: impl FnOnce() -> T) -> std::thread::Result<T> {
    install_quiet_panic_hook();
    QUIET_PANICS.with(|quiet| quiet.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(action));
    QUIET_PANICS.with(|quiet| quiet.set(false));
    result
}

/// Borrows a registry for the duration of one or more runs.
pub struct Runner<'a> {
    registry: &'a Registry,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Runner { registry }
    }

    /// Run a single example by slug.
    pub fn run_one(&self, slug: &Slug) -> Result<Outcome, RunError> {
        let example = self.registry.get(slug)?;
        Ok(execute(example)?)
    }

    /// Run every example in catalog order; never stops early.
    pub fn run_all(&self) -> RunReport {
        self.run_examples(self.registry.list())
    }

    /// Run a subset in the given order.
    ///
    /// Every slug is resolved before anything executes, so an unknown slug
    /// fails the whole selection without partial output.
    pub fn run_selected(&self, slugs: &[Slug]) -> Result<RunReport, RunError> {
        let examples = slugs
            .iter()
            .map(|slug| self.registry.get(slug))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.run_examples(examples))
    }

    fn run_examples(&self, examples: impl IntoIterator<Item = &'a Example>) -> RunReport {
        let mut report = RunReport::new();
        for example in examples {
            let outcome = match execute(example) {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(slug = %example.slug(), error = %err, "example failed to execute");
                    Outcome::failed(&err)
                }
            };
            if !outcome.succeeded && outcome.error.is_none() {
                warn!(slug = %example.slug(), "example did not match its expectation");
            }
            report.record(outcome);
        }
        info!(
            passed = report.passed(),
            total = report.total(),
            "run finished"
        );
        report
    }
}

/// Execute one example and compare the observation with its expectation.
pub fn execute(example: &Example) -> Result<Outcome, ExecutionError> {
    let slug = example.slug().clone();
    debug!(slug = %slug, "running example");

    let observed = match run_quietly(|| example.execute()) {
        Ok(Ok(observed)) => observed,
        Ok(Err(err)) => {
            return Err(ExecutionError::Failed {
                slug,
                detail: format!("{err:#}"),
            });
        }
        Err(payload) => {
            return Err(ExecutionError::Panicked {
                slug,
                detail: panic_message(payload.as_ref()),
            });
        }
    };

    let expected = example.expected();
    if !observed.same_shape(expected) {
        return Err(ExecutionError::ShapeMismatch {
            slug,
            observed: observed.kind(),
            expected: expected.kind(),
        });
    }

    Ok(Outcome::compared(slug, observed, expected))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternFamily;
    use crate::error::CatalogError;
    use crate::outcome::Observed;
    use anyhow::bail;

    fn registry_with_failures() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(Example::new(
                "strategy-xml",
                PatternFamily::Behavioral,
                "xml rendering",
                Observed::text("<CD><TITLE>Waste of a Rib</TITLE><BAND>Never Again</BAND></CD>"),
                || {
                    Ok(Observed::text(
                        "<CD><TITLE>Waste of a Rib</TITLE><BAND>Never Again</BAND></CD>",
                    ))
                },
            ))
            .unwrap();
        registry
            .register(Example::new(
                "errors",
                PatternFamily::Behavioral,
                "returns an error",
                Observed::Number(0),
                || bail!("inventory offline"),
            ))
            .unwrap();
        registry
            .register(Example::new(
                "panics",
                PatternFamily::Behavioral,
                "panics",
                Observed::Number(0),
                || panic!("boom"),
            ))
            .unwrap();
        registry
            .register(Example::new(
                "wrong-shape",
                PatternFamily::Behavioral,
                "returns text for a number",
                Observed::Number(1),
                || Ok(Observed::text("1")),
            ))
            .unwrap();
        registry
            .register(Example::new(
                "mismatch",
                PatternFamily::Behavioral,
                "returns the wrong number",
                Observed::Number(1),
                || Ok(Observed::Number(2)),
            ))
            .unwrap();
        registry
    }

    #[test]
    fn run_one_reports_literal_observation() {
        let registry = registry_with_failures();
        let runner = Runner::new(&registry);
        let outcome = runner.run_one(&Slug::from("strategy-xml")).unwrap();
        assert!(outcome.succeeded);
        assert_eq!(
            outcome.observed,
            Some(Observed::text(
                "<CD><TITLE>Waste of a Rib</TITLE><BAND>Never Again</BAND></CD>"
            ))
        );
    }

    #[test]
    fn run_one_wraps_errors_panics_and_shapes() {
        let registry = registry_with_failures();
        let runner = Runner::new(&registry);

        match runner.run_one(&Slug::from("errors")) {
            Err(RunError::Execution(ExecutionError::Failed { detail, .. })) => {
                assert!(detail.contains("inventory offline"))
            }
            other => panic!("expected failed execution, got {other:?}"),
        }
        match runner.run_one(&Slug::from("panics")) {
            Err(RunError::Execution(ExecutionError::Panicked { detail, .. })) => {
                assert_eq!(detail, "boom")
            }
            other => panic!("expected panic to be caught, got {other:?}"),
        }
        assert!(matches!(
            runner.run_one(&Slug::from("wrong-shape")),
            Err(RunError::Execution(ExecutionError::ShapeMismatch {
                observed: "text",
                expected: "number",
                ..
            }))
        ));
    }

    #[test]
    fn run_one_unknown_slug_is_not_found() {
        let registry = registry_with_failures();
        let err = Runner::new(&registry)
            .run_one(&Slug::from("nonexistent-slug"))
            .expect_err("unknown slug");
        assert_eq!(
            err,
            RunError::Catalog(CatalogError::NotFound(Slug::from("nonexistent-slug")))
        );
    }

    #[test]
    fn run_all_isolates_failures() {
        let registry = registry_with_failures();
        let report = Runner::new(&registry).run_all();
        assert_eq!(report.total(), registry.len());
        assert_eq!(report.passed(), 1);
        assert!(!report.overall_succeeded());

        let statuses: Vec<&str> = report.outcomes().iter().map(Outcome::status).collect();
        assert_eq!(statuses, vec!["PASS", "ERROR", "ERROR", "ERROR", "FAIL"]);

        let mismatch = report.get(&Slug::from("mismatch")).unwrap();
        assert_eq!(mismatch.observed, Some(Observed::Number(2)));
        let errored = report.get(&Slug::from("errors")).unwrap();
        assert!(errored.observed.is_none());
        assert!(errored.error.as_deref().unwrap().contains("inventory offline"));
    }

    #[test]
    fn caught_panic_only_silences_its_own_action() {
        let registry = registry_with_failures();
        let runner = Runner::new(&registry);
        assert!(runner.run_one(&Slug::from("panics")).is_err());
        assert!(!QUIET_PANICS.with(Cell::get));

        let nested = run_quietly(|| QUIET_PANICS.with(Cell::get));
        assert_eq!(nested.ok(), Some(true));
        assert!(!QUIET_PANICS.with(Cell::get));
    }

    #[test]
    fn run_selected_resolves_everything_first() {
        let registry = registry_with_failures();
        let runner = Runner::new(&registry);
        let err = runner
            .run_selected(&[Slug::from("strategy-xml"), Slug::from("missing")])
            .expect_err("missing slug");
        assert!(matches!(err, RunError::Catalog(CatalogError::NotFound(_))));

        let report = runner
            .run_selected(&[Slug::from("mismatch"), Slug::from("strategy-xml")])
            .unwrap();
        let order: Vec<&str> = report.outcomes().iter().map(|o| o.slug.as_str()).collect();
        assert_eq!(order, vec!["mismatch", "strategy-xml"]);
    }
}
