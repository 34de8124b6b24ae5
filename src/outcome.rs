//! Serializable results produced by running catalog examples.
//!
//! Shared between the runner, the `pattern` binary and the test suite. The
//! JSON shapes mirror `schema/run_report.schema.json` so reports can be
//! validated and diffed without ad-hoc maps.

use crate::catalog::Slug;
use crate::error::ExecutionError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
/// Value an example hands back when it runs.
///
/// Scalars compare exactly; `Pairs` compares structurally, so both key order
/// and values must match.
pub enum Observed {
    Text(String),
    Number(i64),
    Pairs(Vec<(String, String)>),
}

impl Observed {
    pub fn text(value: impl Into<String>) -> Self {
        Observed::Text(value.into())
    }

    pub fn pairs<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Observed::Pairs(
            items
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Name of the value's shape, used when an example returns the wrong one.
    pub fn kind(&self) -> &'static str {
        match self {
            Observed::Text(_) => "text",
            Observed::Number(_) => "number",
            Observed::Pairs(_) => "pairs",
        }
    }

    pub fn same_shape(&self, other: &Observed) -> bool {
        self.kind() == other.kind()
    }
}

impl fmt::Display for Observed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observed::Text(text) => f.write_str(text),
            Observed::Number(value) => write!(f, "{value}"),
            Observed::Pairs(items) => {
                for (idx, (key, value)) in items.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key}={value}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Result of one example execution.
///
/// `observed` is `None` when the action failed before producing a value; the
/// rendered failure then lives in `error`.
pub struct Outcome {
    pub slug: Slug,
    pub observed: Option<Observed>,
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    /// Compare an observation against the declared expectation.
    pub fn compared(slug: Slug, observed: Observed, expected: &Observed) -> Self {
        let succeeded = &observed == expected;
        Outcome {
            slug,
            observed: Some(observed),
            succeeded,
            error: None,
        }
    }

    /// Record an execution failure as data so a batch can continue.
    pub fn failed(err: &ExecutionError) -> Self {
        Outcome {
            slug: err.slug().clone(),
            observed: None,
            succeeded: false,
            error: Some(err.to_string()),
        }
    }

    /// Short status label used in tables.
    pub fn status(&self) -> &'static str {
        match (self.succeeded, self.error.is_some()) {
            (true, _) => "PASS",
            (false, true) => "ERROR",
            (false, false) => "FAIL",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Aggregate result of a batch run, one outcome per slug in execution order.
pub struct RunReport {
    outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an outcome, replacing any earlier outcome for the same slug.
    pub fn record(&mut self, outcome: Outcome) {
        match self.outcomes.iter_mut().find(|o| o.slug == outcome.slug) {
            Some(existing) => *existing = outcome,
            None => self.outcomes.push(outcome),
        }
    }

    pub fn get(&self, slug: &Slug) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| &o.slug == slug)
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    /// True when every recorded outcome succeeded; vacuously true when empty.
    pub fn overall_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.succeeded)
    }

    /// The `N/M passed` line printed after a table.
    pub fn summary_line(&self) -> String {
        format!("{}/{} passed", self.passed(), self.total())
    }
}

impl Serialize for RunReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RunReport", 4)?;
        state.serialize_field("overall_succeeded", &self.overall_succeeded())?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("total", &self.total())?;
        state.serialize_field("outcomes", &self.outcomes)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pairs_compare_structurally() {
        let expected = Observed::pairs([("type", "shirt"), ("size", "XL")]);
        let same = Outcome::compared(
            Slug::from("builder"),
            Observed::pairs([("type", "shirt"), ("size", "XL")]),
            &expected,
        );
        assert!(same.succeeded);

        let reordered = Outcome::compared(
            Slug::from("builder"),
            Observed::pairs([("size", "XL"), ("type", "shirt")]),
            &expected,
        );
        assert!(!reordered.succeeded, "pair order is part of the structure");
        assert_eq!(reordered.status(), "FAIL");
    }

    #[test]
    fn observed_serializes_with_kind_tag() {
        let value = serde_json::to_value(Observed::Number(1)).unwrap();
        assert_eq!(value, json!({"kind": "number", "value": 1}));

        let value = serde_json::to_value(Observed::pairs([("a", "b")])).unwrap();
        assert_eq!(value, json!({"kind": "pairs", "value": [["a", "b"]]}));
    }

    #[test]
    fn pairs_display_one_per_line() {
        let observed = Observed::pairs([("cd", "$13.64"), ("cereal", "$108.00")]);
        assert_eq!(observed.to_string(), "cd=$13.64\ncereal=$108.00");
    }

    #[test]
    fn report_replaces_outcome_for_same_slug() {
        let mut report = RunReport::new();
        let expected = Observed::Number(1);
        report.record(Outcome::compared(
            Slug::from("singleton"),
            Observed::Number(2),
            &expected,
        ));
        report.record(Outcome::compared(
            Slug::from("singleton"),
            Observed::Number(1),
            &expected,
        ));
        assert_eq!(report.total(), 1);
        assert!(report.overall_succeeded());
        assert_eq!(report.summary_line(), "1/1 passed");
    }

    #[test]
    fn empty_report_is_vacuously_successful() {
        let report = RunReport::new();
        assert!(report.overall_succeeded());
        assert_eq!(report.summary_line(), "0/0 passed");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value.get("total").and_then(|v| v.as_u64()), Some(0));
    }
}
