//! Example catalog wiring.
//!
//! Types here describe what an example is and how the catalog stores it.
//! Callers use `Registry` for ordered, slug-keyed lookups and `Example` when
//! they need the expectation or the action itself.

pub mod identity;
pub mod model;
pub mod repository;

pub use identity::{PatternFamily, Slug};
pub use model::{Example, ExampleAction};
pub use repository::Registry;
