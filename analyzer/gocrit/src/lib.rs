//! gocrit driver.
//!
//! Ties the pieces together: a [`LintConfig`] selects checkers from the
//! registry, a [`Linter`] walks every expression of each [`SourceUnit`]
//! and feeds it to those checkers, and the collected diagnostics come back
//! in source order.
//!
//! Units are independent, so [`Linter::lint_units`] spreads them over a
//! scoped rayon pool. The result is the same as linting them one by one.

mod config;
mod linter;
mod logging;
mod unit;
mod walker;

pub use config::{ConfigError, LintConfig};
pub use linter::Linter;
pub use logging::init_tracing;
pub use unit::SourceUnit;
pub use walker::walk_unit;
