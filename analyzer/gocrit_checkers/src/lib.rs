//! gocrit checkers.
//!
//! A checker looks at one expression at a time and either reports a single
//! [`Diagnostic`](gocrit_diagnostic::Diagnostic) or stays silent. It never
//! walks the tree, mutates it, or keeps state between calls, so the driver
//! may call any checker from any thread.

mod checker;
#[cfg(any(test, feature = "test-support"))]
pub mod fixture;
mod qualified;
mod registry;
pub mod unlambda;

pub use checker::{CheckContext, CheckerInfo, ExprChecker, Tag};
pub use qualified::{qualified_name, NameForm, QualifiedName};
pub use registry::CheckerRegistry;
pub use unlambda::UnlambdaChecker;
