//! Diagnostics produced by gocrit checkers.
//!
//! A checker builds a [`Diagnostic`] naming itself, the offending span and
//! an optional replacement, then hands it to a [`DiagnosticSink`]. Locating,
//! ordering and rendering are done here, never by the checker.

mod diagnostic;
pub mod emitter;
pub mod queue;
mod sink;
pub mod span_utils;

pub use diagnostic::{Applicability, Diagnostic, Label, Severity, Substitution, Suggestion};
pub use emitter::{ColorMode, SourceFile, TerminalEmitter};
pub use queue::{DiagnosticQueue, QueueConfig};
pub use sink::DiagnosticSink;
