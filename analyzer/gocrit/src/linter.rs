//! Linting units with a resolved checker set.

use std::io::Write;

use gocrit_checkers::{CheckContext, CheckerRegistry, ExprChecker};
use gocrit_diagnostic::{Diagnostic, DiagnosticQueue, QueueConfig, TerminalEmitter};
use gocrit_ir::SharedInterner;
use rayon::prelude::*;

use crate::{walk_unit, ConfigError, LintConfig, SourceUnit};

/// Runs the configured checkers over source units.
///
/// The interner is shared by every unit the linter sees; units built for
/// this linter must intern their names in it.
pub struct Linter {
    config: LintConfig,
    checkers: Vec<&'static dyn ExprChecker>,
    interner: SharedInterner,
}

impl Linter {
    /// Resolve `config` against the built-in registry.
    pub fn new(config: LintConfig, interner: SharedInterner) -> Result<Self, ConfigError> {
        let checkers = config.resolve(&CheckerRegistry::new())?;
        Ok(Linter {
            config,
            checkers,
            interner,
        })
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Names of the checkers that will run, in registration order.
    pub fn checker_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checkers.iter().map(|c| c.info().name)
    }

    /// Lint one unit. Diagnostics are deduplicated, capped at the configured
    /// limit and sorted by position.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %unit.path))]
    pub fn lint_unit(&self, unit: &SourceUnit) -> Vec<Diagnostic> {
        let mut queue = DiagnosticQueue::with_config(QueueConfig {
            limit: self.config.diagnostic_limit,
            deduplicate: true,
        });
        let cx = CheckContext::new(&unit.arena, &self.interner, unit.types.as_ref());
        let visited = walk_unit(cx, unit.roots, &self.checkers, &mut queue);

        if queue.dropped() > 0 {
            tracing::debug!(dropped = queue.dropped(), "diagnostic limit reached");
        }
        let diagnostics = queue.flush();
        tracing::debug!(visited, reported = diagnostics.len(), "unit linted");
        diagnostics
    }

    /// Lint many units, one result per unit in input order.
    pub fn lint_units(&self, units: &[SourceUnit]) -> Vec<Vec<Diagnostic>> {
        if self.config.parallel && units.len() > 1 {
            self.lint_parallel(units)
        } else {
            units.iter().map(|unit| self.lint_unit(unit)).collect()
        }
    }

    /// Uses a scoped pool so no worker threads outlive the call.
    fn lint_parallel(&self, units: &[SourceUnit]) -> Vec<Vec<Diagnostic>> {
        rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    units
                        .par_iter()
                        .map(|unit| self.lint_unit(unit))
                        .collect::<Vec<_>>()
                })
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                units.iter().map(|unit| self.lint_unit(unit)).collect()
            })
    }

    /// Render one unit's diagnostics.
    pub fn emit<W: Write>(
        &self,
        emitter: &mut TerminalEmitter<W>,
        unit: &SourceUnit,
        diagnostics: &[Diagnostic],
    ) {
        emitter.emit_all(&unit.source_file(), diagnostics);
    }
}
