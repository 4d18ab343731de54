//! Collecting, deduplicating and ordering diagnostics.

use rustc_hash::FxHashSet;

use crate::Diagnostic;

/// Configuration for a [`DiagnosticQueue`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct QueueConfig {
    /// Maximum number of diagnostics kept (0 = unlimited).
    pub limit: usize,
    /// Drop diagnostics identical to one already queued.
    pub deduplicate: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            limit: 0,
            deduplicate: true,
        }
    }
}

impl QueueConfig {
    /// Keep everything, duplicates included.
    pub fn unfiltered() -> Self {
        QueueConfig {
            limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue that collects diagnostics and hands them back in source order.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<Diagnostic>,
    dropped: usize,
    config: QueueConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: QueueConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Queue a diagnostic. Returns `false` if it was filtered out.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            self.dropped += 1;
            return false;
        }
        if self.config.deduplicate && !self.seen.insert(diag.clone()) {
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    pub fn limit_reached(&self) -> bool {
        self.config.limit > 0 && self.diagnostics.len() >= self.config.limit
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics rejected because the limit was reached.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Take every queued diagnostic, ordered by primary span.
    ///
    /// Diagnostics without a primary span come first. Ties keep insertion
    /// order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.seen.clear();
        self.dropped = 0;
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| d.primary_span().map(|s| (s.start, s.end)));
        out
    }
}
