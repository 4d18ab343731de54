//! Findings and the edits that fix them.

use std::fmt;

use gocrit_ir::Span;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a fix can be applied without a human looking at it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Applicability {
    /// The edited program behaves exactly like the original.
    MachineApplicable,
    /// The edit is usually right but can change evaluation order or
    /// aliasing, e.g. a method value binds its receiver early.
    MaybeIncorrect,
    #[default]
    Unspecified,
}

impl Applicability {
    pub fn is_machine_applicable(self) -> bool {
        self == Applicability::MachineApplicable
    }
}

/// One text edit: the bytes under `span` become `snippet`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Substitution {
    pub span: Span,
    pub snippet: String,
}

impl Substitution {
    pub fn new(span: Span, snippet: impl Into<String>) -> Self {
        Substitution {
            span,
            snippet: snippet.into(),
        }
    }
}

/// A described fix made of non-overlapping edits.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    pub message: String,
    pub substitutions: Vec<Substitution>,
    pub applicability: Applicability,
}

impl Suggestion {
    /// A fix with a single edit.
    pub fn new(
        message: impl Into<String>,
        span: Span,
        snippet: impl Into<String>,
        applicability: Applicability,
    ) -> Self {
        Suggestion {
            message: message.into(),
            substitutions: vec![Substitution::new(span, snippet)],
            applicability,
        }
    }

    /// Rewrite `source` with every edit applied.
    ///
    /// Returns `None` when an edit lies outside `source`, splits a UTF-8
    /// sequence, or overlaps another edit.
    pub fn apply(&self, source: &str) -> Option<String> {
        let mut edits: Vec<&Substitution> = self.substitutions.iter().collect();
        edits.sort_by_key(|edit| edit.span);

        let mut fixed = String::with_capacity(source.len());
        let mut cursor = 0;
        for edit in edits {
            let (start, end) = (edit.span.start as usize, edit.span.end as usize);
            if start < cursor {
                return None;
            }
            source.get(start..end)?;
            fixed.push_str(source.get(cursor..start)?);
            fixed.push_str(&edit.snippet);
            cursor = end;
        }
        fixed.push_str(source.get(cursor..)?);
        Some(fixed)
    }
}

/// A span with an explanation attached.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

/// One finding of one checker.
///
/// `primary` is where the finding is reported; `related` points at other
/// code that explains it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Name of the checker that produced the finding.
    pub checker: &'static str,
    pub severity: Severity,
    pub message: String,
    pub primary: Option<Label>,
    pub related: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    fn with_severity(checker: &'static str, severity: Severity) -> Self {
        Diagnostic {
            checker,
            severity,
            message: String::new(),
            primary: None,
            related: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(checker: &'static str) -> Self {
        Self::with_severity(checker, Severity::Error)
    }

    pub fn warning(checker: &'static str) -> Self {
        Self::with_severity(checker, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the reported location. A later call replaces an earlier one.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.primary = Some(Label::new(span, message));
        self
    }

    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(Label::new(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Shorthand for a machine-applicable single-edit suggestion.
    pub fn with_fix(
        self,
        message: impl Into<String>,
        span: Span,
        snippet: impl Into<String>,
    ) -> Self {
        self.with_suggestion(Suggestion::new(
            message,
            span,
            snippet,
            Applicability::MachineApplicable,
        ))
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.primary.as_ref().map(|label| label.span)
    }
}

#[cfg(test)]
mod tests;
