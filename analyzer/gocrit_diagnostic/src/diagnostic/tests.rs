use gocrit_ir::Span;
use pretty_assertions::assert_eq;

use super::*;

const SOURCE: &str = "var f = func(x int) int { return fn(x) }\n";

fn literal_span() -> Span {
    Span::new(8, 40)
}

#[test]
fn test_builder_collects_parts() {
    let diag = Diagnostic::warning("unlambda")
        .with_message("replace `func(x int) int { return fn(x) }` with `fn`")
        .with_related(Span::new(33, 35), "callee")
        .with_label(literal_span(), "")
        .with_note("fn has the same signature")
        .with_fix("replace with `fn`", literal_span(), "fn");

    assert_eq!(diag.checker, "unlambda");
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.primary_span(), Some(literal_span()));
    assert_eq!(diag.related, vec![Label::new(Span::new(33, 35), "callee")]);
    assert_eq!(diag.notes, vec!["fn has the same signature".to_string()]);
    assert_eq!(
        diag.suggestions,
        vec![Suggestion {
            message: "replace with `fn`".into(),
            substitutions: vec![Substitution::new(literal_span(), "fn")],
            applicability: Applicability::MachineApplicable,
        }]
    );
}

#[test]
fn test_later_label_replaces_location() {
    let diag = Diagnostic::error("x")
        .with_label(Span::new(0, 3), "first")
        .with_label(Span::new(4, 5), "second");
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(Diagnostic::error("x").primary_span(), None);
}

#[test]
fn test_apply_single_edit() {
    let fix = Suggestion::new("replace", literal_span(), "fn", Applicability::MachineApplicable);
    assert_eq!(fix.apply(SOURCE).as_deref(), Some("var f = fn\n"));
}

#[test]
fn test_apply_edits_in_any_order() {
    let fix = Suggestion {
        message: "rename".into(),
        substitutions: vec![
            Substitution::new(Span::new(33, 35), "g"),
            Substitution::new(Span::new(4, 5), "h"),
        ],
        applicability: Applicability::MaybeIncorrect,
    };
    assert_eq!(
        fix.apply(SOURCE).as_deref(),
        Some("var h = func(x int) int { return g(x) }\n")
    );
    assert!(!fix.applicability.is_machine_applicable());
}

#[test]
fn test_apply_rejects_bad_edits() {
    let overlapping = Suggestion {
        message: String::new(),
        substitutions: vec![
            Substitution::new(Span::new(8, 20), "a"),
            Substitution::new(Span::new(15, 25), "b"),
        ],
        applicability: Applicability::Unspecified,
    };
    let outside = Suggestion::new("", Span::new(40, 90), "x", Applicability::Unspecified);

    assert_eq!(overlapping.apply(SOURCE), None);
    assert_eq!(outside.apply(SOURCE), None);
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.as_str(), "warning");
    assert_eq!(Severity::Note.to_string(), "note");
}
