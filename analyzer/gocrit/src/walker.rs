//! Runs checkers over every expression of a unit.

use gocrit_checkers::{CheckContext, ExprChecker};
use gocrit_diagnostic::DiagnosticSink;
use gocrit_ir::visitor::{walk_expr, walk_stmts, Visitor};
use gocrit_ir::{ExprArena, ExprId, StmtRange};

struct CheckWalker<'a, 's, S: ?Sized> {
    cx: CheckContext<'a>,
    checkers: &'s [&'static dyn ExprChecker],
    sink: &'s mut S,
    visited: usize,
}

impl<'a, S: DiagnosticSink + ?Sized> Visitor<'a> for CheckWalker<'a, '_, S> {
    fn visit_expr(&mut self, id: ExprId, arena: &'a ExprArena) {
        self.visited += 1;
        for checker in self.checkers {
            if let Some(diagnostic) = checker.check_expr(&self.cx, id) {
                self.sink.report(diagnostic);
            }
        }
        // Nested literals are candidates in their own right.
        walk_expr(self, id, arena);
    }
}

/// Offer every expression reachable from `roots` to each checker and report
/// what they find. Returns the number of expressions visited.
pub fn walk_unit<S: DiagnosticSink + ?Sized>(
    cx: CheckContext<'_>,
    roots: StmtRange,
    checkers: &[&'static dyn ExprChecker],
    sink: &mut S,
) -> usize {
    let mut walker = CheckWalker {
        cx,
        checkers,
        sink,
        visited: 0,
    };
    walk_stmts(&mut walker, roots, cx.arena);
    walker.visited
}
