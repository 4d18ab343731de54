//! Statement nodes.

use crate::{ExprId, ExprRange, Span, StmtRange};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression statement: `f(x)`
    Expr(ExprId),

    /// Return statement: `return a, b`
    Return(ExprRange),

    /// Assignment `a = b` or short variable declaration `a := b`.
    Assign {
        lhs: ExprRange,
        rhs: ExprRange,
        define: bool,
    },

    /// Nested block: `{ ... }`
    Block(StmtRange),

    /// Empty statement.
    Empty,
}
