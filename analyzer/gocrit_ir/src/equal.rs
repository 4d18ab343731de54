//! Structural syntactic equality.
//!
//! Two expressions are equal when they have the same shape and the same
//! identifiers, operators and literal text, regardless of where they appear
//! in the source. Spans are ignored. Grouping is not: `(x)` and `x` are
//! different expressions.

use crate::{ExprArena, ExprId, ExprKind, ExprRange, FieldRange, StmtId, StmtKind, StmtRange};

/// Compare two expressions of the same arena structurally.
pub fn exprs_equal(arena: &ExprArena, a: ExprId, b: ExprId) -> bool {
    SyntaxEq { arena }.expr(a, b)
}

struct SyntaxEq<'a> {
    arena: &'a ExprArena,
}

impl SyntaxEq<'_> {
    fn expr(&self, a: ExprId, b: ExprId) -> bool {
        if a == b {
            return true;
        }
        let (Some(a), Some(b)) = (self.arena.try_get_expr(a), self.arena.try_get_expr(b)) else {
            return false;
        };

        match (a.kind, b.kind) {
            (ExprKind::Ident(x), ExprKind::Ident(y)) => x == y,
            (
                ExprKind::BasicLit { kind: k1, value: v1 },
                ExprKind::BasicLit { kind: k2, value: v2 },
            ) => k1 == k2 && v1 == v2,
            (
                ExprKind::FuncLit {
                    params: p1,
                    results: r1,
                    body: b1,
                },
                ExprKind::FuncLit {
                    params: p2,
                    results: r2,
                    body: b2,
                },
            ) => self.fields(p1, p2) && self.fields(r1, r2) && self.stmts(b1, b2),
            (
                ExprKind::CompositeLit { ty: t1, elts: e1 },
                ExprKind::CompositeLit { ty: t2, elts: e2 },
            ) => self.expr(t1, t2) && self.exprs(e1, e2),
            (ExprKind::Paren(x), ExprKind::Paren(y))
            | (ExprKind::Star(x), ExprKind::Star(y))
            | (ExprKind::Ellipsis(x), ExprKind::Ellipsis(y)) => self.expr(x, y),
            (
                ExprKind::Selector { base: x, sel: s1 },
                ExprKind::Selector { base: y, sel: s2 },
            ) => s1 == s2 && self.expr(x, y),
            (
                ExprKind::Index { base: x1, index: i1 },
                ExprKind::Index { base: x2, index: i2 },
            ) => self.expr(x1, x2) && self.expr(i1, i2),
            (
                ExprKind::TypeAssert { base: x1, ty: t1 },
                ExprKind::TypeAssert { base: x2, ty: t2 },
            ) => self.expr(x1, x2) && self.expr(t1, t2),
            (
                ExprKind::Call {
                    func: f1,
                    args: a1,
                    spread: s1,
                },
                ExprKind::Call {
                    func: f2,
                    args: a2,
                    spread: s2,
                },
            ) => s1 == s2 && self.expr(f1, f2) && self.exprs(a1, a2),
            (
                ExprKind::Unary {
                    op: o1,
                    operand: x1,
                },
                ExprKind::Unary {
                    op: o2,
                    operand: x2,
                },
            ) => o1 == o2 && self.expr(x1, x2),
            (
                ExprKind::Binary {
                    op: o1,
                    left: l1,
                    right: r1,
                },
                ExprKind::Binary {
                    op: o2,
                    left: l2,
                    right: r2,
                },
            ) => o1 == o2 && self.expr(l1, l2) && self.expr(r1, r2),
            (
                ExprKind::ArrayType { len: n1, elem: e1 },
                ExprKind::ArrayType { len: n2, elem: e2 },
            ) => self.optional(n1, n2) && self.expr(e1, e2),
            (
                ExprKind::MapType { key: k1, value: v1 },
                ExprKind::MapType { key: k2, value: v2 },
            ) => self.expr(k1, k2) && self.expr(v1, v2),
            (
                ExprKind::FuncType {
                    params: p1,
                    results: r1,
                },
                ExprKind::FuncType {
                    params: p2,
                    results: r2,
                },
            ) => self.fields(p1, p2) && self.fields(r1, r2),
            _ => false,
        }
    }

    /// Optional children: both absent, or both present and equal.
    fn optional(&self, a: ExprId, b: ExprId) -> bool {
        match (a.is_valid(), b.is_valid()) {
            (false, false) => true,
            (true, true) => self.expr(a, b),
            _ => false,
        }
    }

    fn exprs(&self, a: ExprRange, b: ExprRange) -> bool {
        let (a, b) = (self.arena.get_expr_list(a), self.arena.get_expr_list(b));
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.expr(x, y))
    }

    fn fields(&self, a: FieldRange, b: FieldRange) -> bool {
        let (a, b) = (self.arena.get_fields(a), self.arena.get_fields(b));
        a.len() == b.len()
            && a
                .iter()
                .zip(b)
                .all(|(x, y)| self.exprs(x.names, y.names) && self.expr(x.ty, y.ty))
    }

    fn stmts(&self, a: StmtRange, b: StmtRange) -> bool {
        let (a, b) = (self.arena.get_stmt_list(a), self.arena.get_stmt_list(b));
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.stmt(x, y))
    }

    fn stmt(&self, a: StmtId, b: StmtId) -> bool {
        match (self.arena.get_stmt(a).kind, self.arena.get_stmt(b).kind) {
            (StmtKind::Expr(x), StmtKind::Expr(y)) => self.expr(x, y),
            (StmtKind::Return(x), StmtKind::Return(y)) => self.exprs(x, y),
            (
                StmtKind::Assign {
                    lhs: l1,
                    rhs: r1,
                    define: d1,
                },
                StmtKind::Assign {
                    lhs: l2,
                    rhs: r2,
                    define: d2,
                },
            ) => d1 == d2 && self.exprs(l1, l2) && self.exprs(r1, r2),
            (StmtKind::Block(x), StmtKind::Block(y)) => self.stmts(x, y),
            (StmtKind::Empty, StmtKind::Empty) => true,
            _ => false,
        }
    }
}
