//! Tree traversal.
//!
//! A single `Visitor` trait walks the flat tree in pre-order. Override a
//! `visit_*` method to observe a node kind and call the matching `walk_*`
//! function to continue into its children. The tree is never mutated; the
//! visitor may mutate only itself.
//!
//! # Example
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
//!         if matches!(arena.get_expr(id).kind, ExprKind::Call { .. }) {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, id, arena);
//!     }
//! }
//! ```

use crate::{ExprArena, ExprId, ExprKind, ExprRange, Field, FieldRange, StmtId, StmtKind, StmtRange};

/// Pre-order tree visitor.
pub trait Visitor<'ast> {
    /// Visit an expression. Every expression reachable from the root is
    /// visited exactly once, including type expressions and the contents of
    /// function literal bodies.
    fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
        walk_expr(self, id, arena);
    }

    /// Visit a statement.
    fn visit_stmt(&mut self, id: StmtId, arena: &'ast ExprArena) {
        walk_stmt(self, id, arena);
    }

    /// Visit a parameter or result group.
    fn visit_field(&mut self, field: &'ast Field, arena: &'ast ExprArena) {
        walk_field(self, field, arena);
    }
}

/// Visit every statement of a list in order.
pub fn walk_stmts<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    range: StmtRange,
    arena: &'ast ExprArena,
) {
    for &stmt in arena.get_stmt_list(range) {
        visitor.visit_stmt(stmt, arena);
    }
}

fn walk_exprs<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    range: ExprRange,
    arena: &'ast ExprArena,
) {
    for &expr in arena.get_expr_list(range) {
        visitor.visit_expr(expr, arena);
    }
}

fn walk_fields<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    range: FieldRange,
    arena: &'ast ExprArena,
) {
    for field in arena.get_fields(range) {
        visitor.visit_field(field, arena);
    }
}

/// Visit the children of an expression.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    arena: &'ast ExprArena,
) {
    let Some(expr) = arena.try_get_expr(id) else {
        return;
    };

    match expr.kind {
        ExprKind::Ident(_) | ExprKind::BasicLit { .. } => {}
        ExprKind::FuncLit {
            params,
            results,
            body,
        } => {
            walk_fields(visitor, params, arena);
            walk_fields(visitor, results, arena);
            walk_stmts(visitor, body, arena);
        }
        ExprKind::CompositeLit { ty, elts } => {
            visitor.visit_expr(ty, arena);
            walk_exprs(visitor, elts, arena);
        }
        ExprKind::Paren(inner) | ExprKind::Star(inner) | ExprKind::Ellipsis(inner) => {
            visitor.visit_expr(inner, arena);
        }
        ExprKind::Selector { base, .. } => visitor.visit_expr(base, arena),
        ExprKind::Index { base, index } => {
            visitor.visit_expr(base, arena);
            visitor.visit_expr(index, arena);
        }
        ExprKind::TypeAssert { base, ty } => {
            visitor.visit_expr(base, arena);
            visitor.visit_expr(ty, arena);
        }
        ExprKind::Call { func, args, .. } => {
            visitor.visit_expr(func, arena);
            walk_exprs(visitor, args, arena);
        }
        ExprKind::Unary { operand, .. } => visitor.visit_expr(operand, arena),
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(left, arena);
            visitor.visit_expr(right, arena);
        }
        ExprKind::ArrayType { len, elem } => {
            if len.is_valid() {
                visitor.visit_expr(len, arena);
            }
            visitor.visit_expr(elem, arena);
        }
        ExprKind::MapType { key, value } => {
            visitor.visit_expr(key, arena);
            visitor.visit_expr(value, arena);
        }
        ExprKind::FuncType { params, results } => {
            walk_fields(visitor, params, arena);
            walk_fields(visitor, results, arena);
        }
    }
}

/// Visit the children of a statement.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: StmtId,
    arena: &'ast ExprArena,
) {
    match arena.get_stmt(id).kind {
        StmtKind::Expr(expr) => visitor.visit_expr(expr, arena),
        StmtKind::Return(results) => walk_exprs(visitor, results, arena),
        StmtKind::Assign { lhs, rhs, .. } => {
            walk_exprs(visitor, lhs, arena);
            walk_exprs(visitor, rhs, arena);
        }
        StmtKind::Block(stmts) => walk_stmts(visitor, stmts, arena),
        StmtKind::Empty => {}
    }
}

/// Visit the names and type of a parameter group.
pub fn walk_field<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    field: &'ast Field,
    arena: &'ast ExprArena,
) {
    walk_exprs(visitor, field.names, arena);
    visitor.visit_expr(field.ty, arena);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstBuilder, StringInterner};

    struct Collect(Vec<&'static str>);

    impl<'ast> Visitor<'ast> for Collect {
        fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
            self.0.push(arena.get_expr(id).kind.describe());
            walk_expr(self, id, arena);
        }
    }

    #[test]
    fn test_walk_reaches_nested_literals_in_preorder() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let mut b = AstBuilder::new(&mut arena, &interner);

        // go(func() { f(func(x int) {}) })
        let int = b.ident("int");
        let param = b.field(&["x"], int);
        let inner = b.func_lit(vec![param], vec![], &[]);
        let f = b.ident("f");
        let call = b.call(f, &[inner]);
        let stmt = b.expr_stmt(call);
        let outer = b.func_lit(vec![], vec![], &[stmt]);
        let root = b.expr_stmt(outer);
        let roots = b.stmts(&[root]);

        let mut collect = Collect(Vec::new());
        walk_stmts(&mut collect, roots, &arena);

        assert_eq!(
            collect.0,
            vec![
                "function literal",
                "call",
                "identifier",
                "function literal",
                "identifier",
                "identifier",
            ]
        );
    }

    #[test]
    fn test_walk_skips_absent_array_length() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let mut b = AstBuilder::new(&mut arena, &interner);

        let int = b.ident("int");
        let slice = b.slice_type(int);

        let mut collect = Collect(Vec::new());
        collect.visit_expr(slice, &arena);

        assert_eq!(collect.0, vec!["array type", "identifier"]);
    }
}
