//! Canonical one-line Go rendering of expressions.
//!
//! Used to quote source constructs in diagnostic messages. Output follows
//! `gofmt` spacing, with function literal bodies collapsed onto one line:
//! `func(x int) int { return fn(x) }`.

use crate::{ExprArena, ExprId, ExprKind, FieldRange, StmtId, StmtKind, StmtRange, StringInterner};

/// Renders nodes of one arena.
pub struct ExprPrinter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl<'a> ExprPrinter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        ExprPrinter { arena, interner }
    }

    /// Render an expression.
    pub fn expr(&self, id: ExprId) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, id);
        out
    }

    /// Render a statement.
    pub fn stmt(&self, id: StmtId) -> String {
        let mut out = String::new();
        self.write_stmt(&mut out, id);
        out
    }

    fn write_expr(&self, out: &mut String, id: ExprId) {
        let Some(expr) = self.arena.try_get_expr(id) else {
            out.push_str("<invalid>");
            return;
        };

        match expr.kind {
            ExprKind::Ident(name) | ExprKind::BasicLit { value: name, .. } => {
                out.push_str(self.interner.lookup(name));
            }
            ExprKind::FuncLit {
                params,
                results,
                body,
            } => {
                self.write_signature(out, params, results);
                out.push(' ');
                self.write_block(out, body);
            }
            ExprKind::CompositeLit { ty, elts } => {
                self.write_expr(out, ty);
                out.push('{');
                self.write_list(out, elts);
                out.push('}');
            }
            ExprKind::Paren(inner) => {
                out.push('(');
                self.write_expr(out, inner);
                out.push(')');
            }
            ExprKind::Selector { base, sel } => {
                self.write_expr(out, base);
                out.push('.');
                out.push_str(self.interner.lookup(sel));
            }
            ExprKind::Index { base, index } => {
                self.write_expr(out, base);
                out.push('[');
                self.write_expr(out, index);
                out.push(']');
            }
            ExprKind::TypeAssert { base, ty } => {
                self.write_expr(out, base);
                out.push_str(".(");
                self.write_expr(out, ty);
                out.push(')');
            }
            ExprKind::Call { func, args, spread } => {
                self.write_expr(out, func);
                out.push('(');
                self.write_list(out, args);
                if spread {
                    out.push_str("...");
                }
                out.push(')');
            }
            ExprKind::Star(inner) => {
                out.push('*');
                self.write_expr(out, inner);
            }
            ExprKind::Unary { op, operand } => {
                out.push_str(op.as_symbol());
                self.write_expr(out, operand);
            }
            ExprKind::Binary { op, left, right } => {
                self.write_expr(out, left);
                out.push(' ');
                out.push_str(op.as_symbol());
                out.push(' ');
                self.write_expr(out, right);
            }
            ExprKind::Ellipsis(elem) => {
                out.push_str("...");
                self.write_expr(out, elem);
            }
            ExprKind::ArrayType { len, elem } => {
                out.push('[');
                if len.is_valid() {
                    self.write_expr(out, len);
                }
                out.push(']');
                self.write_expr(out, elem);
            }
            ExprKind::MapType { key, value } => {
                out.push_str("map[");
                self.write_expr(out, key);
                out.push(']');
                self.write_expr(out, value);
            }
            ExprKind::FuncType { params, results } => {
                self.write_signature(out, params, results);
            }
        }
    }

    fn write_list(&self, out: &mut String, range: crate::ExprRange) {
        for (i, &id) in self.arena.get_expr_list(range).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_expr(out, id);
        }
    }

    fn write_signature(&self, out: &mut String, params: FieldRange, results: FieldRange) {
        out.push_str("func(");
        self.write_fields(out, params);
        out.push(')');

        let results_list = self.arena.get_fields(results);
        match results_list {
            [] => {}
            [single] if single.names.is_empty() => {
                out.push(' ');
                self.write_expr(out, single.ty);
            }
            _ => {
                out.push_str(" (");
                self.write_fields(out, results);
                out.push(')');
            }
        }
    }

    fn write_fields(&self, out: &mut String, range: FieldRange) {
        for (i, field) in self.arena.get_fields(range).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if !field.names.is_empty() {
                self.write_list(out, field.names);
                out.push(' ');
            }
            self.write_expr(out, field.ty);
        }
    }

    fn write_block(&self, out: &mut String, body: StmtRange) {
        let stmts = self.arena.get_stmt_list(body);
        if stmts.is_empty() {
            out.push_str("{}");
            return;
        }
        out.push_str("{ ");
        for (i, &stmt) in stmts.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            self.write_stmt(out, stmt);
        }
        out.push_str(" }");
    }

    fn write_stmt(&self, out: &mut String, id: StmtId) {
        match self.arena.get_stmt(id).kind {
            StmtKind::Expr(expr) => self.write_expr(out, expr),
            StmtKind::Return(results) => {
                out.push_str("return");
                if !results.is_empty() {
                    out.push(' ');
                    self.write_list(out, results);
                }
            }
            StmtKind::Assign { lhs, rhs, define } => {
                self.write_list(out, lhs);
                out.push_str(if define { " := " } else { " = " });
                self.write_list(out, rhs);
            }
            StmtKind::Block(stmts) => self.write_block(out, stmts),
            StmtKind::Empty => {}
        }
    }
}
