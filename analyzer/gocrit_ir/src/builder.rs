//! Ergonomic construction of trees.
//!
//! Host adapters that lower another syntax tree, and tests that need a
//! handful of nodes, both go through `AstBuilder`. Leaf nodes receive
//! consecutive synthetic spans; composite nodes cover their children.

use crate::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, Field, LitKind, Name, Span, Stmt, StmtId,
    StmtKind, StmtRange, StringInterner, UnaryOp,
};

/// Builder that appends nodes to an [`ExprArena`].
pub struct AstBuilder<'a> {
    arena: &'a mut ExprArena,
    interner: &'a StringInterner,
    cursor: u32,
}

impl<'a> AstBuilder<'a> {
    /// Create a builder whose first leaf starts at offset 0.
    pub fn new(arena: &'a mut ExprArena, interner: &'a StringInterner) -> Self {
        AstBuilder {
            arena,
            interner,
            cursor: 0,
        }
    }

    /// Start assigning synthetic spans from `offset`.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.cursor = offset;
        self
    }

    /// Read access to the arena being built.
    pub fn arena(&self) -> &ExprArena {
        self.arena
    }

    /// Intern a name.
    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    fn leaf(&mut self, width: usize) -> Span {
        let width = u32::try_from(width).unwrap_or(u32::MAX).max(1);
        let start = self.cursor;
        let end = start.saturating_add(width);
        self.cursor = end.saturating_add(1);
        Span::new(start, end)
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    fn cover(&mut self, spans: impl IntoIterator<Item = Span>) -> Span {
        Span::cover(spans).unwrap_or_else(|| self.leaf(1))
    }

    fn expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    // === Leaves ===

    /// Identifier expression.
    pub fn ident(&mut self, text: &str) -> ExprId {
        let name = self.name(text);
        let span = self.leaf(text.len());
        self.expr(ExprKind::Ident(name), span)
    }

    /// Basic literal with its source text.
    pub fn lit(&mut self, kind: LitKind, text: &str) -> ExprId {
        let value = self.name(text);
        let span = self.leaf(text.len());
        self.expr(ExprKind::BasicLit { kind, value }, span)
    }

    /// Integer literal.
    pub fn int_lit(&mut self, text: &str) -> ExprId {
        self.lit(LitKind::Int, text)
    }

    // === Composite expressions ===

    /// Selector `base.sel`.
    pub fn selector(&mut self, base: ExprId, sel: &str) -> ExprId {
        let sel_name = self.name(sel);
        let sel_span = self.leaf(sel.len());
        let span = self.span_of(base).merge(sel_span);
        self.expr(ExprKind::Selector { base, sel: sel_name }, span)
    }

    /// Call `func(args...)` passing every argument as a distinct value.
    pub fn call(&mut self, func: ExprId, args: &[ExprId]) -> ExprId {
        self.call_with(func, args, false)
    }

    /// Call `func(args..., last...)` forwarding the last argument in spread form.
    pub fn call_spread(&mut self, func: ExprId, args: &[ExprId]) -> ExprId {
        self.call_with(func, args, true)
    }

    fn call_with(&mut self, func: ExprId, args: &[ExprId], spread: bool) -> ExprId {
        let close = self.leaf(1);
        let span = self.span_of(func).merge(close);
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.expr(ExprKind::Call { func, args, spread }, span)
    }

    /// Parenthesized expression.
    pub fn paren(&mut self, inner: ExprId) -> ExprId {
        let close = self.leaf(1);
        let span = self.span_of(inner).merge(close);
        self.expr(ExprKind::Paren(inner), span)
    }

    /// Index expression `base[index]`.
    pub fn index(&mut self, base: ExprId, index: ExprId) -> ExprId {
        let span = self.span_of(base).merge(self.span_of(index));
        self.expr(ExprKind::Index { base, index }, span)
    }

    /// Type assertion `base.(ty)`.
    pub fn type_assert(&mut self, base: ExprId, ty: ExprId) -> ExprId {
        let span = self.span_of(base).merge(self.span_of(ty));
        self.expr(ExprKind::TypeAssert { base, ty }, span)
    }

    /// Composite literal `ty{elts...}`.
    pub fn composite(&mut self, ty: ExprId, elts: &[ExprId]) -> ExprId {
        let close = self.leaf(1);
        let span = self.span_of(ty).merge(close);
        let elts = self.arena.alloc_expr_list(elts.iter().copied());
        self.expr(ExprKind::CompositeLit { ty, elts }, span)
    }

    /// Star expression `*inner`.
    pub fn star(&mut self, inner: ExprId) -> ExprId {
        let span = self.span_of(inner);
        self.expr(ExprKind::Star(inner), span)
    }

    /// Unary expression.
    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        let span = self.span_of(operand);
        self.expr(ExprKind::Unary { op, operand }, span)
    }

    /// Binary expression.
    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.expr(ExprKind::Binary { op, left, right }, span)
    }

    // === Type expressions ===

    /// Variadic parameter type `...elem`.
    pub fn ellipsis(&mut self, elem: ExprId) -> ExprId {
        let span = self.span_of(elem);
        self.expr(ExprKind::Ellipsis(elem), span)
    }

    /// Slice type `[]elem`.
    pub fn slice_type(&mut self, elem: ExprId) -> ExprId {
        let span = self.span_of(elem);
        self.expr(
            ExprKind::ArrayType {
                len: ExprId::INVALID,
                elem,
            },
            span,
        )
    }

    /// Map type `map[key]value`.
    pub fn map_type(&mut self, key: ExprId, value: ExprId) -> ExprId {
        let span = self.span_of(key).merge(self.span_of(value));
        self.expr(ExprKind::MapType { key, value }, span)
    }

    /// Function type `func(params) results`.
    pub fn func_type(&mut self, params: Vec<Field>, results: Vec<Field>) -> ExprId {
        let span = self.cover(params.iter().chain(&results).map(|f| f.span));
        let params = self.arena.alloc_fields(params);
        let results = self.arena.alloc_fields(results);
        self.expr(ExprKind::FuncType { params, results }, span)
    }

    // === Parameter groups ===

    /// Named parameter group `a, b ty`.
    pub fn field(&mut self, names: &[&str], ty: ExprId) -> Field {
        let ids: Vec<ExprId> = names.iter().map(|n| self.ident(n)).collect();
        let name_spans: Vec<Span> = ids.iter().map(|&id| self.span_of(id)).collect();
        let span = self.cover(name_spans).merge(self.span_of(ty));
        let names = self.arena.alloc_expr_list(ids);
        Field::new(names, ty, span)
    }

    /// Unnamed parameter or result group.
    pub fn unnamed(&mut self, ty: ExprId) -> Field {
        let span = self.span_of(ty);
        let names = self.arena.alloc_expr_list(std::iter::empty());
        Field::new(names, ty, span)
    }

    // === Function literals and statements ===

    /// Function literal `func(params) results { body }`.
    pub fn func_lit(
        &mut self,
        params: Vec<Field>,
        results: Vec<Field>,
        body: &[StmtId],
    ) -> ExprId {
        let mut spans: Vec<Span> = params.iter().chain(&results).map(|f| f.span).collect();
        spans.extend(body.iter().map(|&s| self.arena.get_stmt(s).span));
        spans.push(self.leaf(1));
        let span = self.cover(spans);
        let params = self.arena.alloc_fields(params);
        let results = self.arena.alloc_fields(results);
        let body = self.arena.alloc_stmt_list(body.iter().copied());
        self.expr(
            ExprKind::FuncLit {
                params,
                results,
                body,
            },
            span,
        )
    }

    fn stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    /// `return results...`
    pub fn ret(&mut self, results: &[ExprId]) -> StmtId {
        let keyword = self.leaf("return".len());
        let span = results
            .iter()
            .map(|&r| self.span_of(r))
            .fold(keyword, Span::merge);
        let results = self.arena.alloc_expr_list(results.iter().copied());
        self.stmt(StmtKind::Return(results), span)
    }

    /// Expression statement.
    pub fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        let span = self.span_of(expr);
        self.stmt(StmtKind::Expr(expr), span)
    }

    /// Assignment (`define` selects `:=`).
    pub fn assign(&mut self, lhs: &[ExprId], rhs: &[ExprId], define: bool) -> StmtId {
        let spans: Vec<Span> = lhs.iter().chain(rhs).map(|&e| self.span_of(e)).collect();
        let span = self.cover(spans);
        let lhs = self.arena.alloc_expr_list(lhs.iter().copied());
        let rhs = self.arena.alloc_expr_list(rhs.iter().copied());
        self.stmt(StmtKind::Assign { lhs, rhs, define }, span)
    }

    /// Nested block.
    pub fn block(&mut self, stmts: &[StmtId]) -> StmtId {
        let spans: Vec<Span> = stmts.iter().map(|&s| self.arena.get_stmt(s).span).collect();
        let span = self.cover(spans);
        let range = self.stmts(stmts);
        self.stmt(StmtKind::Block(range), span)
    }

    /// Empty statement.
    pub fn empty(&mut self) -> StmtId {
        let span = self.leaf(1);
        self.stmt(StmtKind::Empty, span)
    }

    /// Store a statement list, e.g. the top-level statements of a unit.
    pub fn stmts(&mut self, stmts: &[StmtId]) -> StmtRange {
        self.arena.alloc_stmt_list(stmts.iter().copied())
    }
}
