//! Arena storage for the flat tree.
//!
//! One arena per source unit. Nodes are appended during lowering and never
//! mutated afterwards, so checkers only ever need `&ExprArena`.

use crate::{
    Expr, ExprId, ExprRange, Field, FieldRange, Stmt, StmtId, StmtRange,
};

/// Convert an arena length into a 32-bit start index.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} arena exceeded u32::MAX entries"))
}

/// Convert a list length into a 16-bit range length.
#[inline]
fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} list exceeded u16::MAX entries"))
}

/// Contiguous storage for every node of one source unit.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
    fields: Vec<Field>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // === Expressions ===

    /// Append an expression, returning its ID.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(expr);
        id
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` was not allocated in this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get an expression by ID, returning `None` for sentinels and foreign IDs.
    #[inline]
    pub fn try_get_expr(&self, id: ExprId) -> Option<&Expr> {
        if id.is_valid() {
            self.exprs.get(id.index())
        } else {
            None
        }
    }

    /// Number of allocated expressions.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Iterate over every expression ID in allocation order.
    pub fn expr_ids(&self) -> impl Iterator<Item = ExprId> + '_ {
        (0..self.exprs.len()).map(|i| ExprId::new(to_u32(i, "expression")))
    }

    /// Store a list of expression IDs contiguously.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(ids);
        let len = self.expr_lists.len() - start;
        ExprRange::new(to_u32(start, "expression list"), to_u16(len, "expression"))
    }

    /// Get the expression IDs of a list.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.indices()]
    }

    // === Statements ===

    /// Append a statement, returning its ID.
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statement"));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Store a list of statement IDs contiguously.
    pub fn alloc_stmt_list(&mut self, ids: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = self.stmt_lists.len();
        self.stmt_lists.extend(ids);
        let len = self.stmt_lists.len() - start;
        StmtRange::new(to_u32(start, "statement list"), to_u16(len, "statement"))
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.indices()]
    }

    // === Parameter groups ===

    /// Store parameter or result groups contiguously.
    pub fn alloc_fields(&mut self, fields: impl IntoIterator<Item = Field>) -> FieldRange {
        let start = self.fields.len();
        self.fields.extend(fields);
        let len = self.fields.len() - start;
        FieldRange::new(to_u32(start, "field"), to_u16(len, "field"))
    }

    #[inline]
    pub fn get_fields(&self, range: FieldRange) -> &[Field] {
        &self.fields[range.indices()]
    }
}

#[cfg(test)]
mod tests;
