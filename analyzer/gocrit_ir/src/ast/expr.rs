//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, ExprRange, FieldRange, Name, Span, StmtRange};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Kind of a basic literal token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// Expression variants.
///
/// All children are indices, not boxes. Type expressions share this enum
/// because Go's grammar lets types appear wherever expressions do
/// (conversions, composite literals, `make`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Identifier: `x`, `int`, `fmt`
    Ident(Name),

    /// Basic literal; `value` is the literal's source text.
    BasicLit { kind: LitKind, value: Name },

    /// Function literal: `func(x int) int { return x }`
    FuncLit {
        params: FieldRange,
        results: FieldRange,
        body: StmtRange,
    },

    /// Composite literal: `T{a, b}`
    CompositeLit { ty: ExprId, elts: ExprRange },

    /// Parenthesized expression: `(x)`
    Paren(ExprId),

    /// Selector: `x.sel`
    Selector { base: ExprId, sel: Name },

    /// Index or generic instantiation: `a[i]`
    Index { base: ExprId, index: ExprId },

    /// Type assertion: `x.(T)`
    TypeAssert { base: ExprId, ty: ExprId },

    /// Call or conversion: `f(a, b)`; `spread` is set for `f(a, rest...)`.
    Call {
        func: ExprId,
        args: ExprRange,
        spread: bool,
    },

    /// Dereference or pointer type: `*x`
    Star(ExprId),

    /// Unary expression: `-x`, `!x`, `&x`, `<-ch`
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary expression: `x + y`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Variadic parameter type: `...T`
    Ellipsis(ExprId),

    /// Array or slice type: `[N]T`, `[]T` (`len` is `ExprId::INVALID` for slices)
    ArrayType { len: ExprId, elem: ExprId },

    /// Map type: `map[K]V`
    MapType { key: ExprId, value: ExprId },

    /// Function type: `func(int) error`
    FuncType {
        params: FieldRange,
        results: FieldRange,
    },
}

impl ExprKind {
    /// Short, stable description of the node kind for logging.
    pub fn describe(&self) -> &'static str {
        match self {
            ExprKind::Ident(_) => "identifier",
            ExprKind::BasicLit { .. } => "literal",
            ExprKind::FuncLit { .. } => "function literal",
            ExprKind::CompositeLit { .. } => "composite literal",
            ExprKind::Paren(_) => "parenthesized expression",
            ExprKind::Selector { .. } => "selector",
            ExprKind::Index { .. } => "index expression",
            ExprKind::TypeAssert { .. } => "type assertion",
            ExprKind::Call { .. } => "call",
            ExprKind::Star(_) => "star expression",
            ExprKind::Unary { .. } => "unary expression",
            ExprKind::Binary { .. } => "binary expression",
            ExprKind::Ellipsis(_) => "ellipsis",
            ExprKind::ArrayType { .. } => "array type",
            ExprKind::MapType { .. } => "map type",
            ExprKind::FuncType { .. } => "function type",
        }
    }
}
