//! Parameter and result groups.

use crate::{Expr, ExprArena, ExprId, ExprKind, ExprRange, Span};

/// One group of a parameter or result list.
///
/// `func(a, b int, rest ...string)` has two groups: names `[a, b]` with type
/// `int`, and names `[rest]` with type `...string`. Names are identifier
/// expressions so they can be compared against argument expressions
/// directly. Unnamed groups (`func(int)`) have an empty name range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub names: ExprRange,
    pub ty: ExprId,
    pub span: Span,
}

impl Field {
    pub fn new(names: ExprRange, ty: ExprId, span: Span) -> Self {
        Field { names, ty, span }
    }

    /// Whether this is the trailing variadic group (`...T`). A type that is
    /// missing from the arena is not variadic.
    pub fn is_variadic(&self, arena: &ExprArena) -> bool {
        matches!(
            arena.try_get_expr(self.ty),
            Some(Expr {
                kind: ExprKind::Ellipsis(_),
                ..
            })
        )
    }
}
