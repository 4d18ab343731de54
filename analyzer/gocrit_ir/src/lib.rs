//! gocrit IR - syntax tree types shared by every checker.
//!
//! This crate contains the data structures a checker reads:
//! - Spans for source locations
//! - Names for interned identifiers
//! - A flat, arena-allocated tree for the Go expressions, statements and
//!   parameter lists that checkers inspect
//! - Structural equality, printing and traversal over that tree
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`, compared in O(1)
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Read-only Views**: checkers borrow the arena immutably, so any number
//!   of them can inspect the same tree concurrently

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod builder;
mod equal;
mod expr_id;
mod interner;
mod name;
mod printer;
mod span;
pub mod visitor;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, Expr, ExprKind, Field, LitKind, Stmt, StmtKind, UnaryOp,
};
pub use builder::AstBuilder;
pub use equal::exprs_equal;
pub use expr_id::{ExprId, ExprRange, FieldRange, StmtId, StmtRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use printer::ExprPrinter;
pub use span::{Span, SpanError};
