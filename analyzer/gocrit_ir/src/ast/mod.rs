//! Flat syntax tree for the Go subset inspected by checkers.
//!
//! Mirrors the shape of `go/ast` closely enough that a host adapter can
//! lower a real Go syntax tree node-for-node:
//! - `expr`: expressions, including the type expressions used in signatures
//! - `stmt`: the statements that can appear in function literal bodies
//! - `field`: parameter and result groups
//! - `operators`: unary and binary operators

mod expr;
mod field;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, LitKind};
pub use field::Field;
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};

#[cfg(test)]
mod tests;
