use super::*;
use crate::{AstBuilder, ExprArena, ExprId, StringInterner};

#[test]
fn test_variadic_group_detection() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, &interner);

    let int = b.ident("int");
    let plain = b.field(&["a", "b"], int);
    let int = b.ident("int");
    let variadic_ty = b.ellipsis(int);
    let variadic = b.field(&["rest"], variadic_ty);
    let int = b.ident("int");
    let slice_ty = b.slice_type(int);
    let slice = b.field(&["xs"], slice_ty);

    assert!(!plain.is_variadic(&arena));
    assert!(variadic.is_variadic(&arena));
    assert!(!slice.is_variadic(&arena));
    assert_eq!(plain.names.len(), 2);

    let untyped = Field::new(plain.names, ExprId::INVALID, plain.span);
    let dangling = Field::new(plain.names, ExprId::new(10_000), plain.span);
    assert!(!untyped.is_variadic(&arena));
    assert!(!dangling.is_variadic(&arena));
}

#[test]
fn test_operator_symbols() {
    assert_eq!(BinaryOp::AndNot.as_symbol(), "&^");
    assert_eq!(BinaryOp::LtEq.as_symbol(), "<=");
    assert_eq!(UnaryOp::Recv.as_symbol(), "<-");
}

#[test]
fn test_describe_is_stable() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, &interner);

    let f = b.ident("f");
    let call = b.call(f, &[]);

    assert_eq!(arena.get_expr(call).kind.describe(), "call");
    assert_eq!(arena.get_expr(f).kind.describe(), "identifier");
}
