use super::*;
use crate::{ExprKind, Name, Span, StmtKind};

fn ident(arena: &mut ExprArena, raw: u32, at: u32) -> ExprId {
    arena.alloc_expr(Expr::new(
        ExprKind::Ident(Name::new(1, raw)),
        Span::new(at, at + 1),
    ))
}

#[test]
fn test_alloc_and_get_expr() {
    let mut arena = ExprArena::new();
    let a = ident(&mut arena, 1, 0);
    let b = ident(&mut arena, 2, 2);

    assert_eq!(arena.expr_count(), 2);
    assert_eq!(arena.get_expr(a).span, Span::new(0, 1));
    assert_eq!(arena.get_expr(b).kind, ExprKind::Ident(Name::new(1, 2)));
    assert_eq!(arena.expr_ids().collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_try_get_expr_rejects_sentinel_and_foreign_ids() {
    let mut arena = ExprArena::new();
    let a = ident(&mut arena, 1, 0);

    assert!(arena.try_get_expr(a).is_some());
    assert!(arena.try_get_expr(ExprId::INVALID).is_none());
    assert!(arena.try_get_expr(ExprId::new(7)).is_none());
}

#[test]
fn test_expr_lists_are_independent() {
    let mut arena = ExprArena::new();
    let a = ident(&mut arena, 1, 0);
    let b = ident(&mut arena, 2, 2);
    let c = ident(&mut arena, 3, 4);

    let first = arena.alloc_expr_list([a, b]);
    let second = arena.alloc_expr_list([c]);
    let empty = arena.alloc_expr_list(std::iter::empty());

    assert_eq!(arena.get_expr_list(first), &[a, b]);
    assert_eq!(arena.get_expr_list(second), &[c]);
    assert!(arena.get_expr_list(empty).is_empty());
}

#[test]
fn test_stmt_and_field_storage() {
    let mut arena = ExprArena::new();
    let x = ident(&mut arena, 1, 0);
    let ty = ident(&mut arena, 2, 2);
    let names = arena.alloc_expr_list([x]);

    let fields = arena.alloc_fields([Field::new(names, ty, Span::new(0, 3))]);
    assert_eq!(arena.get_fields(fields).len(), 1);
    assert!(!arena.get_fields(fields)[0].is_variadic(&arena));

    let results = arena.alloc_expr_list([x]);
    let ret = arena.alloc_stmt(Stmt::new(StmtKind::Return(results), Span::new(4, 12)));
    let body = arena.alloc_stmt_list([ret]);
    assert_eq!(arena.get_stmt_list(body), &[ret]);
    assert_eq!(arena.get_stmt(ret).kind, StmtKind::Return(results));
}
