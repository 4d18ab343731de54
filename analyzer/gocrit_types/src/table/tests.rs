use gocrit_ir::{AstBuilder, ExprArena, StringInterner};
use pretty_assertions::assert_eq;

use super::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_table_is_shareable() {
    assert_send_sync::<TypeTable>();
    assert_send_sync::<Box<dyn TypeInfo>>();
}

#[test]
fn test_record_and_lookup() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, &interner);
    let x = b.ident("x");
    let f = b.ident("f");

    let mut table = TypeTable::new();
    table.record_type(x, Idx::INT);
    table.record_object(x, ObjectKind::Var);
    table.record_object(f, ObjectKind::Func);

    assert_eq!(table.type_of(x), Some(Idx::INT));
    assert_eq!(table.type_of(f), None);
    assert_eq!(table.object_of(x), Some(ObjectKind::Var));
    assert_eq!(table.object_of(f), Some(ObjectKind::Func));
    assert!(table.identical(Idx::INT, Idx::INT));
    assert!(!table.identical(Idx::INT, Idx::INT64));
}

#[test]
fn test_func_lit_signature_counts_every_name() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, &interner);

    // func(a, b int, s string) (int, error)
    let int = b.ident("int");
    let ab = b.field(&["a", "b"], int);
    let string = b.ident("string");
    let s = b.field(&["s"], string);
    let int = b.ident("int");
    let r0 = b.unnamed(int);
    let error = b.ident("error");
    let r1 = b.unnamed(error);
    let lit = b.func_lit(vec![ab, s], vec![r0, r1], &[]);

    let mut table = TypeTable::new();
    let ty = table.record_func_lit(&arena, &interner, lit);

    let expected = table.pool_mut().signature(&Signature::new(
        vec![Idx::INT, Idx::INT, Idx::STRING],
        vec![Idx::INT, Idx::ERROR],
    ));
    assert_eq!(ty, Some(expected));
    assert_eq!(table.type_of(lit), Some(expected));
    assert_eq!(table.format_type(expected), "func(int, int, string) (int, error)");
}

#[test]
fn test_variadic_func_lit() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, &interner);

    // func(xs ...int) int
    let int = b.ident("int");
    let rest = b.ellipsis(int);
    let xs = b.field(&["xs"], rest);
    let int = b.ident("int");
    let r = b.unnamed(int);
    let lit = b.func_lit(vec![xs], vec![r], &[]);

    let mut table = TypeTable::new();
    let ty = table.record_func_lit(&arena, &interner, lit);

    let expected = table
        .pool_mut()
        .variadic_signature(&[], Idx::INT, &[Idx::INT]);
    assert_eq!(ty, Some(expected));
    assert_eq!(table.format_type(expected), "func(...int) int");
}

#[test]
fn test_misplaced_variadic_group_is_untyped() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, &interner);

    // func(xs ...int, y int)
    let int = b.ident("int");
    let rest = b.ellipsis(int);
    let xs = b.field(&["xs"], rest);
    let int = b.ident("int");
    let y = b.field(&["y"], int);
    let lit = b.func_lit(vec![xs, y], vec![], &[]);

    let mut table = TypeTable::new();
    assert_eq!(table.record_func_lit(&arena, &interner, lit), None);
    assert_eq!(table.type_of(lit), None);
}

#[test]
fn test_resolve_composite_type_exprs() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, &interner);

    let string = b.ident("string");
    let int = b.ident("int");
    let ints = b.slice_type(int);
    let map = b.map_type(string, ints);
    let byte = b.ident("byte");
    let ptr = b.star(byte);
    let handler = b.ident("Handler");
    let http = b.ident("http");
    let qualified = b.selector(http, "Handler");
    let unknown = b.ident("Unknown");
    let one = b.int_lit("1");
    let not_a_type = b.call(handler, &[one]);

    let mut table = TypeTable::new();
    let named = table.pool_mut().named("Handler", Idx::ANY);
    table.declare_type("Handler", named);
    let http_named = table.pool_mut().named("http.Handler", Idx::ANY);
    table.declare_type("http.Handler", http_named);

    let map_ty = table.resolve_type_expr(&arena, &interner, map);
    let ints_ty = table.pool_mut().slice(Idx::INT);
    let expected_map = table.pool_mut().map(Idx::STRING, ints_ty);
    assert_eq!(map_ty, Some(expected_map));

    let ptr_ty = table.resolve_type_expr(&arena, &interner, ptr);
    assert_eq!(ptr_ty.and_then(|p| table.pool().pointer_elem(p)), Some(Idx::UINT8));

    assert_eq!(table.resolve_type_expr(&arena, &interner, handler), Some(named));
    assert_eq!(
        table.resolve_type_expr(&arena, &interner, qualified),
        Some(http_named)
    );
    assert_eq!(table.resolve_type_expr(&arena, &interner, unknown), None);
    assert_eq!(table.resolve_type_expr(&arena, &interner, not_a_type), None);
}

#[test]
fn test_func_type_expr_matches_literal_type() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, &interner);

    let int = b.ident("int");
    let p = b.unnamed(int);
    let int = b.ident("int");
    let r = b.unnamed(int);
    let func_type = b.func_type(vec![p], vec![r]);

    let int = b.ident("int");
    let x = b.field(&["x"], int);
    let int = b.ident("int");
    let r = b.unnamed(int);
    let lit = b.func_lit(vec![x], vec![r], &[]);

    let mut table = TypeTable::new();
    let declared = table.resolve_type_expr(&arena, &interner, func_type);
    let literal = table.record_func_lit(&arena, &interner, lit);

    assert!(declared.is_some());
    assert_eq!(declared, literal);
}
