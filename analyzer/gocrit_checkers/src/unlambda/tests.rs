use gocrit_diagnostic::{Applicability, Severity, Substitution};
use gocrit_ir::BinaryOp;
use gocrit_types::{Idx, ObjectKind, Signature, TypeInfo};
use pretty_assertions::assert_eq;

use super::*;
use crate::fixture::{Fixture, Wrapper, WrapperIds};

fn verdict(fx: &Fixture, id: ExprId) -> Verdict {
    UnlambdaChecker.evaluate(&fx.context(), id)
}

fn rejected(fx: &Fixture, id: ExprId) -> Option<Rejection> {
    match verdict(fx, id) {
        Verdict::Reject(rejection) => Some(rejection),
        Verdict::Accept(_) => None,
    }
}

fn accepted(fx: &Fixture, id: ExprId) -> Option<Replacement> {
    match verdict(fx, id) {
        Verdict::Accept(replacement) => Some(replacement),
        Verdict::Reject(_) => None,
    }
}

/// Build a wrapper whose callee has the literal's type and the given binding.
fn bound(fx: &mut Fixture, w: &Wrapper<'_>, kind: ObjectKind) -> WrapperIds {
    let ids = fx.wrapper(w);
    fx.bind_like_literal(&ids, kind);
    ids
}

/// Wrap a single statement list in a literal `func(x int) int { ... }`.
fn literal_with_body(
    fx: &mut Fixture,
    body: impl FnOnce(&mut gocrit_ir::AstBuilder<'_>) -> Vec<gocrit_ir::StmtId>,
) -> ExprId {
    fx.build(|b, _| {
        let int = b.ident("int");
        let x = b.field(&["x"], int);
        let int = b.ident("int");
        let r = b.unnamed(int);
        let stmts = body(b);
        b.func_lit(vec![x], vec![r], &stmts)
    })
}

// === Scenarios ===

#[test]
fn test_forward_to_declared_function() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["x"], "int")], &["int"], "fn"),
        ObjectKind::Func,
    );

    let diag = UnlambdaChecker.check_expr(&fx.context(), w.lit);
    let span = fx.arena.get_expr(w.lit).span;

    let diag = diag.unwrap_or_else(|| panic!("expected a diagnostic"));
    assert_eq!(diag.checker, "unlambda");
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(
        diag.message,
        "replace `func(x int) int { return fn(x) }` with `fn`"
    );
    assert_eq!(diag.primary_span(), Some(span));
    assert_eq!(diag.suggestions.len(), 1);
    assert_eq!(
        diag.suggestions[0].substitutions,
        vec![Substitution::new(span, "fn")]
    );
    assert_eq!(
        diag.suggestions[0].applicability,
        Applicability::MachineApplicable
    );
}

#[test]
fn test_builtin_callee() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["x"], "int")], &["int"], "len"),
        ObjectKind::Builtin,
    );

    assert_eq!(rejected(&fx, w.lit), Some(Rejection::Builtin));
    assert!(UnlambdaChecker.check_expr(&fx.context(), w.lit).is_none());
}

#[test]
fn test_swapped_arguments() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["a", "b"], "int")], &["int"], "add").with_args(&["b", "a"]),
        ObjectKind::Func,
    );

    assert_eq!(
        rejected(&fx, w.lit),
        Some(Rejection::ArgumentMismatch { position: 0 })
    );
}

#[test]
fn test_variadic_forwarded_with_spread() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["xs"], "...int")], &["int"], "sum"),
        ObjectKind::Func,
    );

    let diag = UnlambdaChecker.check_expr(&fx.context(), w.lit);
    assert_eq!(
        diag.map(|d| d.message),
        Some("replace `func(xs ...int) int { return sum(xs...) }` with `sum`".to_string())
    );
}

#[test]
fn test_local_variable_callee() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["x"], "int")], &["int"], "fn"),
        ObjectKind::Var,
    );

    assert_eq!(rejected(&fx, w.lit), Some(Rejection::LocalBinding));
}

// === Guard 1: shape ===

#[test]
fn test_not_a_function_literal() {
    let mut fx = Fixture::new();
    let (ident, call) = fx.build(|b, _| {
        let f = b.ident("fn");
        let x = b.ident("x");
        (f, b.call(f, &[x]))
    });

    assert_eq!(rejected(&fx, ident), Some(Rejection::NotFuncLit));
    assert_eq!(rejected(&fx, call), Some(Rejection::NotFuncLit));
    assert_eq!(rejected(&fx, ExprId::INVALID), Some(Rejection::NotFuncLit));
}

#[test]
fn test_body_must_be_single_return_of_one_result() {
    let mut fx = Fixture::new();

    let empty = literal_with_body(&mut fx, |_| vec![]);
    let two_stmts = literal_with_body(&mut fx, |b| {
        let f = b.ident("fn");
        let x = b.ident("x");
        let call = b.call(f, &[x]);
        let log = b.expr_stmt(call);
        let f = b.ident("fn");
        let x = b.ident("x");
        let call = b.call(f, &[x]);
        vec![log, b.ret(&[call])]
    });
    let bare_return = literal_with_body(&mut fx, |b| vec![b.ret(&[])]);
    let two_results = literal_with_body(&mut fx, |b| {
        let f = b.ident("fn");
        let x = b.ident("x");
        let call = b.call(f, &[x]);
        let nil = b.ident("nil");
        vec![b.ret(&[call, nil])]
    });
    let expr_stmt = literal_with_body(&mut fx, |b| {
        let f = b.ident("fn");
        let x = b.ident("x");
        let call = b.call(f, &[x]);
        vec![b.expr_stmt(call)]
    });
    let nested_block = literal_with_body(&mut fx, |b| {
        let f = b.ident("fn");
        let x = b.ident("x");
        let call = b.call(f, &[x]);
        let ret = b.ret(&[call]);
        vec![b.block(&[ret])]
    });

    for lit in [empty, two_stmts, bare_return, two_results, expr_stmt, nested_block] {
        assert_eq!(
            rejected(&fx, lit),
            Some(Rejection::NotSingleReturn),
            "{}",
            fx.print(lit)
        );
    }
}

// === Guard 2: call ===

#[test]
fn test_group_without_type_is_rejected() {
    let mut fx = Fixture::new();
    let (lit, callee) = fx.build(|b, _| {
        let int = b.ident("int");
        let mut x = b.field(&["x"], int);
        x.ty = ExprId::INVALID;
        let int = b.ident("int");
        let mut r = b.unnamed(int);
        r.ty = ExprId::new(u32::MAX - 1);
        let callee = b.ident("fn");
        let arg = b.ident("x");
        let call = b.call(callee, &[arg]);
        let ret = b.ret(&[call]);
        (b.func_lit(vec![x], vec![r], &[ret]), callee)
    });
    let sig = fx
        .types
        .pool_mut()
        .signature(&Signature::new(vec![Idx::INT], vec![Idx::INT]));
    fx.types.record_type(lit, sig);
    fx.types.record_type(callee, sig);
    fx.types.record_object(callee, ObjectKind::Func);

    assert_eq!(rejected(&fx, lit), Some(Rejection::MalformedSignature));
    assert_eq!(UnlambdaChecker.check_expr(&fx.context(), lit), None);
}

#[test]
fn test_result_must_be_a_call() {
    let mut fx = Fixture::new();
    let ident = literal_with_body(&mut fx, |b| {
        let x = b.ident("x");
        vec![b.ret(&[x])]
    });
    let binary = literal_with_body(&mut fx, |b| {
        let x = b.ident("x");
        let one = b.int_lit("1");
        let sum = b.binary(BinaryOp::Add, x, one);
        vec![b.ret(&[sum])]
    });
    let paren_call = literal_with_body(&mut fx, |b| {
        let f = b.ident("fn");
        let x = b.ident("x");
        let call = b.call(f, &[x]);
        let paren = b.paren(call);
        vec![b.ret(&[paren])]
    });

    for lit in [ident, binary, paren_call] {
        assert_eq!(rejected(&fx, lit), Some(Rejection::NotCall), "{}", fx.print(lit));
    }
}

// === Guard 3: callee name ===

#[test]
fn test_callee_must_have_a_qualified_name() {
    let mut fx = Fixture::new();
    let call_result = literal_with_body(&mut fx, |b| {
        let make = b.ident("makeFn");
        let made = b.call(make, &[]);
        let x = b.ident("x");
        let call = b.call(made, &[x]);
        vec![b.ret(&[call])]
    });
    let deep_selector = literal_with_body(&mut fx, |b| {
        let a = b.ident("a");
        let ab = b.selector(a, "b");
        let abc = b.selector(ab, "c");
        let x = b.ident("x");
        let call = b.call(abc, &[x]);
        vec![b.ret(&[call])]
    });
    let indexed = literal_with_body(&mut fx, |b| {
        let handlers = b.ident("handlers");
        let zero = b.int_lit("0");
        let h = b.index(handlers, zero);
        let x = b.ident("x");
        let call = b.call(h, &[x]);
        vec![b.ret(&[call])]
    });

    for lit in [call_result, deep_selector, indexed] {
        assert_eq!(rejected(&fx, lit), Some(Rejection::UnnamedCallee), "{}", fx.print(lit));
    }
}

// === Guard 4 and 5: bindings ===

#[test]
fn test_builtin_rejected_before_binding_check() {
    // `append` is never bound here; the builtin guard fires first.
    let mut fx = Fixture::new();
    let w = fx.wrapper(&Wrapper::forward(
        &[(&["s"], "[]int"), (&["v"], "...int")],
        &["[]int"],
        "append",
    ));

    assert_eq!(rejected(&fx, w.lit), Some(Rejection::Builtin));
}

#[test]
fn test_unknown_binding_is_treated_as_unsafe() {
    let mut fx = Fixture::new();
    let unbound = fx.wrapper(&Wrapper::forward(&[(&["x"], "int")], &["int"], "fn"));
    let constant = bound(
        &mut fx,
        &Wrapper::forward(&[(&["x"], "int")], &["int"], "c"),
        ObjectKind::Const,
    );

    assert_eq!(rejected(&fx, unbound.lit), Some(Rejection::UnclassifiedBinding));
    assert_eq!(rejected(&fx, constant.lit), Some(Rejection::UnclassifiedBinding));
}

#[test]
fn test_package_qualified_callee() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["s"], "string")], &["string"], "strings.ToUpper"),
        ObjectKind::PkgName,
    );

    let replacement = accepted(&fx, w.lit);
    assert_eq!(
        replacement.map(|r| (r.name, r.applicability)),
        Some((
            "strings.ToUpper".to_string(),
            Applicability::MachineApplicable
        ))
    );
}

#[test]
fn test_method_value_suggestion_needs_review() {
    // The local-binding guard only looks at bare names, so a method on a
    // variable receiver is still reported.
    let mut fx = Fixture::new();
    let request = fx.types.pool_mut().named("http.Request", Idx::ANY);
    fx.types.declare_type("http.Request", request);
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["r"], "*http.Request")], &[], "srv.ServeRequest"),
        ObjectKind::Var,
    );

    let replacement = accepted(&fx, w.lit);
    assert_eq!(
        replacement.map(|r| (r.name, r.applicability)),
        Some((
            "srv.ServeRequest".to_string(),
            Applicability::MaybeIncorrect
        ))
    );
}

// === Guard 6: types ===

#[test]
fn test_signature_must_be_identical() {
    let mut fx = Fixture::new();
    let w = fx.wrapper(&Wrapper::forward(&[(&["x"], "int")], &["int"], "fn"));
    fx.types.record_object(w.callee, ObjectKind::Func);
    let wider = fx
        .types
        .pool_mut()
        .signature(&Signature::new(vec![Idx::INT64], vec![Idx::INT]));
    fx.types.record_type(w.callee, wider);

    assert_eq!(rejected(&fx, w.lit), Some(Rejection::TypeMismatch));
}

#[test]
fn test_missing_types_reject() {
    let mut fx = Fixture::new();
    let w = fx.wrapper(&Wrapper::forward(&[(&["x"], "int")], &["int"], "fn"));
    fx.types.record_object(w.callee, ObjectKind::Func);

    assert_eq!(rejected(&fx, w.lit), Some(Rejection::Untyped));
}

#[test]
fn test_conversion_to_named_type() {
    let mut fx = Fixture::new();
    let celsius = fx.types.pool_mut().named("Celsius", Idx::FLOAT64);
    fx.types.declare_type("Celsius", celsius);
    let w = fx.wrapper(&Wrapper::forward(&[(&["f"], "float64")], &["Celsius"], "Celsius"));
    fx.types.record_object(w.callee, ObjectKind::TypeName);
    fx.types.record_type(w.callee, celsius);

    assert_eq!(rejected(&fx, w.lit), Some(Rejection::TypeMismatch));
}

// === Guard 7: alignment ===

#[test]
fn test_variadic_group_requires_spread() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["xs"], "...int")], &["int"], "sum").with_spread(false),
        ObjectKind::Func,
    );

    assert_eq!(rejected(&fx, w.lit), Some(Rejection::SpreadMismatch));
}

#[test]
fn test_spread_without_variadic_group() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["xs"], "[]int")], &["int"], "sum").with_spread(true),
        ObjectKind::Func,
    );

    assert_eq!(rejected(&fx, w.lit), Some(Rejection::SpreadMismatch));
}

#[test]
fn test_spread_of_another_name() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["a"], "string"), (&["xs"], "...any")], &[], "log.Printf")
            .with_args(&["a", "ys"]),
        ObjectKind::PkgName,
    );

    assert_eq!(
        rejected(&fx, w.lit),
        Some(Rejection::ArgumentMismatch { position: 1 })
    );
}

#[test]
fn test_variadic_after_fixed_params() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["format"], "string"), (&["args"], "...any")], &[], "log.Printf"),
        ObjectKind::PkgName,
    );

    assert_eq!(
        accepted(&fx, w.lit).map(|r| r.name),
        Some("log.Printf".to_string())
    );
    assert_eq!(
        fx.print(w.lit),
        "func(format string, args ...any) { return log.Printf(format, args...) }"
    );
}

#[test]
fn test_missing_and_duplicated_arguments() {
    let mut fx = Fixture::new();
    let params: &[(&[&str], &str)] = &[(&["a", "b"], "int")];
    let missing = bound(
        &mut fx,
        &Wrapper::forward(params, &["int"], "f").with_args(&["a"]),
        ObjectKind::Func,
    );
    let duplicated = bound(
        &mut fx,
        &Wrapper::forward(params, &["int"], "f").with_args(&["a", "a"]),
        ObjectKind::Func,
    );

    assert_eq!(
        rejected(&fx, missing.lit),
        Some(Rejection::MissingArgument { position: 1 })
    );
    assert_eq!(
        rejected(&fx, duplicated.lit),
        Some(Rejection::ArgumentMismatch { position: 1 })
    );
}

#[test]
fn test_parenthesized_argument_is_a_mismatch() {
    let mut fx = Fixture::new();
    let lit = literal_with_body(&mut fx, |b| {
        let f = b.ident("fn");
        let x = b.ident("x");
        let paren = b.paren(x);
        let call = b.call(f, &[paren]);
        vec![b.ret(&[call])]
    });
    fx.type_func_lit(lit);
    let (callee, ty) = match fx.arena.get_expr(lit).kind {
        ExprKind::FuncLit { body, .. } => {
            let ret = fx.arena.get_stmt_list(body)[0];
            let StmtKind::Return(results) = fx.arena.get_stmt(ret).kind else {
                panic!("expected return");
            };
            let call = fx.arena.get_expr_list(results)[0];
            let ExprKind::Call { func, .. } = fx.arena.get_expr(call).kind else {
                panic!("expected call");
            };
            (func, fx.types.type_of(lit))
        }
        _ => panic!("expected literal"),
    };
    fx.types.record_object(callee, ObjectKind::Func);
    if let Some(ty) = ty {
        fx.types.record_type(callee, ty);
    }

    assert_eq!(
        rejected(&fx, lit),
        Some(Rejection::ArgumentMismatch { position: 0 })
    );
}

// === Guard 8: exhaustiveness ===

#[test]
fn test_extra_arguments() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[(&["a"], "int")], &["int"], "f").with_args(&["a", "a"]),
        ObjectKind::Func,
    );

    assert_eq!(
        rejected(&fx, w.lit),
        Some(Rejection::ExtraArguments {
            consumed: 1,
            present: 2
        })
    );
}

// === Accepted shapes ===

#[test]
fn test_multiple_results_and_groups() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(
            &[(&["a", "b"], "int"), (&["s"], "string")],
            &["int", "error"],
            "combine",
        ),
        ObjectKind::Func,
    );

    assert_eq!(
        accepted(&fx, w.lit).map(|r| r.name),
        Some("combine".to_string())
    );
}

#[test]
fn test_nullary_literal() {
    let mut fx = Fixture::new();
    let w = bound(
        &mut fx,
        &Wrapper::forward(&[], &["error"], "closeAll"),
        ObjectKind::Func,
    );

    assert_eq!(
        accepted(&fx, w.lit).map(|r| r.name),
        Some("closeAll".to_string())
    );
}

#[test]
fn test_info() {
    let info = UnlambdaChecker.info();
    assert_eq!(info.name, "unlambda");
    assert_eq!(info.tags, &[Tag::Style]);
    assert_eq!(info.summary, "Detects function literals that can be simplified");
    assert_eq!(info.before, "func(x int) int { return fn(x) }");
    assert_eq!(info.after, "fn");
}
