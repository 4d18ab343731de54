//! `unlambda`: function literals that only forward to a named callable.
//!
//! ```text
//! func(x int) int { return fn(x) }   =>   fn
//! ```
//!
//! A literal qualifies when its whole body is `return f(params...)`, `f` is
//! a statically named function, method or type with exactly the literal's
//! type, and every parameter is passed through unchanged and in order.
//! Each condition is a separate guard; the first one that fails decides
//! the [`Rejection`].

use gocrit_diagnostic::{Applicability, Diagnostic, Suggestion};
use gocrit_ir::{exprs_equal, ExprId, ExprKind, ExprPrinter, ExprRange, FieldRange, Span, StmtKind};
use gocrit_types::{universe, ObjectKind};

use crate::{qualified_name, CheckContext, CheckerInfo, ExprChecker, NameForm, QualifiedName, Tag};

pub static INFO: CheckerInfo = CheckerInfo {
    name: "unlambda",
    tags: &[Tag::Style],
    summary: "Detects function literals that can be simplified",
    before: "func(x int) int { return fn(x) }",
    after: "fn",
};

/// Why a candidate was not reported.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Rejection {
    /// Not a function literal.
    NotFuncLit,
    /// A parameter or result group has no type in the tree.
    MalformedSignature,
    /// Body is not exactly `return <one expression>`.
    NotSingleReturn,
    /// The returned expression is not a call.
    NotCall,
    /// The callee is not `ident` or `ident.sel`.
    UnnamedCallee,
    /// The callee is a predeclared builtin.
    Builtin,
    /// The callee is a variable or parameter.
    LocalBinding,
    /// The callee's binding is unknown or not a function or type.
    UnclassifiedBinding,
    /// The literal or the callee has no known type.
    Untyped,
    /// The literal's type differs from the callee's.
    TypeMismatch,
    /// A variadic group is not forwarded with `...`, or `...` is used
    /// without a variadic group.
    SpreadMismatch,
    /// The argument at `position` is not the corresponding parameter.
    ArgumentMismatch { position: usize },
    /// The call has no argument at `position`.
    MissingArgument { position: usize },
    /// The call passes more arguments than there are parameters.
    ExtraArguments { consumed: usize, present: usize },
}

/// What an accepted literal can be replaced with.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Replacement {
    pub name: String,
    /// Span of the whole literal.
    pub span: Span,
    pub applicability: Applicability,
}

/// Outcome of evaluating one candidate.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Verdict {
    Accept(Replacement),
    Reject(Rejection),
}

/// The parts of `func(params) results { return result }`.
struct WrapperShape {
    params: FieldRange,
    result: ExprId,
}

/// The parts of the forwarded call.
struct ResultCall {
    func: ExprId,
    args: ExprRange,
    spread: bool,
}

#[derive(Copy, Clone, Default, Debug)]
pub struct UnlambdaChecker;

impl UnlambdaChecker {
    /// Run every guard in order on one candidate.
    pub fn evaluate(&self, cx: &CheckContext<'_>, expr: ExprId) -> Verdict {
        match Self::guards(cx, expr) {
            Ok(replacement) => Verdict::Accept(replacement),
            Err(rejection) => {
                if rejection != Rejection::NotFuncLit {
                    tracing::trace!(?expr, ?rejection, "unlambda: rejected");
                }
                Verdict::Reject(rejection)
            }
        }
    }

    fn guards(cx: &CheckContext<'_>, lit: ExprId) -> Result<Replacement, Rejection> {
        let (shape, span) = wrapper_shape(cx, lit)?;
        let call = result_call(cx, shape.result)?;
        let name = qualified_name(cx.arena, cx.interner, call.func).ok_or(Rejection::UnnamedCallee)?;
        reject_builtin(&name)?;
        reject_local_binding(cx, &name)?;
        require_identical_types(cx, lit, call.func)?;
        let consumed = align_arguments(cx, shape.params, &call)?;
        require_exhaustive(consumed, call.args.len())?;

        let applicability = applicability(cx, &name);
        Ok(Replacement {
            name: name.text,
            span,
            applicability,
        })
    }
}

/// The literal's body is exactly one `return` of exactly one result.
fn wrapper_shape(cx: &CheckContext<'_>, lit: ExprId) -> Result<(WrapperShape, Span), Rejection> {
    let expr = cx.expr(lit).ok_or(Rejection::NotFuncLit)?;
    let ExprKind::FuncLit {
        params,
        results,
        body,
    } = expr.kind
    else {
        return Err(Rejection::NotFuncLit);
    };
    let untyped = |range: FieldRange| {
        cx.arena
            .get_fields(range)
            .iter()
            .any(|field| cx.expr(field.ty).is_none())
    };
    if untyped(params) || untyped(results) {
        return Err(Rejection::MalformedSignature);
    }
    let [stmt] = cx.arena.get_stmt_list(body) else {
        return Err(Rejection::NotSingleReturn);
    };
    let StmtKind::Return(results) = cx.arena.get_stmt(*stmt).kind else {
        return Err(Rejection::NotSingleReturn);
    };
    let [result] = cx.arena.get_expr_list(results) else {
        return Err(Rejection::NotSingleReturn);
    };
    Ok((
        WrapperShape {
            params,
            result: *result,
        },
        expr.span,
    ))
}

fn result_call(cx: &CheckContext<'_>, result: ExprId) -> Result<ResultCall, Rejection> {
    match cx.expr(result).map(|e| e.kind) {
        Some(ExprKind::Call { func, args, spread }) => Ok(ResultCall { func, args, spread }),
        _ => Err(Rejection::NotCall),
    }
}

fn reject_builtin(name: &QualifiedName) -> Result<(), Rejection> {
    if universe::is_builtin(&name.text) {
        return Err(Rejection::Builtin);
    }
    Ok(())
}

/// A bare callee must be bound to a function or type. Unknown bindings are
/// treated like variables.
fn reject_local_binding(cx: &CheckContext<'_>, name: &QualifiedName) -> Result<(), Rejection> {
    if name.form != NameForm::Bare {
        return Ok(());
    }
    match cx.types.object_of(name.base) {
        Some(kind) if kind.is_static_callable() => Ok(()),
        Some(kind) if kind.is_variable() => Err(Rejection::LocalBinding),
        _ => Err(Rejection::UnclassifiedBinding),
    }
}

fn require_identical_types(
    cx: &CheckContext<'_>,
    lit: ExprId,
    callee: ExprId,
) -> Result<(), Rejection> {
    let (Some(lit_ty), Some(callee_ty)) = (cx.types.type_of(lit), cx.types.type_of(callee)) else {
        return Err(Rejection::Untyped);
    };
    if !cx.types.identical(lit_ty, callee_ty) {
        tracing::trace!(
            literal = %cx.types.format_type(lit_ty),
            callee = %cx.types.format_type(callee_ty),
            "unlambda: type mismatch"
        );
        return Err(Rejection::TypeMismatch);
    }
    Ok(())
}

/// Match parameters against arguments position by position. Returns the
/// number of argument positions consumed.
fn align_arguments(
    cx: &CheckContext<'_>,
    params: FieldRange,
    call: &ResultCall,
) -> Result<usize, Rejection> {
    let args = cx.arena.get_expr_list(call.args);
    let arg_at = |position: usize| {
        args.get(position)
            .copied()
            .ok_or(Rejection::MissingArgument { position })
    };

    let mut consumed = 0;
    let mut saw_variadic = false;
    for field in cx.arena.get_fields(params) {
        let names = cx.arena.get_expr_list(field.names);
        if field.is_variadic(cx.arena) {
            // `rest ...T` must be forwarded as `rest...`, which counts as
            // one position.
            let (true, [rest]) = (call.spread, names) else {
                return Err(Rejection::SpreadMismatch);
            };
            if !exprs_equal(cx.arena, *rest, arg_at(consumed)?) {
                return Err(Rejection::ArgumentMismatch { position: consumed });
            }
            consumed += 1;
            saw_variadic = true;
            continue;
        }
        for &name in names {
            if !exprs_equal(cx.arena, name, arg_at(consumed)?) {
                return Err(Rejection::ArgumentMismatch { position: consumed });
            }
            consumed += 1;
        }
    }

    if call.spread && !saw_variadic {
        return Err(Rejection::SpreadMismatch);
    }
    Ok(consumed)
}

fn require_exhaustive(consumed: usize, present: usize) -> Result<(), Rejection> {
    if consumed != present {
        return Err(Rejection::ExtraArguments { consumed, present });
    }
    Ok(())
}

/// Package-qualified and bare names denote the same function value as the
/// literal. A method value evaluates its receiver when the value is
/// created, not at each call.
fn applicability(cx: &CheckContext<'_>, name: &QualifiedName) -> Applicability {
    match name.form {
        NameForm::Bare => Applicability::MachineApplicable,
        NameForm::Selector if cx.types.object_of(name.base) == Some(ObjectKind::PkgName) => {
            Applicability::MachineApplicable
        }
        NameForm::Selector => Applicability::MaybeIncorrect,
    }
}

impl ExprChecker for UnlambdaChecker {
    fn info(&self) -> &'static CheckerInfo {
        &INFO
    }

    fn check_expr(&self, cx: &CheckContext<'_>, expr: ExprId) -> Option<Diagnostic> {
        let Verdict::Accept(replacement) = self.evaluate(cx, expr) else {
            return None;
        };
        let literal = ExprPrinter::new(cx.arena, cx.interner).expr(expr);
        let name = replacement.name;
        Some(
            Diagnostic::warning(INFO.name)
                .with_message(format!("replace `{literal}` with `{name}`"))
                .with_label(replacement.span, "function literal only forwards its parameters")
                .with_suggestion(Suggestion::new(
                    format!("replace with `{name}`"),
                    replacement.span,
                    name,
                    replacement.applicability,
                )),
        )
    }
}

#[cfg(test)]
mod tests;
