//! Printable names for callees.

use gocrit_ir::{ExprArena, ExprId, ExprKind, StringInterner};

/// How a callee name is written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NameForm {
    /// `fn`
    Bare,
    /// `pkg.Fn` or `recv.Method`
    Selector,
}

/// A callee that can be referred to without evaluating anything.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedName {
    pub text: String,
    pub form: NameForm,
    /// The leftmost identifier: the callee itself for a bare name, the
    /// package or receiver for a selector.
    pub base: ExprId,
}

/// Derive the qualified name of a callee.
///
/// Only `ident` and `ident.sel` have one; anything deeper or anything that
/// must be evaluated (`f().g`, `m[k]`, `(f)`) does not.
pub fn qualified_name(
    arena: &ExprArena,
    interner: &StringInterner,
    callee: ExprId,
) -> Option<QualifiedName> {
    match arena.try_get_expr(callee)?.kind {
        ExprKind::Ident(name) => Some(QualifiedName {
            text: interner.lookup(name).to_owned(),
            form: NameForm::Bare,
            base: callee,
        }),
        ExprKind::Selector { base, sel } => {
            let ExprKind::Ident(pkg) = arena.try_get_expr(base)?.kind else {
                return None;
            };
            Some(QualifiedName {
                text: format!("{}.{}", interner.lookup(pkg), interner.lookup(sel)),
                form: NameForm::Selector,
                base,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use gocrit_ir::AstBuilder;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bare_and_selector_names() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let mut b = AstBuilder::new(&mut arena, &interner);
        let f = b.ident("fn");
        let strings = b.ident("strings");
        let upper = b.selector(strings, "ToUpper");

        assert_eq!(
            qualified_name(&arena, &interner, f),
            Some(QualifiedName {
                text: "fn".into(),
                form: NameForm::Bare,
                base: f,
            })
        );
        assert_eq!(
            qualified_name(&arena, &interner, upper),
            Some(QualifiedName {
                text: "strings.ToUpper".into(),
                form: NameForm::Selector,
                base: strings,
            })
        );
    }

    #[test]
    fn test_expressions_without_a_name() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let mut b = AstBuilder::new(&mut arena, &interner);

        let make = b.ident("makeHandler");
        let call = b.call(make, &[]);
        let call_sel = b.selector(call, "Serve");

        let a = b.ident("a");
        let bb = b.selector(a, "b");
        let nested = b.selector(bb, "c");

        let m = b.ident("m");
        let k = b.ident("k");
        let index = b.index(m, k);

        let f = b.ident("f");
        let paren = b.paren(f);

        for id in [call, call_sel, nested, index, paren] {
            assert_eq!(qualified_name(&arena, &interner, id), None);
        }
        assert_eq!(qualified_name(&arena, &interner, gocrit_ir::ExprId::INVALID), None);
    }
}
