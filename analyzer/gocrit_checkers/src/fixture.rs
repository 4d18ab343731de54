//! In-memory source units for exercising checkers.
//!
//! A [`Fixture`] owns the arena, interner and type table a
//! [`CheckContext`] borrows, and knows how to build the wrapper literals
//! `unlambda` looks at from a compact description:
//!
//! ```
//! use gocrit_checkers::fixture::{Fixture, Wrapper};
//! use gocrit_types::ObjectKind;
//!
//! let mut fx = Fixture::new();
//! let w = fx.wrapper(&Wrapper::forward(&[(&["x"], "int")], &["int"], "fn"));
//! fx.bind_like_literal(&w, ObjectKind::Func);
//! assert_eq!(fx.print(w.lit), "func(x int) int { return fn(x) }");
//! ```

use gocrit_ir::{AstBuilder, ExprArena, ExprId, Field, StringInterner};
use gocrit_types::{Idx, ObjectKind, TypeInfo, TypeTable};

use crate::CheckContext;

/// Owner of everything a [`CheckContext`] borrows.
#[derive(Default)]
pub struct Fixture {
    pub interner: StringInterner,
    pub arena: ExprArena,
    pub types: TypeTable,
}

/// Description of `func(params) results { return callee(args) }`.
///
/// Type names are written in Go syntax with `...T`, `[]T` and `*T`
/// prefixes. A callee containing a dot becomes a selector.
#[derive(Clone, Debug)]
pub struct Wrapper<'a> {
    pub params: &'a [(&'a [&'a str], &'a str)],
    pub results: &'a [&'a str],
    pub callee: &'a str,
    /// Call arguments as identifiers; `None` forwards every parameter.
    pub args: Option<&'a [&'a str]>,
    pub spread: bool,
}

impl<'a> Wrapper<'a> {
    /// A wrapper that forwards every parameter name in order, spreading the
    /// last one if it is variadic.
    pub fn forward(
        params: &'a [(&'a [&'a str], &'a str)],
        results: &'a [&'a str],
        callee: &'a str,
    ) -> Self {
        let spread = params.last().is_some_and(|(_, ty)| ty.starts_with("..."));
        Wrapper {
            params,
            results,
            callee,
            args: None,
            spread,
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: &'a [&'a str]) -> Self {
        self.args = Some(args);
        self
    }

    #[must_use]
    pub fn with_spread(mut self, spread: bool) -> Self {
        self.spread = spread;
        self
    }
}

/// Node IDs of a built wrapper.
#[derive(Copy, Clone, Debug)]
pub struct WrapperIds {
    pub lit: ExprId,
    pub call: ExprId,
    pub callee: ExprId,
    /// The callee itself, or the package/receiver of a selector.
    pub callee_base: ExprId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build nodes with direct access to the type table.
    pub fn build<R>(&mut self, f: impl FnOnce(&mut AstBuilder<'_>, &mut TypeTable) -> R) -> R {
        let mut builder = AstBuilder::new(&mut self.arena, &self.interner);
        f(&mut builder, &mut self.types)
    }

    pub fn context(&self) -> CheckContext<'_> {
        CheckContext::new(&self.arena, &self.interner, &self.types)
    }

    pub fn print(&self, id: ExprId) -> String {
        gocrit_ir::ExprPrinter::new(&self.arena, &self.interner).expr(id)
    }

    /// Type a function literal from its own parameter and result lists.
    pub fn type_func_lit(&mut self, lit: ExprId) -> Option<Idx> {
        self.types.record_func_lit(&self.arena, &self.interner, lit)
    }

    /// Build a wrapper literal and record its type.
    pub fn wrapper(&mut self, w: &Wrapper<'_>) -> WrapperIds {
        let forwarded: Vec<&str> = match w.args {
            Some(args) => args.to_vec(),
            None => w
                .params
                .iter()
                .flat_map(|(names, _)| names.iter().copied())
                .collect(),
        };

        let ids = self.build(|b, _| {
            let params: Vec<Field> = w
                .params
                .iter()
                .map(|(names, ty)| {
                    let ty = type_expr(b, ty);
                    if names.is_empty() {
                        b.unnamed(ty)
                    } else {
                        b.field(names, ty)
                    }
                })
                .collect();
            let results: Vec<Field> = w
                .results
                .iter()
                .map(|ty| {
                    let ty = type_expr(b, ty);
                    b.unnamed(ty)
                })
                .collect();

            let (callee, callee_base) = match w.callee.split_once('.') {
                Some((base, sel)) => {
                    let base = b.ident(base);
                    (b.selector(base, sel), base)
                }
                None => {
                    let callee = b.ident(w.callee);
                    (callee, callee)
                }
            };
            let args: Vec<ExprId> = forwarded.iter().map(|a| b.ident(a)).collect();
            let call = if w.spread {
                b.call_spread(callee, &args)
            } else {
                b.call(callee, &args)
            };
            let ret = b.ret(&[call]);
            let lit = b.func_lit(params, results, &[ret]);
            WrapperIds {
                lit,
                call,
                callee,
                callee_base,
            }
        });
        self.type_func_lit(ids.lit);
        ids
    }

    /// Give the callee the literal's own type and bind its base identifier.
    pub fn bind_like_literal(&mut self, ids: &WrapperIds, base: ObjectKind) {
        if let Some(ty) = self.types.type_of(ids.lit) {
            self.types.record_type(ids.callee, ty);
        }
        self.types.record_object(ids.callee_base, base);
    }
}

/// Build a type expression from `int`, `...int`, `[]int`, `*T` and
/// `pkg.T` spellings.
fn type_expr(b: &mut AstBuilder<'_>, spelled: &str) -> ExprId {
    if let Some(rest) = spelled.strip_prefix("...") {
        let elem = type_expr(b, rest);
        return b.ellipsis(elem);
    }
    if let Some(rest) = spelled.strip_prefix("[]") {
        let elem = type_expr(b, rest);
        return b.slice_type(elem);
    }
    if let Some(rest) = spelled.strip_prefix('*') {
        let elem = type_expr(b, rest);
        return b.star(elem);
    }
    match spelled.split_once('.') {
        Some((pkg, name)) => {
            let pkg = b.ident(pkg);
            b.selector(pkg, name)
        }
        None => b.ident(spelled),
    }
}
