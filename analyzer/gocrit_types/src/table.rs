//! Identifier resolution interface and its in-memory implementation.

use gocrit_ir::{ExprArena, ExprId, ExprKind, FieldRange, LitKind, StringInterner};
use rustc_hash::FxHashMap;

use crate::{universe, Idx, ObjectKind, Pool, Signature};

/// Read access to the static types and bindings of one source unit.
///
/// Implementations are shared across threads by the driver, so lookups
/// take `&self` and must not block on each other.
pub trait TypeInfo: Send + Sync {
    /// Static type of an expression, if it has one.
    fn type_of(&self, expr: ExprId) -> Option<Idx>;

    /// Kind of entity an identifier expression is bound to. `None` when the
    /// binding is unknown.
    fn object_of(&self, ident: ExprId) -> Option<ObjectKind>;

    /// Go type identity.
    fn identical(&self, a: Idx, b: Idx) -> bool;

    /// Human-readable type, for logs and messages.
    fn format_type(&self, idx: Idx) -> String {
        format!("{idx:?}")
    }
}

/// Type facts recorded ahead of time.
///
/// Whatever lowers a source unit records a type for each expression it
/// can type and a binding kind for each identifier it can resolve.
/// Declared type names are kept so that type expressions in signatures can
/// be resolved with [`TypeTable::resolve_type_expr`].
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    pool: Pool,
    types: FxHashMap<ExprId, Idx>,
    objects: FxHashMap<ExprId, ObjectKind>,
    declared: FxHashMap<String, Idx>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    /// Record the static type of an expression. A later record for the
    /// same expression replaces the earlier one.
    pub fn record_type(&mut self, expr: ExprId, ty: Idx) {
        self.types.insert(expr, ty);
    }

    /// Record what an identifier expression is bound to.
    pub fn record_object(&mut self, ident: ExprId, kind: ObjectKind) {
        self.objects.insert(ident, kind);
    }

    /// Make a type name (`Celsius`, `http.Handler`) resolvable in type
    /// expressions.
    pub fn declare_type(&mut self, name: &str, ty: Idx) {
        self.declared.insert(name.to_owned(), ty);
    }

    /// Resolve a type expression to a pooled type.
    ///
    /// Returns `None` for expressions that are not types, and for type
    /// names that are neither predeclared nor declared.
    pub fn resolve_type_expr(
        &mut self,
        arena: &ExprArena,
        interner: &StringInterner,
        id: ExprId,
    ) -> Option<Idx> {
        match arena.try_get_expr(id)?.kind {
            ExprKind::Ident(name) => {
                let text = interner.lookup(name);
                self.declared
                    .get(text)
                    .copied()
                    .or_else(|| universe::basic_type(text))
            }
            ExprKind::Selector { base, sel } => {
                let ExprKind::Ident(pkg) = arena.try_get_expr(base)?.kind else {
                    return None;
                };
                let qualified = format!("{}.{}", interner.lookup(pkg), interner.lookup(sel));
                self.declared.get(&qualified).copied()
            }
            ExprKind::Paren(inner) => self.resolve_type_expr(arena, interner, inner),
            ExprKind::Star(elem) => {
                let elem = self.resolve_type_expr(arena, interner, elem)?;
                Some(self.pool.pointer(elem))
            }
            // `...T` is only legal as the last parameter type, where the
            // parameter's type is `[]T`.
            ExprKind::Ellipsis(elem) => {
                let elem = self.resolve_type_expr(arena, interner, elem)?;
                Some(self.pool.slice(elem))
            }
            ExprKind::ArrayType { len, elem } => {
                let elem = self.resolve_type_expr(arena, interner, elem)?;
                if !len.is_valid() {
                    return Some(self.pool.slice(elem));
                }
                let ExprKind::BasicLit {
                    kind: LitKind::Int,
                    value,
                } = arena.try_get_expr(len)?.kind
                else {
                    return None;
                };
                let len = interner.lookup(value).parse::<u64>().ok()?;
                Some(self.pool.array(len, elem))
            }
            ExprKind::MapType { key, value } => {
                let key = self.resolve_type_expr(arena, interner, key)?;
                let value = self.resolve_type_expr(arena, interner, value)?;
                Some(self.pool.map(key, value))
            }
            ExprKind::FuncType { params, results } => {
                self.resolve_signature(arena, interner, params, results)
            }
            _ => None,
        }
    }

    /// Resolve a parameter and result list to a function type.
    pub fn resolve_signature(
        &mut self,
        arena: &ExprArena,
        interner: &StringInterner,
        params: FieldRange,
        results: FieldRange,
    ) -> Option<Idx> {
        let (params, variadic) = self.resolve_fields(arena, interner, params)?;
        let (results, _) = self.resolve_fields(arena, interner, results)?;
        let sig = Signature {
            params,
            results,
            variadic,
        };
        Some(self.pool.signature(&sig))
    }

    fn resolve_fields(
        &mut self,
        arena: &ExprArena,
        interner: &StringInterner,
        range: FieldRange,
    ) -> Option<(Vec<Idx>, bool)> {
        let fields = arena.get_fields(range);
        let mut types = Vec::with_capacity(fields.len());
        let mut variadic = false;
        for (i, field) in fields.iter().enumerate() {
            if field.is_variadic(arena) {
                // Only the final group may be variadic, and only with one name.
                if i + 1 != fields.len() || field.names.len() > 1 {
                    return None;
                }
                variadic = true;
            }
            let ty = self.resolve_type_expr(arena, interner, field.ty)?;
            let count = field.names.len().max(1);
            types.extend(std::iter::repeat(ty).take(count));
        }
        Some((types, variadic))
    }

    /// Type a function literal from its own signature and record it.
    pub fn record_func_lit(
        &mut self,
        arena: &ExprArena,
        interner: &StringInterner,
        lit: ExprId,
    ) -> Option<Idx> {
        let ExprKind::FuncLit {
            params, results, ..
        } = arena.try_get_expr(lit)?.kind
        else {
            return None;
        };
        let ty = self.resolve_signature(arena, interner, params, results)?;
        self.record_type(lit, ty);
        Some(ty)
    }
}

impl TypeInfo for TypeTable {
    fn type_of(&self, expr: ExprId) -> Option<Idx> {
        self.types.get(&expr).copied()
    }

    fn object_of(&self, ident: ExprId) -> Option<ObjectKind> {
        self.objects.get(&ident).copied()
    }

    fn identical(&self, a: Idx, b: Idx) -> bool {
        self.pool.identical(a, b)
    }

    fn format_type(&self, idx: Idx) -> String {
        self.pool.format(idx)
    }
}

#[cfg(test)]
mod tests;
