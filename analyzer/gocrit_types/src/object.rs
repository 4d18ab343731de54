//! Identifier binding kinds.

/// Kind of entity an identifier resolves to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ObjectKind {
    /// Declared function or method.
    Func,
    /// Declared or predeclared type name.
    TypeName,
    /// Variable, parameter, result or struct field.
    Var,
    /// Predeclared builtin function (`len`, `append`, ...).
    Builtin,
    /// Imported package name.
    PkgName,
    /// Declared constant.
    Const,
    /// The predeclared `nil`.
    Nil,
}

impl ObjectKind {
    /// Whether the binding holds a value that can change at run time.
    pub const fn is_variable(self) -> bool {
        matches!(self, ObjectKind::Var)
    }

    /// Whether the binding names a callable that is fixed at compile time.
    pub const fn is_static_callable(self) -> bool {
        matches!(self, ObjectKind::Func | ObjectKind::TypeName)
    }
}
