//! Predeclared identifiers of the Go universe block.

use crate::Idx;

/// Predeclared builtin functions, sorted.
pub const BUILTINS: &[&str] = &[
    "append", "cap", "clear", "close", "complex", "copy", "delete", "imag", "len", "make", "max",
    "min", "new", "panic", "print", "println", "real", "recover",
];

/// Whether `name` is a predeclared builtin function.
///
/// Only the spelling is checked. A package that shadows `len` is the
/// caller's concern.
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.binary_search(&name).is_ok()
}

/// Resolve a predeclared type name.
pub fn basic_type(name: &str) -> Option<Idx> {
    let idx = match name {
        "bool" => Idx::BOOL,
        "string" => Idx::STRING,
        "int" => Idx::INT,
        "int8" => Idx::INT8,
        "int16" => Idx::INT16,
        "int32" | "rune" => Idx::INT32,
        "int64" => Idx::INT64,
        "uint" => Idx::UINT,
        "uint8" | "byte" => Idx::UINT8,
        "uint16" => Idx::UINT16,
        "uint32" => Idx::UINT32,
        "uint64" => Idx::UINT64,
        "uintptr" => Idx::UINTPTR,
        "float32" => Idx::FLOAT32,
        "float64" => Idx::FLOAT64,
        "complex64" => Idx::COMPLEX64,
        "complex128" => Idx::COMPLEX128,
        "error" => Idx::ERROR,
        "any" => Idx::ANY,
        _ => return None,
    };
    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_sorted() {
        let mut sorted = BUILTINS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, BUILTINS);
    }

    #[test]
    fn test_is_builtin() {
        for name in BUILTINS {
            assert!(is_builtin(name), "{name}");
        }
        assert!(!is_builtin("fn"));
        assert!(!is_builtin("strings.ToUpper"));
        assert!(!is_builtin(""));
        assert!(!is_builtin("Len"));
    }

    #[test]
    fn test_basic_type_aliases() {
        assert_eq!(basic_type("byte"), Some(Idx::UINT8));
        assert_eq!(basic_type("rune"), Some(Idx::INT32));
        assert_eq!(basic_type("float64"), Some(Idx::FLOAT64));
        assert_eq!(basic_type("Stringer"), None);
    }

    #[test]
    fn test_every_predeclared_index_has_a_spelling() {
        for raw in 0..Idx::PREDECLARED_COUNT {
            let idx = Idx::from_raw(raw);
            let name = idx.name().unwrap_or_default();
            assert_eq!(basic_type(name), Some(idx));
        }
    }
}
