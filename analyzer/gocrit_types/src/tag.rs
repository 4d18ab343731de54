//! Type kind tag.

use std::fmt;

/// Kind of a pooled type. Determines how an item's `data` is read.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Predeclared basic type; data unused.
    Basic = 0,
    /// `[]T`; data = elem.
    Slice = 1,
    /// `*T`; data = elem.
    Pointer = 2,
    /// `[N]T`; data = extra `[len_lo, len_hi, elem]`.
    Array = 3,
    /// `map[K]V`; data = extra `[key, value]`.
    Map = 4,
    /// `chan T`; data = extra `[dir, elem]`.
    Chan = 5,
    /// Result tuple; data = extra `[n, elems...]`.
    Tuple = 6,
    /// `func(...) ...`; data = extra `[variadic, n, params..., m, results...]`.
    Signature = 7,
    /// Declared type; data = slot in the named-type table.
    Named = 8,
}

impl Tag {
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Basic => "basic",
            Tag::Slice => "slice",
            Tag::Pointer => "pointer",
            Tag::Array => "array",
            Tag::Map => "map",
            Tag::Chan => "chan",
            Tag::Tuple => "tuple",
            Tag::Signature => "signature",
            Tag::Named => "named",
        }
    }

    /// Whether `data` points into the pool's extra array.
    pub const fn uses_extra(self) -> bool {
        matches!(
            self,
            Tag::Array | Tag::Map | Tag::Chan | Tag::Tuple | Tag::Signature
        )
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
