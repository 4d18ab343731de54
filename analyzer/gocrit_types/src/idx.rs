//! Type index handle.

use std::fmt;

/// A 32-bit index into the type [`Pool`](crate::Pool).
///
/// Predeclared basic types have fixed indices, so they can be named without
/// a pool. Two indices from the same pool are equal iff the types are
/// identical.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Predeclared Types (indices 0-18) ===

    /// `bool`
    pub const BOOL: Self = Self(0);
    /// `string`
    pub const STRING: Self = Self(1);
    /// `int`
    pub const INT: Self = Self(2);
    /// `int8`
    pub const INT8: Self = Self(3);
    /// `int16`
    pub const INT16: Self = Self(4);
    /// `int32`, also spelled `rune`
    pub const INT32: Self = Self(5);
    /// `int64`
    pub const INT64: Self = Self(6);
    /// `uint`
    pub const UINT: Self = Self(7);
    /// `uint8`, also spelled `byte`
    pub const UINT8: Self = Self(8);
    /// `uint16`
    pub const UINT16: Self = Self(9);
    /// `uint32`
    pub const UINT32: Self = Self(10);
    /// `uint64`
    pub const UINT64: Self = Self(11);
    /// `uintptr`
    pub const UINTPTR: Self = Self(12);
    /// `float32`
    pub const FLOAT32: Self = Self(13);
    /// `float64`
    pub const FLOAT64: Self = Self(14);
    /// `complex64`
    pub const COMPLEX64: Self = Self(15);
    /// `complex128`
    pub const COMPLEX128: Self = Self(16);
    /// The predeclared `error` interface.
    pub const ERROR: Self = Self(17);
    /// `any`, the empty interface.
    pub const ANY: Self = Self(18);

    /// `byte` is an alias, not a distinct type.
    pub const BYTE: Self = Self::UINT8;
    /// `rune` is an alias, not a distinct type.
    pub const RUNE: Self = Self::INT32;

    /// Number of pre-interned predeclared types.
    pub const PREDECLARED_COUNT: u32 = 19;

    /// Sentinel for "no type".
    pub const NONE: Self = Self(u32::MAX);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Whether this is one of the fixed predeclared indices.
    #[inline]
    pub const fn is_predeclared(self) -> bool {
        self.0 < Self::PREDECLARED_COUNT
    }

    /// Go spelling of a predeclared type.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("bool"),
            1 => Some("string"),
            2 => Some("int"),
            3 => Some("int8"),
            4 => Some("int16"),
            5 => Some("int32"),
            6 => Some("int64"),
            7 => Some("uint"),
            8 => Some("uint8"),
            9 => Some("uint16"),
            10 => Some("uint32"),
            11 => Some("uint64"),
            12 => Some("uintptr"),
            13 => Some("float32"),
            14 => Some("float64"),
            15 => Some("complex64"),
            16 => Some("complex128"),
            17 => Some("error"),
            18 => Some("any"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Idx::NONE")
        } else if let Some(name) = self.name() {
            write!(f, "Idx({name})")
        } else {
            write!(f, "Idx({})", self.0)
        }
    }
}

gocrit_ir::static_assert_size!(Idx, 4);
