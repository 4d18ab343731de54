//! Interned identifiers.

use std::fmt;

const SHARD_BITS: u32 = 4;
const LOCAL_BITS: u32 = u32::BITS - SHARD_BITS;

/// Handle to a string held by a [`StringInterner`](crate::StringInterner).
///
/// The high bits select the interner shard and the low bits index into it.
/// Handles from one interner are equal exactly when their text is.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, always the first entry of shard 0.
    pub const EMPTY: Name = Name(0);

    pub const NUM_SHARDS: usize = 1 << SHARD_BITS;

    pub const MAX_LOCAL: u32 = (1 << LOCAL_BITS) - 1;

    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!((shard as usize) < Self::NUM_SHARDS);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << LOCAL_BITS) | local)
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> LOCAL_BITS) as usize
    }

    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_and_local_survive_packing() {
        let last = Name::new(15, Name::MAX_LOCAL);
        assert_eq!(last.shard(), 15);
        assert_eq!(last.local(), Name::MAX_LOCAL as usize);
        assert_ne!(Name::new(1, 7), Name::new(2, 7));
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Name::default(), Name::EMPTY);
        assert_eq!(Name::EMPTY.raw(), 0);
        assert_eq!(format!("{:?}", Name::new(3, 17)), "Name(3:17)");
    }
}
