//! Type construction and inspection.

use super::NamedType;
use crate::{Idx, Pool, Tag};

/// Channel direction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

impl ChanDir {
    const fn to_raw(self) -> u32 {
        match self {
            ChanDir::Both => 0,
            ChanDir::Send => 1,
            ChanDir::Recv => 2,
        }
    }

    const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => ChanDir::Send,
            2 => ChanDir::Recv,
            _ => ChanDir::Both,
        }
    }
}

/// Decoded function signature.
///
/// For a variadic signature the final parameter is the slice type the
/// variadic arguments are collected into, as in Go: `func(xs ...int)` has
/// `params == [[]int]` and `variadic == true`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Signature {
    pub params: Vec<Idx>,
    pub results: Vec<Idx>,
    pub variadic: bool,
}

impl Signature {
    pub fn new(params: Vec<Idx>, results: Vec<Idx>) -> Self {
        Signature {
            params,
            results,
            variadic: false,
        }
    }
}

pub(super) fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("type payload too long: {len} entries"))
}

impl Pool {
    // === Simple Containers ===

    /// `[]elem`
    pub fn slice(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::Slice, elem.raw())
    }

    /// `*elem`
    pub fn pointer(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::Pointer, elem.raw())
    }

    // === Wider Containers ===

    /// `[len]elem`
    #[expect(
        clippy::cast_possible_truncation,
        reason = "array length is split into two 32-bit halves"
    )]
    pub fn array(&mut self, len: u64, elem: Idx) -> Idx {
        let lo = len as u32;
        let hi = (len >> 32) as u32;
        self.intern_complex(Tag::Array, &[lo, hi, elem.raw()])
    }

    /// `map[key]value`
    pub fn map(&mut self, key: Idx, value: Idx) -> Idx {
        self.intern_complex(Tag::Map, &[key.raw(), value.raw()])
    }

    /// `chan elem`, `chan<- elem` or `<-chan elem`.
    pub fn chan(&mut self, dir: ChanDir, elem: Idx) -> Idx {
        self.intern_complex(Tag::Chan, &[dir.to_raw(), elem.raw()])
    }

    /// Tuple of multiple results.
    pub fn tuple(&mut self, elems: &[Idx]) -> Idx {
        let mut payload = Vec::with_capacity(elems.len() + 1);
        payload.push(len_u32(elems.len()));
        payload.extend(elems.iter().map(|e| e.raw()));
        self.intern_complex(Tag::Tuple, &payload)
    }

    // === Functions ===

    /// Function type. A variadic signature's last parameter must already
    /// be a slice type; see [`Pool::variadic_signature`].
    pub fn signature(&mut self, sig: &Signature) -> Idx {
        debug_assert!(
            !sig.variadic
                || sig
                    .params
                    .last()
                    .is_some_and(|&p| self.tag(p) == Some(Tag::Slice)),
            "variadic signature must end in a slice parameter"
        );
        let mut payload = Vec::with_capacity(sig.params.len() + sig.results.len() + 3);
        payload.push(u32::from(sig.variadic));
        payload.push(len_u32(sig.params.len()));
        payload.extend(sig.params.iter().map(|p| p.raw()));
        payload.push(len_u32(sig.results.len()));
        payload.extend(sig.results.iter().map(|r| r.raw()));
        self.intern_complex(Tag::Signature, &payload)
    }

    /// `func(fixed..., ...elem) results`
    pub fn variadic_signature(&mut self, fixed: &[Idx], elem: Idx, results: &[Idx]) -> Idx {
        let rest = self.slice(elem);
        let mut params = fixed.to_vec();
        params.push(rest);
        self.signature(&Signature {
            params,
            results: results.to_vec(),
            variadic: true,
        })
    }

    // === Named Types ===

    /// Declare a named type. Every call yields a distinct type, even for
    /// the same name and underlying type.
    pub fn named(&mut self, name: &str, underlying: Idx) -> Idx {
        let slot = len_u32(self.named.len());
        self.named.push(NamedType {
            name: name.to_owned(),
            underlying,
        });
        self.push(Tag::Named, slot)
    }

    // === Inspection ===

    /// Element type of a slice.
    pub fn slice_elem(&self, idx: Idx) -> Option<Idx> {
        self.child(idx, Tag::Slice)
    }

    /// Pointee of a pointer.
    pub fn pointer_elem(&self, idx: Idx) -> Option<Idx> {
        self.child(idx, Tag::Pointer)
    }

    /// `(len, elem)` of an array.
    pub fn array_parts(&self, idx: Idx) -> Option<(u64, Idx)> {
        match self.extra_at(idx, Tag::Array)? {
            [lo, hi, elem, ..] => {
                let len = (u64::from(*hi) << 32) | u64::from(*lo);
                Some((len, Idx::from_raw(*elem)))
            }
            _ => None,
        }
    }

    /// `(key, value)` of a map.
    pub fn map_parts(&self, idx: Idx) -> Option<(Idx, Idx)> {
        match self.extra_at(idx, Tag::Map)? {
            [key, value, ..] => Some((Idx::from_raw(*key), Idx::from_raw(*value))),
            _ => None,
        }
    }

    /// `(dir, elem)` of a channel.
    pub fn chan_parts(&self, idx: Idx) -> Option<(ChanDir, Idx)> {
        match self.extra_at(idx, Tag::Chan)? {
            [dir, elem, ..] => Some((ChanDir::from_raw(*dir), Idx::from_raw(*elem))),
            _ => None,
        }
    }

    /// Elements of a tuple.
    pub fn tuple_elems(&self, idx: Idx) -> Option<Vec<Idx>> {
        let (&n, rest) = self.extra_at(idx, Tag::Tuple)?.split_first()?;
        let elems = rest.get(..n as usize)?;
        Some(elems.iter().copied().map(Idx::from_raw).collect())
    }

    /// Decode a function type.
    pub fn signature_of(&self, idx: Idx) -> Option<Signature> {
        let payload = self.extra_at(idx, Tag::Signature)?;
        let (&variadic, rest) = payload.split_first()?;
        let (&n, rest) = rest.split_first()?;
        let params = rest.get(..n as usize)?;
        let (&m, rest) = rest.get(n as usize..)?.split_first()?;
        let results = rest.get(..m as usize)?;
        Some(Signature {
            params: params.iter().copied().map(Idx::from_raw).collect(),
            results: results.iter().copied().map(Idx::from_raw).collect(),
            variadic: variadic != 0,
        })
    }

    /// Declared name of a named type.
    pub fn named_name(&self, idx: Idx) -> Option<&str> {
        let slot = self.child(idx, Tag::Named)?;
        self.named.get(slot.raw() as usize).map(|n| n.name.as_str())
    }

    /// Underlying type of a named type; other types are their own
    /// underlying type.
    pub fn underlying(&self, idx: Idx) -> Idx {
        self.child(idx, Tag::Named)
            .and_then(|slot| self.named.get(slot.raw() as usize))
            .map_or(idx, |n| n.underlying)
    }
}
