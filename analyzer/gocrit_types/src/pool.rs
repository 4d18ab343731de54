//! Hash-consed type storage.
//!
//! Items are `(tag, data)` pairs. Simple containers keep their child in
//! `data`; everything wider stores its payload in a shared `extra` array
//! and keeps the offset in `data`. Unnamed types are deduplicated on
//! `(tag, payload)`, so construction returns the existing index whenever
//! an identical type was built before.

mod construct;
mod format;

use rustc_hash::FxHashMap;

use crate::{Idx, Tag};

pub use construct::{ChanDir, Signature};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Item {
    tag: Tag,
    data: u32,
}

#[derive(Clone, Debug)]
struct NamedType {
    name: String,
    underlying: Idx,
}

/// Storage for every type of a source unit.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    named: Vec<NamedType>,
    dedup: FxHashMap<(Tag, Vec<u32>), Idx>,
}

impl Pool {
    /// Create a pool holding the predeclared types at their fixed indices.
    pub fn new() -> Self {
        let items = (0..Idx::PREDECLARED_COUNT)
            .map(|_| Item {
                tag: Tag::Basic,
                data: 0,
            })
            .collect();
        Pool {
            items,
            extra: Vec::new(),
            named: Vec::new(),
            dedup: FxHashMap::default(),
        }
    }

    /// Number of types in the pool, predeclared ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Kind of a type, or `None` for `Idx::NONE` and foreign indices.
    pub fn tag(&self, idx: Idx) -> Option<Tag> {
        self.item(idx).map(|item| item.tag)
    }

    /// Go type identity.
    #[inline]
    pub fn identical(&self, a: Idx, b: Idx) -> bool {
        !a.is_none() && a == b
    }

    fn item(&self, idx: Idx) -> Option<Item> {
        self.items.get(idx.raw() as usize).copied()
    }

    fn next_idx(&self) -> Idx {
        Idx::from_raw(u32::try_from(self.items.len()).unwrap_or(u32::MAX))
    }

    fn push(&mut self, tag: Tag, data: u32) -> Idx {
        let idx = self.next_idx();
        self.items.push(Item { tag, data });
        idx
    }

    /// Intern a type whose payload fits in `data`.
    fn intern(&mut self, tag: Tag, data: u32) -> Idx {
        let key = (tag, vec![data]);
        if let Some(&idx) = self.dedup.get(&key) {
            return idx;
        }
        let idx = self.push(tag, data);
        self.dedup.insert(key, idx);
        idx
    }

    /// Intern a type whose payload lives in `extra`.
    fn intern_complex(&mut self, tag: Tag, payload: &[u32]) -> Idx {
        debug_assert!(tag.uses_extra());
        let key = (tag, payload.to_vec());
        if let Some(&idx) = self.dedup.get(&key) {
            return idx;
        }
        let offset = construct::len_u32(self.extra.len());
        self.extra.extend_from_slice(payload);
        let idx = self.push(tag, offset);
        self.dedup.insert(key, idx);
        idx
    }

    fn extra_at(&self, idx: Idx, tag: Tag) -> Option<&[u32]> {
        let item = self.item(idx)?;
        if item.tag != tag {
            return None;
        }
        self.extra.get(item.data as usize..)
    }

    fn child(&self, idx: Idx, tag: Tag) -> Option<Idx> {
        let item = self.item(idx)?;
        (item.tag == tag).then_some(Idx::from_raw(item.data))
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
