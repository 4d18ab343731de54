//! gocrit types - static types and identifier bindings.
//!
//! Checkers never run a type checker themselves. They ask a [`TypeInfo`]
//! for the static type of an expression and for the kind of entity an
//! identifier is bound to. Whatever lowered the source (a host adapter, a
//! test fixture) fills a [`TypeTable`] once; checkers then read it
//! concurrently.
//!
//! # Type Identity
//!
//! Every type lives in a [`Pool`] and is referred to by an [`Idx`]. Unnamed
//! composite types are hash-consed, so two structurally identical types
//! always share one index. Named types are nominal: each declaration gets a
//! fresh index. Go type identity therefore reduces to `Idx` equality.

mod idx;
mod object;
mod pool;
mod table;
mod tag;
pub mod universe;

pub use idx::Idx;
pub use object::ObjectKind;
pub use pool::{ChanDir, Pool, Signature};
pub use table::{TypeInfo, TypeTable};
pub use tag::Tag;
