//! Registry of every checker known to gocrit.

use crate::{ExprChecker, Tag, UnlambdaChecker};

static UNLAMBDA: UnlambdaChecker = UnlambdaChecker;

static CHECKERS: &[&dyn ExprChecker] = &[&UNLAMBDA];

/// Lookup of checkers by name and tag.
///
/// Checkers are zero-sized statics, so the registry hands out `'static`
/// references and costs nothing to create.
pub struct CheckerRegistry {
    _private: (),
}

impl CheckerRegistry {
    pub fn new() -> Self {
        CheckerRegistry { _private: () }
    }

    pub fn get(&self, name: &str) -> Option<&'static dyn ExprChecker> {
        self.iter().find(|c| c.info().name == name)
    }

    /// All checkers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn ExprChecker> {
        CHECKERS.iter().copied()
    }

    pub fn with_tag(&self, tag: Tag) -> impl Iterator<Item = &'static dyn ExprChecker> {
        self.iter().filter(move |c| c.info().has_tag(tag))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.iter().map(|c| c.info().name)
    }

    pub fn len(&self) -> usize {
        CHECKERS.len()
    }

    pub fn is_empty(&self) -> bool {
        CHECKERS.is_empty()
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
