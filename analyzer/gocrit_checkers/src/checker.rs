//! The checker interface and its registration metadata.

use std::fmt;

use gocrit_diagnostic::Diagnostic;
use gocrit_ir::{Expr, ExprArena, ExprId, Name, StringInterner};
use gocrit_types::TypeInfo;

/// Category tag of a checker.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Tag {
    /// Finds likely bugs.
    Diagnostic,
    /// Finds code that could be written more plainly.
    Style,
    Performance,
    /// Not yet stable enough to enable by default.
    Experimental,
    /// Reflects a matter of taste.
    Opinionated,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Diagnostic,
        Tag::Style,
        Tag::Performance,
        Tag::Experimental,
        Tag::Opinionated,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Diagnostic => "diagnostic",
            Tag::Style => "style",
            Tag::Performance => "performance",
            Tag::Experimental => "experimental",
            Tag::Opinionated => "opinionated",
        }
    }

    /// Look a tag up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.as_str() == name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a checker, consumed by configuration and docs.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CheckerInfo {
    pub name: &'static str,
    pub tags: &'static [Tag],
    pub summary: &'static str,
    /// Code the checker reports.
    pub before: &'static str,
    /// The same code after following the suggestion.
    pub after: &'static str,
}

impl CheckerInfo {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Read-only view of one source unit.
#[derive(Copy, Clone)]
pub struct CheckContext<'a> {
    pub arena: &'a ExprArena,
    pub interner: &'a StringInterner,
    pub types: &'a dyn TypeInfo,
}

impl<'a> CheckContext<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner, types: &'a dyn TypeInfo) -> Self {
        CheckContext {
            arena,
            interner,
            types,
        }
    }

    /// Expression by ID; `None` for IDs outside this unit.
    pub fn expr(&self, id: ExprId) -> Option<&'a Expr> {
        self.arena.try_get_expr(id)
    }

    pub fn text(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }
}

/// A checker that inspects single expressions.
pub trait ExprChecker: Send + Sync {
    fn info(&self) -> &'static CheckerInfo;

    /// Inspect one candidate expression. Returning `None` means the checker
    /// does not apply; it is never an error.
    fn check_expr(&self, cx: &CheckContext<'_>, expr: ExprId) -> Option<Diagnostic>;
}
