//! A file's worth of analyzed code.

use gocrit_diagnostic::SourceFile;
use gocrit_ir::{ExprArena, StmtRange};
use gocrit_types::TypeInfo;

/// One source file after parsing and type checking.
///
/// Names in `arena` are interned in the interner of the [`Linter`] that
/// lints the unit.
///
/// [`Linter`]: crate::Linter
pub struct SourceUnit {
    pub path: String,
    pub source: String,
    pub arena: ExprArena,
    pub types: Box<dyn TypeInfo>,
    /// Top-level statements; everything reachable from them is linted.
    pub roots: StmtRange,
}

impl SourceUnit {
    pub fn new(
        path: impl Into<String>,
        source: impl Into<String>,
        arena: ExprArena,
        types: impl TypeInfo + 'static,
        roots: StmtRange,
    ) -> Self {
        SourceUnit {
            path: path.into(),
            source: source.into(),
            arena,
            types: Box::new(types),
            roots,
        }
    }

    /// Position lookup for rendering this unit's diagnostics.
    pub fn source_file(&self) -> SourceFile {
        SourceFile::new(self.path.as_str(), self.source.as_str())
    }
}

impl std::fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceUnit")
            .field("path", &self.path)
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}
