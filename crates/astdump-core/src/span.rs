//! Source positions and spans.

use std::fmt;

/// Handle to a file in a tree's file table.
///
/// `FileId::ORIGIN` is the file the tree was parsed from. Other ids come from
/// `TreeBuilder::add_file` or the document's `files` list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct FileId(pub(crate) u32);

impl FileId {
    /// The originating file of a tree.
    pub const ORIGIN: FileId = FileId(0);

    /// Raw index into the file table.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// 1-based line and column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, serde::Deserialize)]
#[serde(from = "(u32, u32)")]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub(crate) fn is_one_based(self) -> bool {
        self.line >= 1 && self.column >= 1
    }
}

impl From<(u32, u32)> for Position {
    fn from((line, column): (u32, u32)) -> Self {
        Self::new(line, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Region of a source file covered by a node. `end` is inclusive of the node's text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SourceSpan {
    pub file: FileId,
    pub start: Position,
    pub end: Position,
}

impl SourceSpan {
    pub fn new(file: FileId, start: Position, end: Position) -> Self {
        Self { file, start, end }
    }

    /// Span in the originating file.
    pub fn at(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self::new(
            FileId::ORIGIN,
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// Whether `other` lies within this span. Spans in different files never enclose each other.
    pub fn encloses(&self, other: &SourceSpan) -> bool {
        self.file == other.file && self.start <= other.start && other.end <= self.end
    }
}
