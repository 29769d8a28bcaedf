#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for astdump syntax trees.
//!
//! Two layers:
//! - **Document layer** (`RawTree`, `RawNode`): 1:1 mapping to the JSON tree document
//! - **Model layer** (`Tree`, `SyntaxNode`): validated, immutable tree handed to the dumper
//!
//! A `Tree` can only be obtained through validation, so holding one means the
//! structural invariants (1-based positions, known files, children enclosed by
//! their parent's span) already hold.

mod document;
mod invariants;
mod kind;
mod node;
mod span;
mod tree;
mod validate;


pub use document::{RawNode, RawSpan, RawTree, parse_tree_document};
pub use kind::NodeKind;
pub use node::SyntaxNode;
pub use span::{FileId, Position, SourceSpan};
pub use tree::{Tree, TreeBuilder};

/// Why a tree was rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("tree has no files")]
    NoFiles,

    #[error("span refers to unknown file #{0}")]
    UnknownFile(u32),

    /// Lines and columns are 1-based; zero means the front-end leaked a 0-based position.
    #[error("positions are 1-based, found {0}")]
    ZeroPosition(Position),

    #[error("span ends before it starts")]
    InvertedSpan,

    #[error("span is not enclosed by its parent span {0}")]
    EscapesParent(String),
}

/// Errors that can occur while building a tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structural invariant violation, reported at the offending node.
    #[error("malformed tree at {location}: {reason}")]
    MalformedTree {
        location: String,
        reason: MalformedReason,
    },

    /// Tree document is not valid JSON for the document schema.
    #[error("invalid tree document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Result type for tree construction.
pub type Result<T> = std::result::Result<T, Error>;
