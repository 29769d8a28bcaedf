//! astdump: deterministic structural dumps of syntax trees.
//!
//! A front-end hands over a [`Tree`]; the dumper selects roots (all top-level
//! nodes, or the declaration carrying a root marker), walks each root in
//! pre-order and renders one line per node:
//!
//! ```text
//! <indent><id>: <Kind>[ "<label>"] (<file>:<line>:<col>-<line>:<col>)
//! ```
//!
//! # Example
//!
//! ```
//! use astdump_lib::{Dumper, NodeKind, SourceSpan, SyntaxNode, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new("src/Main.java");
//! builder.push(
//!     SyntaxNode::of(NodeKind::ClassDeclaration)
//!         .with_label("Main")
//!         .with_span(SourceSpan::at(1, 1, 3, 2)),
//! );
//! let tree = builder.build().expect("valid tree");
//!
//! let text = Dumper::new(&tree).dump().expect("dump");
//! assert_eq!(text, "0: ClassDeclaration \"Main\" (src/Main.java:1:1-3:2)\n");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod dump;
pub mod format;
pub mod location;
pub mod select;
pub mod traverse;

#[cfg(test)]
mod format_tests;
#[cfg(test)]
mod test_utils;

pub use astdump_core::{FileId, NodeKind, Position, SourceSpan, SyntaxNode, Tree, TreeBuilder};
pub use config::Config;
pub use dump::{Dumper, dump, dump_document};
pub use format::{DumpEntry, Formatter, Location, escape_label};
pub use select::{MarkerIndex, RootMarker, select_roots};
pub use traverse::{FIRST_ID, PreOrder, Visit};

/// Errors that can occur while dumping a tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tree document could not be loaded or violates structural invariants.
    #[error(transparent)]
    Tree(#[from] astdump_core::Error),

    #[error("root marker `{0}` not found")]
    RootNotFound(String),

    /// Marker identifier attached to more than one declaration.
    #[error("root marker `{name}` is ambiguous: attached to {count} declarations")]
    AmbiguousRoot { name: String, count: usize },

    /// Front-end tag outside the kind enumeration.
    #[error("unknown node kind `{tag}` at {location}")]
    UnknownNodeKind { tag: String, location: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to write dump")]
    Write(#[from] std::fmt::Error),
}

/// Result type for dump operations.
pub type Result<T> = std::result::Result<T, Error>;
