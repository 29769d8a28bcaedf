//! JSON tree document: the interchange format between front-ends and astdump.
//!
//! ```json
//! {
//!   "files": ["src/Example1.java"],
//!   "nodes": [
//!     {
//!       "kind": "method_declaration",
//!       "label": "main",
//!       "span": { "file": 0, "start": [17, 5], "end": [30, 5] },
//!       "synthetic": false,
//!       "children": []
//!     }
//!   ]
//! }
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::node::SyntaxNode;
use crate::span::{FileId, Position, SourceSpan};
use crate::tree::Tree;

/// Raw tree document, 1:1 with the JSON.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTree {
    /// File table; entry 0 is the file the tree was parsed from.
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

/// Raw node definition.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNode {
    pub kind: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub span: Option<RawSpan>,
    #[serde(default)]
    pub synthetic: bool,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

/// Raw span: `[line, column]` pairs, 1-based.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSpan {
    #[serde(default)]
    pub file: u32,
    pub start: Position,
    pub end: Position,
}

/// Parse tree document content into its raw form.
///
/// Nesting depth is unbounded: the recursion limit is off and the parser
/// grows its stack on the heap as needed.
pub fn parse_tree_document(json: &str) -> Result<RawTree, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let raw = RawTree::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(raw)
}

impl RawTree {
    /// Convert into a validated `Tree`.
    pub fn into_tree(self) -> crate::Result<Tree> {
        let nodes = self.nodes.into_iter().map(RawNode::into_node).collect();
        Tree::new(self.files, nodes)
    }
}

impl RawNode {
    fn into_node(self) -> SyntaxNode {
        let mut stack: Vec<Pending> = Vec::new();
        let mut current = Pending::open(self);
        loop {
            if let Some(child) = current.children.next() {
                stack.push(std::mem::replace(&mut current, Pending::open(child)));
                continue;
            }
            let node = current.close();
            match stack.pop() {
                Some(parent) => {
                    current = parent;
                    current.built.push(node);
                }
                None => return node,
            }
        }
    }
}

/// A node whose children are still being converted.
struct Pending {
    node: SyntaxNode,
    children: std::vec::IntoIter<RawNode>,
    built: Vec<SyntaxNode>,
}

impl Pending {
    fn open(raw: RawNode) -> Self {
        let mut node = SyntaxNode::new(raw.kind);
        if let Some(label) = raw.label {
            node = node.with_label(label);
        }
        if let Some(span) = raw.span {
            node = node.with_span(span.into());
        }
        if raw.synthetic {
            node = node.synthetic();
        }
        Self {
            node,
            built: Vec::with_capacity(raw.children.len()),
            children: raw.children.into_iter(),
        }
    }

    fn close(self) -> SyntaxNode {
        self.node.with_children(self.built)
    }
}

impl From<RawSpan> for SourceSpan {
    fn from(raw: RawSpan) -> Self {
        SourceSpan::new(FileId(raw.file), raw.start, raw.end)
    }
}
