//! Validated syntax trees and their file table.

use std::path::{Path, PathBuf};

use crate::document::parse_tree_document;
use crate::node::SyntaxNode;
use crate::span::{FileId, SourceSpan};
use crate::validate;

/// Full parse result for one source unit.
///
/// Immutable and structurally valid by construction: the only ways to obtain
/// one (`Tree::new`, `Tree::from_json`, `TreeBuilder::build`) run validation.
#[derive(Clone, Debug)]
pub struct Tree {
    files: Vec<PathBuf>,
    nodes: Vec<SyntaxNode>,
}

impl Tree {
    /// Build a tree from a file table (origin first) and its top-level nodes.
    pub fn new(files: Vec<PathBuf>, nodes: Vec<SyntaxNode>) -> crate::Result<Self> {
        let tree = Self { files, nodes };
        validate::check(&tree)?;
        Ok(tree)
    }

    /// Parse and validate a JSON tree document.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        parse_tree_document(json)?.into_tree()
    }

    /// Top-level nodes in source order.
    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Path of the file the tree was parsed from.
    pub fn origin(&self) -> &Path {
        self.file(FileId::ORIGIN)
    }

    /// Path of a file in this tree's file table.
    pub fn file(&self, id: FileId) -> &Path {
        self.ensure_file(id)
    }

    /// Iterate over the file table.
    pub fn files(&self) -> impl Iterator<Item = (FileId, &Path)> {
        self.files
            .iter()
            .enumerate()
            .map(|(idx, path)| (FileId(idx as u32), path.as_path()))
    }

    /// Render a span with the file path as stored, e.g. `src/A.java:3:5-3:9`.
    ///
    /// Intended for error messages; dumps render paths through their own base.
    pub fn describe(&self, span: &SourceSpan) -> String {
        let file = match self.files.get(span.file.0 as usize) {
            Some(path) => path.display().to_string(),
            None => format!("file#{}", span.file.0),
        };
        format!("{}:{}-{}", file, span.start, span.end)
    }

    pub(crate) fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Incremental tree construction for front-ends that build nodes in memory.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    files: Vec<PathBuf>,
    nodes: Vec<SyntaxNode>,
}

impl TreeBuilder {
    /// Start a tree parsed from `origin`.
    pub fn new(origin: impl Into<PathBuf>) -> Self {
        Self {
            files: vec![origin.into()],
            nodes: Vec::new(),
        }
    }

    /// Register an additional file (e.g. an included header) and return its id.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(path.into());
        id
    }

    /// Append a top-level node.
    pub fn push(&mut self, node: SyntaxNode) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn build(self) -> crate::Result<Tree> {
        Tree::new(self.files, self.nodes)
    }
}
