//! Syntax tree nodes.

use crate::kind::NodeKind;
use crate::span::SourceSpan;

/// One node of a syntax tree.
///
/// Children are owned, so a node can never be its own ancestor. Nodes are
/// assembled by value (`with_*` methods) and become read-only once moved into
/// a `Tree`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    tag: String,
    label: Option<String>,
    span: Option<SourceSpan>,
    synthetic: bool,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a node with a raw front-end tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: None,
            span: None,
            synthetic: false,
            children: Vec::new(),
        }
    }

    /// Create a node of a known kind.
    pub fn of(kind: NodeKind) -> Self {
        Self::new(kind.name())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Mark the node as inserted by the front-end (not present in source text).
    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntaxNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Front-end tag exactly as supplied.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Resolved kind, or `None` when the tag is outside the enumeration.
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_tag(&self.tag)
    }

    /// Label text; empty labels read as absent.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }

    pub fn span(&self) -> Option<&SourceSpan> {
        self.span.as_ref()
    }

    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

// Deep trees would overflow the stack with the derived recursive drop.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
