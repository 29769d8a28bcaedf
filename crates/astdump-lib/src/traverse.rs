//! Pre-order traversal with canonical ids.
//!
//! Ids are assigned in visitation order starting at [`FIRST_ID`] for every
//! root. They are only meaningful within one root's dump.

use std::slice;

use astdump_core::SyntaxNode;

/// Id of the root node in every dump.
pub const FIRST_ID: u32 = 0;

/// One visited node.
#[derive(Clone, Copy, Debug)]
pub struct Visit<'t> {
    pub id: u32,
    pub depth: usize,
    pub node: &'t SyntaxNode,
}

/// Depth-first pre-order iterator: parent before children, children left to right.
///
/// Keeps one child iterator per open ancestor, so auxiliary space is
/// proportional to depth, not to tree size.
pub struct PreOrder<'t> {
    root: Option<&'t SyntaxNode>,
    stack: Vec<slice::Iter<'t, SyntaxNode>>,
    next_id: u32,
    include_synthetic: bool,
}

impl<'t> PreOrder<'t> {
    pub fn new(root: &'t SyntaxNode) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
            next_id: FIRST_ID,
            include_synthetic: true,
        }
    }

    /// Skip synthetic descendants together with their subtrees.
    ///
    /// The root itself is always visited; callers decide whether a synthetic
    /// root is dumped at all.
    pub fn include_synthetic(mut self, value: bool) -> Self {
        self.include_synthetic = value;
        self
    }

    fn visit(&mut self, node: &'t SyntaxNode, depth: usize) -> Visit<'t> {
        let id = self.next_id;
        self.next_id += 1;
        self.stack.push(node.children().iter());
        Visit { id, depth, node }
    }
}

impl<'t> Iterator for PreOrder<'t> {
    type Item = Visit<'t>;

    fn next(&mut self) -> Option<Visit<'t>> {
        if let Some(root) = self.root.take() {
            return Some(self.visit(root, 0));
        }

        let include_synthetic = self.include_synthetic;
        loop {
            let depth = self.stack.len();
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(child) if !include_synthetic && child.is_synthetic() => continue,
                Some(child) => return Some(self.visit(child, depth)),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
