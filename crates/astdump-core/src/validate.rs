//! Structural validation run on every tree construction.

use crate::node::SyntaxNode;
use crate::span::SourceSpan;
use crate::tree::Tree;
use crate::{Error, MalformedReason};

/// Check the structural invariants of `tree`, reporting the first offending
/// node in pre-order.
///
/// Each span is compared with the nearest spanned ancestor in the same file.
/// Span-less nodes are transparent, and so are ancestors in other files: an
/// origin-file node below an included-file node is still checked against its
/// origin-file ancestor.
pub(crate) fn check(tree: &Tree) -> Result<(), Error> {
    if tree.file_count() == 0 {
        return Err(Error::MalformedTree {
            location: "<tree>".to_owned(),
            reason: MalformedReason::NoFiles,
        });
    }

    let mut stack: Vec<(&SyntaxNode, Enclosing<'_>)> = tree
        .nodes()
        .iter()
        .rev()
        .map(|node| (node, Enclosing::default()))
        .collect();

    while let Some((node, mut enclosing)) = stack.pop() {
        if let Some(span) = node.span() {
            check_span(tree, span, enclosing.get(span))?;
            enclosing.set(span);
        }
        stack.extend(
            node.children()
                .iter()
                .rev()
                .map(|child| (child, enclosing.clone())),
        );
    }
    Ok(())
}

/// Nearest spanned ancestor per file.
#[derive(Clone, Default)]
struct Enclosing<'t>(Vec<&'t SourceSpan>);

impl<'t> Enclosing<'t> {
    fn get(&self, span: &SourceSpan) -> Option<&'t SourceSpan> {
        self.0.iter().copied().find(|parent| parent.file == span.file)
    }

    fn set(&mut self, span: &'t SourceSpan) {
        match self.0.iter_mut().find(|parent| parent.file == span.file) {
            Some(slot) => *slot = span,
            None => self.0.push(span),
        }
    }
}

fn check_span(tree: &Tree, span: &SourceSpan, enclosing: Option<&SourceSpan>) -> Result<(), Error> {
    let malformed = |reason| Error::MalformedTree {
        location: tree.describe(span),
        reason,
    };

    if span.file.as_u32() as usize >= tree.file_count() {
        return Err(malformed(MalformedReason::UnknownFile(span.file.as_u32())));
    }
    for position in [span.start, span.end] {
        if !position.is_one_based() {
            return Err(malformed(MalformedReason::ZeroPosition(position)));
        }
    }
    if span.end < span.start {
        return Err(malformed(MalformedReason::InvertedSpan));
    }
    if let Some(parent) = enclosing
        && !parent.encloses(span)
    {
        return Err(malformed(MalformedReason::EscapesParent(
            tree.describe(parent),
        )));
    }
    Ok(())
}
