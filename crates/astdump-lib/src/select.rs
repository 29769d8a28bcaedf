//! Root selection and marker scanning.
//!
//! A root marker is a comment such as `// $Example1` or `# $Example1`. It
//! attaches to the nearest enclosing declaration; selecting `Example1` dumps
//! that declaration alone.

use indexmap::IndexMap;

use astdump_core::{NodeKind, SyntaxNode, Tree};

use crate::traverse::PreOrder;
use crate::{Config, Error, Result};

/// Characters that open a comment in the languages front-ends produce trees for.
const COMMENT_PUNCTUATION: &[char] = &['/', '#', '*', '-', ';', '!'];

/// A marker comment and the declaration it selects.
#[derive(Clone, Copy, Debug)]
pub struct RootMarker<'t> {
    pub name: &'t str,
    pub declaration: &'t SyntaxNode,
    pub comment: &'t SyntaxNode,
}

/// All markers of a tree, in order of first appearance.
#[derive(Clone, Debug, Default)]
pub struct MarkerIndex<'t> {
    markers: Vec<RootMarker<'t>>,
    by_name: IndexMap<&'t str, Vec<usize>>,
}

impl<'t> MarkerIndex<'t> {
    /// Scan every top-level node for marker comments.
    pub fn scan(tree: &'t Tree, prefix: &str) -> Self {
        let mut index = Self::default();

        for top in tree.nodes() {
            let mut declarations: Vec<(usize, &'t SyntaxNode)> = Vec::new();
            for visit in PreOrder::new(top) {
                while declarations
                    .last()
                    .is_some_and(|&(depth, _)| depth >= visit.depth)
                {
                    declarations.pop();
                }

                let kind = visit.node.kind();
                if kind.is_some_and(NodeKind::is_declaration) {
                    declarations.push((visit.depth, visit.node));
                    continue;
                }
                if kind != Some(NodeKind::Comment) {
                    continue;
                }
                let Some(name) = visit.node.label().and_then(|text| parse_marker(text, prefix))
                else {
                    continue;
                };

                match declarations.last() {
                    Some(&(_, declaration)) => index.insert(RootMarker {
                        name,
                        declaration,
                        comment: visit.node,
                    }),
                    None => tracing::debug!(marker = name, "marker outside any declaration ignored"),
                }
            }
        }

        tracing::debug!(markers = index.markers.len(), "scanned root markers");
        index
    }

    fn insert(&mut self, marker: RootMarker<'t>) {
        let hits = self.by_name.entry(marker.name).or_default();
        let seen = hits
            .iter()
            .any(|&i| std::ptr::eq(self.markers[i].declaration, marker.declaration));
        if seen {
            return;
        }
        hits.push(self.markers.len());
        self.markers.push(marker);
    }

    /// Resolve a marker identifier to its declaration.
    pub fn find(&self, name: &str) -> Result<&'t SyntaxNode> {
        match self.by_name.get(name).map(Vec::as_slice) {
            Some([only]) => Ok(self.markers[*only].declaration),
            Some(hits) if !hits.is_empty() => Err(Error::AmbiguousRoot {
                name: name.to_owned(),
                count: hits.len(),
            }),
            _ => Err(Error::RootNotFound(name.to_owned())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RootMarker<'t>> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Extract the marker identifier from a comment's text.
///
/// Leading comment punctuation and whitespace are skipped; the rest must start
/// with `prefix` followed by an identifier.
pub fn parse_marker<'a>(comment: &'a str, prefix: &str) -> Option<&'a str> {
    let body = comment
        .trim_start()
        .trim_start_matches(COMMENT_PUNCTUATION)
        .trim_start();
    let rest = body.strip_prefix(prefix)?;
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '.' | ':')))
        .unwrap_or(rest.len());
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

/// Roots to dump, in source order.
///
/// Without a target every top-level node is a root (synthetic ones only when
/// the config includes them). With a target, the single declaration carrying
/// that marker; the target may be given with or without the marker prefix.
pub fn select_roots<'t>(
    tree: &'t Tree,
    target: Option<&str>,
    config: &Config,
) -> Result<Vec<&'t SyntaxNode>> {
    let Some(target) = target else {
        return Ok(tree
            .nodes()
            .iter()
            .filter(|node| config.include_synthetic || !node.is_synthetic())
            .collect());
    };

    let name = target.strip_prefix(config.marker_prefix.as_str()).unwrap_or(target);
    let index = MarkerIndex::scan(tree, &config.marker_prefix);
    let root = index.find(name)?;
    tracing::debug!(marker = name, kind = root.tag(), "selected root by marker");
    Ok(vec![root])
}
