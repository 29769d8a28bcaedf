//! Per-node line rendering.

use std::fmt;
use std::marker::PhantomData;

use astdump_core::{NodeKind, Position, SourceSpan, SyntaxNode, Tree};

use crate::location::PathRenderer;
use crate::traverse::Visit;
use crate::{Config, Error, Result};

/// Rendered source location, `file` already relative to the base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub start: Position,
    pub end: Position,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.file, self.start, self.end)
    }
}

/// One line of a dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpEntry {
    pub id: u32,
    pub depth: usize,
    pub kind: NodeKind,
    pub label: Option<String>,
    pub location: Option<Location>,
}

impl DumpEntry {
    /// Render the entry as a line, without the trailing newline.
    pub fn render(&self, indent_unit: &str) -> String {
        let mut line = format!("{}{}: {}", indent_unit.repeat(self.depth), self.id, self.kind);
        if let Some(label) = &self.label {
            line.push_str(" \"");
            line.push_str(&escape_label(label));
            line.push('"');
        }
        if let Some(location) = &self.location {
            line.push_str(&format!(" ({location})"));
        }
        line
    }
}

/// Turns visited nodes into dump entries.
///
/// File paths are rendered once per tree file, up front.
pub struct Formatter<'t> {
    paths: Vec<String>,
    tree: PhantomData<&'t Tree>,
}

impl<'t> Formatter<'t> {
    pub fn new(tree: &'t Tree, config: &Config) -> Self {
        let renderer = PathRenderer::from_config(config);
        let paths = tree.files().map(|(_, path)| renderer.render(path)).collect();
        Self {
            paths,
            tree: PhantomData,
        }
    }

    pub fn entry(&self, visit: Visit<'t>) -> Result<DumpEntry> {
        let node = visit.node;
        let location = node.span().map(|span| self.location(span));
        let kind = node.kind().ok_or_else(|| Error::UnknownNodeKind {
            tag: node.tag().to_owned(),
            location: self.describe(node, location.as_ref()),
        })?;

        Ok(DumpEntry {
            id: visit.id,
            depth: visit.depth,
            kind,
            label: node.label().map(str::to_owned),
            location,
        })
    }

    fn location(&self, span: &SourceSpan) -> Location {
        // Validated trees only carry spans into their own file table.
        Location {
            file: self.paths[span.file.as_u32() as usize].clone(),
            start: span.start,
            end: span.end,
        }
    }

    fn describe(&self, node: &SyntaxNode, location: Option<&Location>) -> String {
        match location {
            Some(location) => location.to_string(),
            None if node.is_synthetic() => "<synthetic node>".to_owned(),
            None => "<no location>".to_owned(),
        }
    }
}

/// Escape a label for printing between double quotes.
pub fn escape_label(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c if c.is_control() => result.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => result.push(c),
        }
    }
    result
}
