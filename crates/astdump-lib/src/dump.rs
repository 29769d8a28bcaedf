//! Dump writer: assembles per-root lines into the final text.

use std::fmt::Write;

use astdump_core::{SyntaxNode, Tree};

use crate::format::{DumpEntry, Formatter};
use crate::select::select_roots;
use crate::traverse::PreOrder;
use crate::{Config, Result};

/// Builder-style dumper over one tree.
///
/// Output is one line per node, newline-terminated, with a blank line between
/// consecutive roots. The whole text is rendered before anything is returned
/// or written, so a failing root never leaves partial output behind.
pub struct Dumper<'t> {
    tree: &'t Tree,
    config: Config,
    target: Option<String>,
}

impl<'t> Dumper<'t> {
    pub fn new(tree: &'t Tree) -> Self {
        Self {
            tree,
            config: Config::default(),
            target: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Dump only the declaration carrying this root marker.
    pub fn target(mut self, name: Option<&str>) -> Self {
        self.target = name.map(str::to_owned);
        self
    }

    /// Entries for each selected root, in root order.
    pub fn entries(&self) -> Result<Vec<Vec<DumpEntry>>> {
        self.config.validate()?;
        let roots = select_roots(self.tree, self.target.as_deref(), &self.config)?;
        let formatter = Formatter::new(self.tree, &self.config);
        roots
            .into_iter()
            .map(|root| self.root_entries(&formatter, root))
            .collect()
    }

    pub fn dump(&self) -> Result<String> {
        let mut out = String::new();
        for (idx, entries) in self.entries()?.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            for entry in entries {
                out.push_str(&entry.render(&self.config.indent_unit));
                out.push('\n');
            }
            tracing::trace!(root = idx, entries = entries.len(), "rendered root");
        }
        Ok(out)
    }

    /// Write the dump into `w`. Nothing is written if any root fails.
    pub fn format(&self, w: &mut impl Write) -> Result<()> {
        let text = self.dump()?;
        w.write_str(&text)?;
        Ok(())
    }

    fn root_entries(&self, formatter: &Formatter<'t>, root: &'t SyntaxNode) -> Result<Vec<DumpEntry>> {
        PreOrder::new(root)
            .include_synthetic(self.config.include_synthetic)
            .map(|visit| formatter.entry(visit))
            .collect()
    }
}

/// Dump `tree` with `config`, optionally rooted at a marker.
pub fn dump(tree: &Tree, target: Option<&str>, config: &Config) -> Result<String> {
    Dumper::new(tree)
        .with_config(config.clone())
        .target(target)
        .dump()
}

/// Load a JSON tree document and dump it.
pub fn dump_document(json: &str, target: Option<&str>, config: &Config) -> Result<String> {
    let tree = Tree::from_json(json)?;
    dump(&tree, target, config)
}
