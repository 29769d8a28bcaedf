//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use std::path::Path;

use crate::span::FileId;
use crate::tree::Tree;

impl Tree {
    pub(crate) fn ensure_file(&self, id: FileId) -> &Path {
        self.files().nth(id.as_u32() as usize).map(|(_, path)| path).unwrap_or_else(|| {
            panic!(
                "Tree: file {} not in file table of {} entries \
                 (FileId must come from this tree's builder or document)",
                id.as_u32(),
                self.file_count()
            )
        })
    }
}
