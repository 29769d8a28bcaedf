use std::path::{Path, PathBuf};

use astdump_lib::Dumper;

use super::loader::{LoadError, load_tree};

pub struct CheckArgs {
    pub trees: Vec<PathBuf>,
}

pub fn run(args: CheckArgs) {
    let mut failed = false;
    for path in &args.trees {
        match check_tree(path) {
            Ok(nodes) => {
                tracing::info!(path = %path.display(), nodes, "tree is valid");
                println!("ok: {}", path.display());
            }
            Err(e) => {
                eprintln!("error: {}: {}", path.display(), e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Validate structure and node kinds. Returns the number of nodes.
pub fn check_tree(path: &Path) -> Result<usize, LoadError> {
    let tree = load_tree(path)?;
    let entries = Dumper::new(&tree).entries()?;
    Ok(entries.iter().map(Vec::len).sum())
}
