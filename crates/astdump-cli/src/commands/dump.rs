use std::path::{Path, PathBuf};

use astdump_lib::{Config, Dumper};
use rayon::prelude::*;

use super::loader::{ConfigArgs, LoadError, load_tree};

pub struct DumpArgs {
    pub trees: Vec<PathBuf>,
    pub root: Option<String>,
    pub config: ConfigArgs,
    pub jobs: usize,
}

pub fn run(args: DumpArgs) {
    let config = match args.config.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let results = dump_all(&args.trees, args.root.as_deref(), &config, args.jobs);
    let report = Report::collect(&args.trees, results);

    print!("{}", report.output);
    for error in &report.errors {
        eprintln!("error: {}", error);
    }
    if !report.errors.is_empty() {
        std::process::exit(1);
    }
}

/// Dump every document, in parallel, keeping input order.
pub fn dump_all(
    trees: &[PathBuf],
    root: Option<&str>,
    config: &Config,
    jobs: usize,
) -> Vec<Result<String, LoadError>> {
    let work = || -> Vec<Result<String, LoadError>> {
        trees
            .par_iter()
            .map(|path| dump_one(path, root, config))
            .collect()
    };

    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(work),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to the global thread pool");
            work()
        }
    }
}

fn dump_one(path: &Path, root: Option<&str>, config: &Config) -> Result<String, LoadError> {
    let tree = load_tree(path)?;
    let text = Dumper::new(&tree)
        .with_config(config.clone())
        .target(root)
        .dump()?;
    tracing::info!(path = %path.display(), lines = text.lines().count(), "dumped");
    Ok(text)
}

/// Combined stdout text and per-document errors.
pub struct Report {
    pub output: String,
    pub errors: Vec<String>,
}

impl Report {
    /// With several inputs each dump gets a `# <path>` header and documents
    /// are separated by a blank line. Failed documents print nothing.
    pub fn collect(trees: &[PathBuf], results: Vec<Result<String, LoadError>>) -> Self {
        let headers = trees.len() > 1;
        let mut output = String::new();
        let mut errors = Vec::new();

        for (path, result) in trees.iter().zip(results) {
            match result {
                Ok(text) => {
                    if headers {
                        if !output.is_empty() {
                            output.push('\n');
                        }
                        output.push_str(&format!("# {}\n", path.display()));
                    }
                    output.push_str(&text);
                }
                Err(e) => errors.push(format!("{}: {}", path.display(), e)),
            }
        }

        Self { output, errors }
    }
}
