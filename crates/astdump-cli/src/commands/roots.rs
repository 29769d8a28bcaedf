use std::path::PathBuf;

use astdump_lib::location::PathRenderer;
use astdump_lib::{Config, MarkerIndex, Tree, escape_label};

use super::loader::{ConfigArgs, load_tree};

pub struct RootsArgs {
    pub tree: PathBuf,
    pub config: ConfigArgs,
}

pub fn run(args: RootsArgs) {
    let listing = args.config.resolve().and_then(|config| {
        let tree = load_tree(&args.tree)?;
        Ok(list_roots(&tree, &config))
    });

    match listing {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("error: {}: {}", args.tree.display(), e);
            std::process::exit(1);
        }
    }
}

/// One line per marker: `<name>\t<Kind> "<label>" (<location>)`.
pub fn list_roots(tree: &Tree, config: &Config) -> String {
    let index = MarkerIndex::scan(tree, &config.marker_prefix);
    let renderer = PathRenderer::from_config(config);

    let mut out = String::new();
    for marker in index.iter() {
        let declaration = marker.declaration;
        out.push_str(marker.name);
        out.push('\t');
        match declaration.kind() {
            Some(kind) => out.push_str(kind.name()),
            None => out.push_str(declaration.tag()),
        }
        if let Some(label) = declaration.label() {
            out.push_str(&format!(" \"{}\"", escape_label(label)));
        }
        if let Some(span) = declaration.span() {
            let file = renderer.render(tree.file(span.file));
            out.push_str(&format!(" ({}:{}-{})", file, span.start, span.end));
        }
        out.push('\n');
    }
    out
}
