//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Tree documents to process (positional, one or more).
pub fn tree_paths_arg() -> Arg {
    Arg::new("trees")
        .value_name("TREE")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Tree document (JSON), or - for stdin")
}

/// Single tree document (positional).
pub fn tree_path_arg() -> Arg {
    Arg::new("tree")
        .value_name("TREE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Tree document (JSON), or - for stdin")
}

/// Root marker to dump from (-r/--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("NAME")
        .help("Dump only the declaration carrying this root marker")
}

/// Base directory for rendered paths (--base-path).
pub fn base_path_arg() -> Arg {
    Arg::new("base_path")
        .long("base-path")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Render file paths relative to this directory")
}

/// One level of indentation (--indent-unit).
pub fn indent_unit_arg() -> Arg {
    Arg::new("indent_unit")
        .long("indent-unit")
        .value_name("TEXT")
        .help("Indentation per depth level [default: two spaces]")
}

/// Exclude synthetic nodes (--no-synthetic).
pub fn no_synthetic_arg() -> Arg {
    Arg::new("no_synthetic")
        .long("no-synthetic")
        .action(ArgAction::SetTrue)
        .help("Omit synthetic nodes and their subtrees")
}

/// Marker prefix in comments (--marker-prefix).
pub fn marker_prefix_arg() -> Arg {
    Arg::new("marker_prefix")
        .long("marker-prefix")
        .value_name("TEXT")
        .help("Token introducing a root marker in comments [default: $]")
}

/// JSON config file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON config file; flags override its values")
}

/// Worker threads (-j/--jobs).
pub fn jobs_arg() -> Arg {
    Arg::new("jobs")
        .short('j')
        .long("jobs")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Number of worker threads, 0 for one per core [default: 0]")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
}
