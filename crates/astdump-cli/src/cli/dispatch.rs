//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap;
//! `Into<*Args>` impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::loader::ConfigArgs;
use crate::commands::roots::RootsArgs;

pub struct DumpParams {
    pub trees: Vec<PathBuf>,
    pub root: Option<String>,
    pub jobs: usize,
    pub config: ConfigArgs,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            trees: parse_trees(m),
            root: m.get_one::<String>("root").cloned(),
            jobs: m.get_one::<usize>("jobs").copied().unwrap_or(0),
            config: parse_config(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            trees: p.trees,
            root: p.root,
            config: p.config,
            jobs: p.jobs,
        }
    }
}

pub struct RootsParams {
    pub tree: PathBuf,
    pub config: ConfigArgs,
}

impl RootsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree: m.get_one::<PathBuf>("tree").cloned().unwrap_or_default(),
            // Listing has no indentation and shows every marker.
            config: ConfigArgs {
                config_file: m.get_one::<PathBuf>("config").cloned(),
                base_path: m.get_one::<PathBuf>("base_path").cloned(),
                marker_prefix: m.get_one::<String>("marker_prefix").cloned(),
                ..ConfigArgs::default()
            },
        }
    }
}

impl From<RootsParams> for RootsArgs {
    fn from(p: RootsParams) -> Self {
        Self {
            tree: p.tree,
            config: p.config,
        }
    }
}

pub struct CheckParams {
    pub trees: Vec<PathBuf>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            trees: parse_trees(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self { trees: p.trees }
    }
}

fn parse_trees(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("trees")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default()
}

fn parse_config(m: &ArgMatches) -> ConfigArgs {
    ConfigArgs {
        config_file: m.get_one::<PathBuf>("config").cloned(),
        base_path: m.get_one::<PathBuf>("base_path").cloned(),
        indent_unit: m.get_one::<String>("indent_unit").cloned(),
        no_synthetic: m.get_flag("no_synthetic"),
        marker_prefix: m.get_one::<String>("marker_prefix").cloned(),
    }
}
