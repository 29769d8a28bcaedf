//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the options that shape dump output.
fn with_config_args(cmd: Command) -> Command {
    cmd.arg(config_arg())
        .arg(base_path_arg())
        .arg(indent_unit_arg())
        .arg(no_synthetic_arg())
        .arg(marker_prefix_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("astdump")
        .about("Deterministic structural dumps of syntax trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(dump_command())
        .subcommand(roots_command())
        .subcommand(check_command())
        .subcommand(kinds_command())
}

/// Dump one or more tree documents.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the structural dump of tree documents")
        .override_usage(
            "\
  astdump dump <TREE>...
  astdump dump <TREE> --root <NAME>
  astdump dump - < tree.json",
        )
        .after_help(
            r#"EXAMPLES:
  astdump dump tree.json                        # every top-level node
  astdump dump tree.json -r Example1            # declaration marked `$Example1`
  astdump dump a.json b.json -j 4               # several documents in parallel
  astdump dump tree.json --base-path tests      # paths relative to tests/
  astdump dump tree.json --no-synthetic         # hide implicit nodes"#,
        )
        .arg(tree_paths_arg())
        .arg(root_arg())
        .arg(jobs_arg());

    with_config_args(cmd)
}

/// List the root markers of a tree document.
pub fn roots_command() -> Command {
    Command::new("roots")
        .about("List root markers and the declarations they select")
        .after_help(
            r#"EXAMPLES:
  astdump roots tree.json
  astdump roots tree.json --marker-prefix @"#,
        )
        .arg(tree_path_arg())
        .arg(config_arg())
        .arg(base_path_arg())
        .arg(marker_prefix_arg())
}

/// Validate tree documents without dumping.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate tree documents (structure and node kinds)")
        .arg(tree_paths_arg())
}

/// List supported node kinds.
pub fn kinds_command() -> Command {
    Command::new("kinds").about("List supported node kinds")
}
