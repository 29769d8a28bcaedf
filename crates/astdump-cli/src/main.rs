mod cli;
mod commands;
mod logging;


use cli::{CheckParams, DumpParams, RootsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    logging::init(m.get_count("verbose"));
    tracing::debug!(command = name, "starting");

    match name {
        "dump" => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        "roots" => {
            let params = RootsParams::from_matches(m);
            commands::roots::run(params.into());
        }
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "kinds" => commands::kinds::run(),
        _ => unreachable!("clap should have caught this"),
    }
}
