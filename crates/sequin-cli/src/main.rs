mod cli;
mod commands;

use cli::{CheckParams, FmtParams, TableParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("fmt", m)) => {
            commands::fmt::run(FmtParams::from_matches(m));
        }
        Some(("check", m)) => {
            commands::check::run(CheckParams::from_matches(m));
        }
        Some(("tree", m)) => {
            commands::tree::run(TreeParams::from_matches(m));
        }
        Some(("table", m)) => {
            commands::table::run(TableParams::from_matches(m));
        }
        _ => unreachable!("clap should have caught this"),
    }
}
