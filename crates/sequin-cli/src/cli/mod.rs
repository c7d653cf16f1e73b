//! Command-line surface: command tree and parameter structs.

pub mod args;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgMatches, Command};

use args::{
    color_arg, fuel_arg, grammar_arg, grammar_path_arg, input_path_arg, json_arg, source_text_arg,
    width_arg,
};

pub fn build_cli() -> Command {
    Command::new("sequin")
        .about("Grammar-driven SQL formatter")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fmt")
                .about("Format SQL input")
                .arg(input_path_arg())
                .arg(source_text_arg())
                .arg(grammar_arg())
                .arg(width_arg())
                .arg(fuel_arg())
                .arg(color_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Compile a grammar and validate the LL(1) property")
                .arg(grammar_path_arg()),
        )
        .subcommand(
            Command::new("tree")
                .about("Parse input and dump the parse tree")
                .arg(input_path_arg())
                .arg(source_text_arg())
                .arg(grammar_arg())
                .arg(fuel_arg())
                .arg(color_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("table")
                .about("Compile a grammar and dump its parsing table")
                .arg(grammar_arg())
                .arg(json_arg()),
        )
}

fn resolve_color(matches: &ArgMatches) -> bool {
    match matches.get_one::<String>("color").map(String::as_str) {
        Some("always") => true,
        Some("never") => false,
        _ => std::io::stderr().is_terminal(),
    }
}

pub struct FmtParams {
    pub input_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: Option<PathBuf>,
    pub width: usize,
    pub fuel: u32,
    pub colored: bool,
}

impl FmtParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            input_path: matches.get_one::<PathBuf>("input_path").cloned(),
            source_text: matches.get_one::<String>("source_text").cloned(),
            grammar: matches.get_one::<PathBuf>("grammar").cloned(),
            width: *matches.get_one::<usize>("width").expect("defaulted"),
            fuel: *matches.get_one::<u32>("fuel").expect("defaulted"),
            colored: resolve_color(matches),
        }
    }
}

pub struct CheckParams {
    pub grammar_path: PathBuf,
}

impl CheckParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            grammar_path: matches
                .get_one::<PathBuf>("grammar_path")
                .expect("required")
                .clone(),
        }
    }
}

pub struct TreeParams {
    pub input_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: Option<PathBuf>,
    pub fuel: u32,
    pub colored: bool,
    pub json: bool,
}

impl TreeParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            input_path: matches.get_one::<PathBuf>("input_path").cloned(),
            source_text: matches.get_one::<String>("source_text").cloned(),
            grammar: matches.get_one::<PathBuf>("grammar").cloned(),
            fuel: *matches.get_one::<u32>("fuel").expect("defaulted"),
            colored: resolve_color(matches),
            json: matches.get_flag("json"),
        }
    }
}

pub struct TableParams {
    pub grammar: Option<PathBuf>,
    pub json: bool,
}

impl TableParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            grammar: matches.get_one::<PathBuf>("grammar").cloned(),
            json: matches.get_flag("json"),
        }
    }
}
