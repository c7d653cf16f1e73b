use sequin_lib::format::FormatOptions;
use sequin_lib::{diagnostics, format_with};

use super::{load_dialect, load_source};
use crate::cli::FmtParams;

pub fn run(params: FmtParams) {
    let source = load_source(params.input_path.as_deref(), params.source_text.as_deref())
        .unwrap_or_else(|msg| {
            eprintln!("error: {msg}");
            std::process::exit(1);
        });

    let dialect = load_dialect(params.grammar.as_deref()).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });

    match dialect.with_fuel(params.fuel).parse(&source) {
        Ok(tree) => {
            let options = FormatOptions {
                max_width: params.width,
            };
            println!("{}", format_with(&tree, &options));
        }
        Err(err) => {
            eprintln!("{}", diagnostics::render_colored(&err, &source, params.colored));
            std::process::exit(1);
        }
    }
}
