use sequin_lib::diagnostics;

use super::{load_dialect, load_source};
use crate::cli::TreeParams;

pub fn run(params: TreeParams) {
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
            if params.json {
                let rendered =
                    serde_json::to_string_pretty(&tree).expect("parse trees serialize");
                println!("{rendered}");
            } else {
                print!("{}", tree.dump());
            }
        }
        Err(err) => {
            eprintln!("{}", diagnostics::render_colored(&err, &source, params.colored));
            std::process::exit(1);
        }
    }
}
