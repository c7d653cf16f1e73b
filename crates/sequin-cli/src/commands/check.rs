use sequin_lib::Dialect;

use crate::cli::CheckParams;

pub fn run(params: CheckParams) {
    let text = std::fs::read_to_string(&params.grammar_path).unwrap_or_else(|e| {
        eprintln!("error: cannot read {}: {e}", params.grammar_path.display());
        std::process::exit(1);
    });

    if let Err(err) = Dialect::compile(&text) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
