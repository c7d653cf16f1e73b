use super::load_dialect;
use crate::cli::TableParams;

pub fn run(params: TableParams) {
    let dialect = load_dialect(params.grammar.as_deref()).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });

    if params.json {
        let rendered =
            serde_json::to_string_pretty(dialect.table()).expect("tables serialize");
        println!("{rendered}");
        return;
    }

    for (production, row) in dialect.table().rows().iter().enumerate() {
        println!("{}", dialect.grammar().name(production));
        for (terminal, rule) in row {
            println!("  {terminal} -> rule {rule}");
        }
    }
}
