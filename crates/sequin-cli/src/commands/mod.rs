//! Subcommand implementations.

pub mod check;
pub mod fmt;
pub mod table;
pub mod tree;

use std::io::Read;
use std::path::Path;

use sequin_lib::Dialect;

/// Reads input from inline text, a file, or stdin (in that order).
pub(crate) fn load_source(path: Option<&Path>, inline: Option<&str>) -> Result<String, String> {
    if let Some(text) = inline {
        return Ok(text.to_owned());
    }
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            Ok(buffer)
        }
    }
}

/// The built-in SQL dialect, or one compiled from `--grammar FILE`.
pub(crate) fn load_dialect(grammar: Option<&Path>) -> Result<Dialect, String> {
    match grammar {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Dialect::compile(&text).map_err(|e| e.to_string())
        }
        None => Ok(Dialect::sql()),
    }
}
