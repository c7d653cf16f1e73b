//! Sequin: grammar-driven SQL formatter.
//!
//! # Example
//!
//! ```
//! let formatted = sequin_lib::reformat(
//!     "select 1 as test from stuff.table.table2 a where a.id = 0",
//! )
//! .expect("input matches the built-in dialect");
//! assert!(formatted.starts_with("SELECT"));
//! ```
//!
//! The pipeline: a declarative grammar is compiled into an LL(1) parsing
//! table ([`Dialect::compile`]), the table drives a pushdown automaton over
//! tokenized input ([`Dialect::parse`]), and the resulting tree is rendered
//! back as canonically spaced text ([`format`]).

pub mod analysis;
pub mod diagnostics;
pub mod dialect;
pub mod format;
pub mod grammar;
pub mod syntax;

pub use dialect::{Dialect, reformat};
pub use format::{FormatOptions, format, format_with};
pub use grammar::Grammar;
pub use syntax::{ParseTree, Token, TokenKind};

/// Errors produced by grammar compilation and parsing.
///
/// Compilation errors (`GrammarReference`, `MalformedProduction`,
/// `GrammarAmbiguous`) are fatal to the grammar; `Syntax` fails a single
/// parse call; `IterationLimitExceeded` means a fixed-point or parse loop
/// hit its fuel ceiling instead of diverging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A bracketed `[Name]` on some right-hand side never appears as a
    /// production of its own.
    #[error("unknown production `[{reference}]` in the rules of `{production}`")]
    GrammarReference { production: String, reference: String },

    /// A grammar line without a `->` arrow.
    #[error("malformed production on line {line}: expected `Name -> rules`")]
    MalformedProduction { line: usize },

    /// The grammar is not LL(1): two alternatives of one production can
    /// start with the same terminal, or an alternative can never start.
    #[error("grammar is not LL(1): `{production}` {}", ambiguity_detail(.terminals))]
    GrammarAmbiguous {
        production: String,
        terminals: Vec<String>,
    },

    /// The input does not match the grammar.
    #[error("expected {expected}, found {found}")]
    Syntax {
        expected: String,
        found: String,
        /// Byte range of the offending token in the input.
        span: std::ops::Range<usize>,
    },

    /// A solver pass or parse loop exhausted its fuel.
    #[error("iteration limit exceeded")]
    IterationLimitExceeded,
}

/// Result type for grammar and parse operations.
pub type Result<T> = std::result::Result<T, Error>;

fn ambiguity_detail(terminals: &[String]) -> String {
    if terminals.is_empty() {
        "has an alternative that can never start".to_owned()
    } else {
        format!("selects multiple rules on {}", terminals.join(", "))
    }
}
