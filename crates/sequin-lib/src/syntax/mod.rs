//! Tokenizer, parse tree, and the predictive stack machine.

pub mod lexer;
pub mod machine;
pub mod tree;

#[cfg(test)]
mod machine_tests;
#[cfg(test)]
mod tree_tests;

pub use lexer::{Token, TokenKind, lex};
pub use machine::{DEFAULT_FUEL, Machine};
pub use tree::{Child, Node, ParseTree};
