//! Table-driven pushdown parser.
//!
//! The stack starts with the end marker below the start production. Each
//! step pops one stack symbol, peeks one token, and resolves a lookahead
//! key in priority order: exact literal value, then token category
//! (`symbol`/`number`/`string`), then the value upper-cased (keyword form).
//! A nonterminal expands through the parsing table, pushing its rule in
//! reverse and opening a tree node sized to the rule; a terminal consumes
//! the matching token as a leaf. After every step the builder ascends out
//! of completed subtrees. Every step burns fuel, so a pathological input
//! fails with `IterationLimitExceeded` instead of spinning.

use crate::analysis::{END_OF_INPUT, ParseTable};
use crate::grammar::{Grammar, Sym};
use crate::syntax::lexer::{self, Token, TokenKind};
use crate::syntax::tree::{ParseTree, TreeBuilder};
use crate::{Error, Result};

/// Default step budget; generous for any input a human would format.
pub const DEFAULT_FUEL: u32 = 1_000_000;

/// Pushdown automaton over one grammar/table pair.
pub struct Machine<'g> {
    grammar: &'g Grammar,
    table: &'g ParseTable,
    fuel: u32,
}

enum StackSym<'g> {
    Terminal(&'g str),
    NonTerminal(usize),
    End,
}

impl<'g> Machine<'g> {
    pub fn new(grammar: &'g Grammar, table: &'g ParseTable) -> Self {
        Self {
            grammar,
            table,
            fuel: DEFAULT_FUEL,
        }
    }

    pub fn with_fuel(mut self, fuel: u32) -> Self {
        self.fuel = fuel;
        self
    }

    /// Parses input text into a tree, failing on the first mismatch.
    /// Partial trees are never returned.
    pub fn parse(&self, input: &str) -> Result<ParseTree> {
        self.parse_tokens(lexer::lex(input))
    }

    pub fn parse_tokens(&self, tokens: Vec<Token>) -> Result<ParseTree> {
        let start = self.grammar.start();
        let mut stack = vec![StackSym::End, StackSym::NonTerminal(start)];
        let mut cursor = 0usize;
        let mut fuel = self.fuel;
        let mut tree = TreeBuilder::new(self.grammar.name(start).to_lowercase());

        while let Some(popped) = stack.pop() {
            if fuel == 0 {
                return Err(Error::IterationLimitExceeded);
            }
            fuel -= 1;

            let token = tokens
                .get(cursor)
                .expect("the Eof token terminates every stream");

            match popped {
                StackSym::NonTerminal(production) => {
                    let Some(rule_idx) = self.select(production, token) else {
                        return Err(Error::Syntax {
                            expected: self.grammar.name(production).to_owned(),
                            found: token.describe(),
                            span: token.span.clone(),
                        });
                    };
                    let rule = &self.grammar.productions()[production].rules[rule_idx];
                    for sym in rule.iter().rev() {
                        stack.push(match sym {
                            Sym::Terminal(text) => StackSym::Terminal(text),
                            Sym::NonTerminal(target) => StackSym::NonTerminal(*target),
                        });
                    }
                    tree.open(self.grammar.name(production).to_lowercase(), rule.len());
                }
                StackSym::Terminal(terminal) => {
                    if !terminal_matches(terminal, token) {
                        return Err(Error::Syntax {
                            expected: format!("`{terminal}`"),
                            found: token.describe(),
                            span: token.span.clone(),
                        });
                    }
                    tree.leaf(leaf_value(terminal, token));
                    cursor += 1;
                }
                StackSym::End => {
                    if token.kind != TokenKind::Eof {
                        return Err(Error::Syntax {
                            expected: "end of input".to_owned(),
                            found: token.describe(),
                            span: token.span.clone(),
                        });
                    }
                    cursor += 1;
                }
            }

            tree.close_completed();
        }

        if cursor < tokens.len() {
            let token = &tokens[cursor];
            return Err(Error::Syntax {
                expected: "end of input".to_owned(),
                found: token.describe(),
                span: token.span.clone(),
            });
        }

        Ok(tree.finish())
    }

    /// Table lookup with the three-step lookahead key resolution.
    fn select(&self, production: usize, token: &Token) -> Option<usize> {
        let row = self.table.row(production);
        if token.kind == TokenKind::Eof {
            return row.get(END_OF_INPUT).copied();
        }
        if let Some(&rule) = row.get(token.value.as_str()) {
            return Some(rule);
        }
        if let Some(category) = token.kind.category()
            && let Some(&rule) = row.get(category)
        {
            return Some(rule);
        }
        row.get(token.value.to_uppercase().as_str()).copied()
    }
}

/// A popped terminal accepts the token by literal value, by category, or by
/// upper-cased value (case-insensitive keyword form).
fn terminal_matches(terminal: &str, token: &Token) -> bool {
    match token.kind {
        TokenKind::Eof => false,
        _ => {
            terminal == token.value
                || token.kind.category() == Some(terminal)
                || terminal == token.value.to_uppercase()
        }
    }
}

/// Leaf text for a matched terminal. A keyword matched case-insensitively
/// stores the grammar's canonical (upper-case) spelling; everything else
/// keeps the token value verbatim.
fn leaf_value(terminal: &str, token: &Token) -> String {
    if terminal != token.value
        && token.kind.category() != Some(terminal)
        && terminal == token.value.to_uppercase()
    {
        terminal.to_owned()
    } else {
        token.value.clone()
    }
}
