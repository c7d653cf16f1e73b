//! Grammar data model and the grammar-specification compiler.
//!
//! A grammar is declared as text, one production per line:
//!
//! ```text
//! # comment
//! Query -> [SelectStmt] [Terminator]
//! Terminator -> ; | e
//! ```
//!
//! `[Name]` references another production, the bare `e` is the empty
//! alternative, and every other token is a literal terminal. References are
//! resolved in a second pass over the finished production table, so a rule
//! may refer to a production declared further down.


use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One element of a rule body.
///
/// Epsilon is never stored: an epsilon alternative is an empty [`Rule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sym {
    /// Literal token text, matched verbatim or as a case-insensitive
    /// keyword. The names `symbol`, `number` and `string` match whole
    /// token categories rather than literal text.
    Terminal(String),
    /// Index of the referenced production.
    NonTerminal(usize),
}

/// Ordered symbol sequence; empty means the epsilon alternative.
pub type Rule = Vec<Sym>;

/// A named production with its alternatives, preserving declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub name: String,
    pub rules: Vec<Rule>,
}

/// Compiled grammar: productions in declaration order plus the name→index
/// map used to resolve references. The start production is the first one
/// declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    productions: Vec<Production>,
    by_name: IndexMap<String, usize>,
}

/// Right-hand-side symbol before reference resolution.
enum RawSym {
    Ref(String),
    Term(String),
}

impl Grammar {
    /// Compiles grammar text into a resolved grammar.
    ///
    /// Pass 1 records production names and raw tokenized alternatives;
    /// pass 2 rewrites `[Name]` references into production indices.
    /// Repeated `Name ->` lines append alternatives to the existing
    /// production. An empty grammar is malformed.
    pub fn compile(text: &str) -> Result<Self> {
        let mut names: IndexMap<String, usize> = IndexMap::new();
        let mut raw: Vec<(String, Vec<Vec<RawSym>>)> = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = trimmed.split_once("->") else {
                return Err(Error::MalformedProduction { line: line_no + 1 });
            };
            let name = lhs.trim().to_owned();
            let idx = *names.entry(name.clone()).or_insert_with(|| {
                raw.push((name, Vec::new()));
                raw.len() - 1
            });
            for alternative in rhs.split('|') {
                raw[idx].1.push(scan_alternative(alternative));
            }
        }

        if raw.is_empty() {
            return Err(Error::MalformedProduction { line: 0 });
        }

        let mut productions = Vec::with_capacity(raw.len());
        for (name, alternatives) in &raw {
            let mut rules = Vec::with_capacity(alternatives.len());
            for alternative in alternatives {
                let mut rule = Vec::with_capacity(alternative.len());
                for sym in alternative {
                    rule.push(match sym {
                        RawSym::Term(text) => Sym::Terminal(text.clone()),
                        RawSym::Ref(target) => match names.get(target) {
                            Some(&resolved) => Sym::NonTerminal(resolved),
                            None => {
                                return Err(Error::GrammarReference {
                                    production: name.clone(),
                                    reference: target.clone(),
                                });
                            }
                        },
                    });
                }
                rules.push(rule);
            }
            productions.push(Production {
                name: name.clone(),
                rules,
            });
        }

        Ok(Self {
            productions,
            by_name: names,
        })
    }

    /// Index of the start production (the first one declared).
    #[inline]
    pub fn start(&self) -> usize {
        0
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Production name for an index. Panics on an out-of-range index, which
    /// cannot occur for indices produced by reference resolution.
    pub fn name(&self, production: usize) -> &str {
        &self.productions[production].name
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Whether the production has an epsilon alternative.
    pub fn has_epsilon_rule(&self, production: usize) -> bool {
        self.productions[production]
            .rules
            .iter()
            .any(|rule| rule.is_empty())
    }
}

/// Tokenizes one `|`-separated alternative into raw symbols.
///
/// `[Name]` becomes a reference, the bare word `e` contributes nothing,
/// identifier runs are single terminals, and any other non-whitespace
/// character is a one-character terminal. A `[` without a closing bracket
/// is an ordinary terminal character.
fn scan_alternative(text: &str) -> Vec<RawSym> {
    let mut syms = Vec::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if c == '[' {
            if let Some(close) = rest.find(']') {
                let name = rest[1..close].trim();
                if !name.is_empty() {
                    syms.push(RawSym::Ref(name.to_owned()));
                    rest = &rest[close + 1..];
                    continue;
                }
            }
            syms.push(RawSym::Term("[".to_owned()));
            rest = &rest[1..];
        } else if c.is_alphanumeric() || c == '_' {
            let end = rest
                .find(|ch: char| !ch.is_alphanumeric() && ch != '_')
                .unwrap_or(rest.len());
            let word = &rest[..end];
            if word != "e" {
                syms.push(RawSym::Term(word.to_owned()));
            }
            rest = &rest[end..];
        } else {
            syms.push(RawSym::Term(c.to_string()));
            rest = &rest[c.len_utf8()..];
        }
    }

    syms
}
