//! Parsing-table construction and the LL(1) validation gate.
//!
//! The table maps (production, lookahead terminal) to the unique rule to
//! expand. A pair absent from the table is a definite syntax error, never
//! an ambiguity: grammars whose alternatives overlap are rejected here,
//! before any parse is attempted.

use indexmap::IndexMap;
use serde::Serialize;

use super::{FirstSets, NextSets};
use crate::grammar::Grammar;
use crate::{Error, Result};

/// LL(1) parsing table: one terminal→rule row per production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseTable {
    rows: Vec<IndexMap<String, usize>>,
}

impl ParseTable {
    /// Solves FIRST and NEXT, assembles the table, and validates the LL(1)
    /// property. The effective FIRST set of an epsilon alternative is the
    /// production's NEXT set.
    pub fn build(grammar: &Grammar) -> Result<Self> {
        let first = FirstSets::solve(grammar)?;
        let next = NextSets::solve(grammar, &first)?;
        Self::assemble(grammar, &first, &next)
    }

    fn assemble(grammar: &Grammar, first: &FirstSets, next: &NextSets) -> Result<Self> {
        let mut rows = Vec::with_capacity(grammar.len());

        for (p, production) in grammar.productions().iter().enumerate() {
            let mut row: IndexMap<String, usize> = IndexMap::new();
            let mut conflicts: Vec<String> = Vec::new();

            for (r, rule) in production.rules.iter().enumerate() {
                let effective = if rule.is_empty() {
                    next.of(p)
                } else {
                    first.of(p, r)
                };
                if effective.is_empty() {
                    return Err(Error::GrammarAmbiguous {
                        production: production.name.clone(),
                        terminals: Vec::new(),
                    });
                }
                for terminal in effective {
                    debug_assert!(!terminal.is_empty(), "epsilon can never reach the table");
                    if row.insert(terminal.clone(), r).is_some() {
                        conflicts.push(terminal.clone());
                    }
                }
            }

            if !conflicts.is_empty() {
                conflicts.sort();
                conflicts.dedup();
                return Err(Error::GrammarAmbiguous {
                    production: production.name.clone(),
                    terminals: conflicts,
                });
            }

            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// The rule to expand for this production under this lookahead key.
    pub fn rule_for(&self, production: usize, key: &str) -> Option<usize> {
        self.rows[production].get(key).copied()
    }

    pub fn row(&self, production: usize) -> &IndexMap<String, usize> {
        &self.rows[production]
    }

    pub fn rows(&self) -> &[IndexMap<String, usize>] {
        &self.rows
    }
}
