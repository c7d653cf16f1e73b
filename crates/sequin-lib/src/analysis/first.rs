//! FIRST-set computation.
//!
//! FIRST(production, rule) is the set of terminals that can begin a
//! derivation of that alternative. An epsilon alternative keeps an empty
//! set here: it "starts" with whatever may follow the production, and the
//! table builder substitutes the production's NEXT set for it. Sets hold
//! terminal literals only, so the finalized-set invariant (no epsilon, no
//! unresolved reference) holds by construction.

use std::collections::BTreeSet;

use super::pass_budget;
use crate::grammar::{Grammar, Sym};
use crate::{Error, Result};

/// FIRST sets addressed by (production index, rule index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstSets {
    sets: Vec<Vec<BTreeSet<String>>>,
}

impl FirstSets {
    pub fn solve(grammar: &Grammar) -> Result<Self> {
        let mut sets: Vec<Vec<BTreeSet<String>>> = grammar
            .productions()
            .iter()
            .map(|production| vec![BTreeSet::new(); production.rules.len()])
            .collect();

        for _ in 0..pass_budget(grammar) {
            let mut changed = false;
            for (p, production) in grammar.productions().iter().enumerate() {
                for (r, rule) in production.rules.iter().enumerate() {
                    let update: BTreeSet<String> = match rule.first() {
                        // Epsilon: deferred to NEXT substitution.
                        None => continue,
                        Some(Sym::Terminal(text)) => std::iter::once(text.clone()).collect(),
                        Some(Sym::NonTerminal(q)) => (0..grammar.productions()[*q].rules.len())
                            .flat_map(|qr| sets[*q][qr].iter().cloned())
                            .collect(),
                    };
                    let before = sets[p][r].len();
                    sets[p][r].extend(update);
                    changed |= sets[p][r].len() != before;
                }
            }
            if !changed {
                return Ok(Self { sets });
            }
        }

        Err(Error::IterationLimitExceeded)
    }

    pub fn of(&self, production: usize, rule: usize) -> &BTreeSet<String> {
        &self.sets[production][rule]
    }

    /// Union over every alternative of the production. Epsilon alternatives
    /// contribute nothing.
    pub fn of_production(&self, production: usize) -> BTreeSet<String> {
        self.sets[production].iter().flatten().cloned().collect()
    }
}
