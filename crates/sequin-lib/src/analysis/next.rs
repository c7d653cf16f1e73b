//! NEXT-set (FOLLOW) computation.
//!
//! NEXT(production) is the set of terminals that can appear immediately
//! after a complete derivation of that production. The start production is
//! seeded with the end-of-input marker. For every occurrence of a
//! production inside a rule: a terminal follower is added directly, a
//! nonterminal follower contributes its FIRST union (plus its own NEXT set
//! when it can derive epsilon), and an occurrence in final position
//! inherits the enclosing production's NEXT set.

use std::collections::BTreeSet;

use super::{END_OF_INPUT, FirstSets, pass_budget};
use crate::grammar::{Grammar, Sym};
use crate::{Error, Result};

/// NEXT sets addressed by production index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSets {
    sets: Vec<BTreeSet<String>>,
}

impl NextSets {
    pub fn solve(grammar: &Grammar, first: &FirstSets) -> Result<Self> {
        let mut sets = vec![BTreeSet::new(); grammar.len()];
        sets[grammar.start()].insert(END_OF_INPUT.to_owned());

        for _ in 0..pass_budget(grammar) {
            let mut changed = false;
            for (q, production) in grammar.productions().iter().enumerate() {
                for rule in &production.rules {
                    for (k, sym) in rule.iter().enumerate() {
                        let Sym::NonTerminal(p) = sym else { continue };
                        let update: BTreeSet<String> = match rule.get(k + 1) {
                            Some(Sym::Terminal(text)) => {
                                std::iter::once(text.clone()).collect()
                            }
                            Some(Sym::NonTerminal(s)) => {
                                let mut followers = first.of_production(*s);
                                if grammar.has_epsilon_rule(*s) {
                                    followers.extend(sets[*s].iter().cloned());
                                }
                                followers
                            }
                            None => sets[q].iter().cloned().collect(),
                        };
                        let before = sets[*p].len();
                        sets[*p].extend(update);
                        changed |= sets[*p].len() != before;
                    }
                }
            }
            if !changed {
                return Ok(Self { sets });
            }
        }

        Err(Error::IterationLimitExceeded)
    }

    pub fn of(&self, production: usize) -> &BTreeSet<String> {
        &self.sets[production]
    }
}
