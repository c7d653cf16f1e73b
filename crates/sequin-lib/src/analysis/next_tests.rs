use std::collections::BTreeSet;

use indoc::indoc;

use super::{FirstSets, NextSets};
use crate::grammar::Grammar;

fn set(terminals: &[&str]) -> BTreeSet<String> {
    terminals.iter().map(|t| (*t).to_owned()).collect()
}

fn solve(input: &str) -> (Grammar, NextSets) {
    let grammar = Grammar::compile(input).unwrap();
    let first = FirstSets::solve(&grammar).unwrap();
    let next = NextSets::solve(&grammar, &first).unwrap();
    (grammar, next)
}

#[test]
fn start_production_is_followed_by_end_of_input() {
    let (_, next) = solve("A -> a");
    assert_eq!(*next.of(0), set(&["$"]));
}

#[test]
fn terminal_follower_is_added_directly() {
    let input = indoc! {"
        S -> [A] x
        A -> a
    "};
    let (_, next) = solve(input);
    assert_eq!(*next.of(1), set(&["x"]));
}

#[test]
fn nonterminal_follower_contributes_its_first_set() {
    let input = indoc! {"
        S -> [A] [B] z
        A -> a
        B -> b
    "};
    let (_, next) = solve(input);
    assert_eq!(*next.of(1), set(&["b"]));
}

#[test]
fn nullable_follower_also_folds_in_its_own_next_set() {
    let input = indoc! {"
        S -> [A] [B] z
        A -> a
        B -> b | e
    "};
    let (_, next) = solve(input);
    // B may vanish, so whatever follows B can directly follow A.
    assert_eq!(*next.of(1), set(&["b", "z"]));
    assert_eq!(*next.of(2), set(&["z"]));
}

#[test]
fn final_position_inherits_the_enclosing_next_set() {
    let input = indoc! {"
        S -> a [A]
        A -> x
    "};
    let (_, next) = solve(input);
    assert_eq!(*next.of(1), set(&["$"]));
}

#[test]
fn recursive_tail_accumulates_both_contexts() {
    let input = indoc! {"
        S -> ( [S] ) | x
    "};
    let (_, next) = solve(input);
    assert_eq!(*next.of(0), set(&["$", ")"]));
}
