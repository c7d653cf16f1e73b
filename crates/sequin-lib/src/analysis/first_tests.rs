use std::collections::BTreeSet;

use indoc::indoc;

use super::FirstSets;
use crate::grammar::Grammar;

fn set(terminals: &[&str]) -> BTreeSet<String> {
    terminals.iter().map(|t| (*t).to_owned()).collect()
}

#[test]
fn terminal_rule_is_its_own_first() {
    let grammar = Grammar::compile("A -> a | b c").unwrap();
    let first = FirstSets::solve(&grammar).unwrap();
    assert_eq!(*first.of(0, 0), set(&["a"]));
    assert_eq!(*first.of(0, 1), set(&["b"]));
}

#[test]
fn nonterminal_rule_unions_the_referenced_production() {
    let input = indoc! {"
        S -> [A] x
        A -> y | z
    "};
    let grammar = Grammar::compile(input).unwrap();
    let first = FirstSets::solve(&grammar).unwrap();
    assert_eq!(*first.of(0, 0), set(&["y", "z"]));
}

#[test]
fn epsilon_rule_is_deferred() {
    let input = indoc! {"
        S -> [A] x
        A -> y | e
    "};
    let grammar = Grammar::compile(input).unwrap();
    let first = FirstSets::solve(&grammar).unwrap();
    // The epsilon alternative keeps an empty set; its lookaheads come from
    // NEXT substitution at table time.
    assert!(first.of(1, 1).is_empty());
    assert_eq!(*first.of(0, 0), set(&["y"]));
    assert_eq!(first.of_production(1), set(&["y"]));
}

#[test]
fn forward_reference_chains_resolve() {
    let input = indoc! {"
        S -> [Mid]
        Mid -> [Leaf]
        Leaf -> x
    "};
    let grammar = Grammar::compile(input).unwrap();
    let first = FirstSets::solve(&grammar).unwrap();
    assert_eq!(*first.of(0, 0), set(&["x"]));
}

#[test]
fn self_recursion_reaches_a_fixed_point() {
    let input = indoc! {"
        S -> ( [S] ) | x
    "};
    let grammar = Grammar::compile(input).unwrap();
    let first = FirstSets::solve(&grammar).unwrap();
    assert_eq!(*first.of(0, 0), set(&["("]));
    assert_eq!(*first.of(0, 1), set(&["x"]));
}

#[test]
fn left_recursion_converges_to_an_empty_set() {
    // Degenerate but must terminate: the table builder rejects it later.
    let grammar = Grammar::compile("A -> [A] x").unwrap();
    let first = FirstSets::solve(&grammar).unwrap();
    assert!(first.of(0, 0).is_empty());
}

#[test]
fn mutual_recursion_reaches_a_fixed_point() {
    let input = indoc! {"
        A -> [B] x | a
        B -> [A] y | b
    "};
    let grammar = Grammar::compile(input).unwrap();
    let first = FirstSets::solve(&grammar).unwrap();
    assert_eq!(*first.of(0, 0), set(&["a", "b"]));
    assert_eq!(*first.of(1, 0), set(&["a", "b"]));
}
