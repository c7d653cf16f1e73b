use indoc::indoc;

use super::ParseTable;
use crate::Error;
use crate::grammar::Grammar;

#[test]
fn lookahead_selects_the_matching_rule() {
    let grammar = Grammar::compile("A -> a | b c").unwrap();
    let table = ParseTable::build(&grammar).unwrap();
    assert_eq!(table.rule_for(0, "a"), Some(0));
    assert_eq!(table.rule_for(0, "b"), Some(1));
    assert_eq!(table.rule_for(0, "z"), None);
}

#[test]
fn epsilon_rule_is_keyed_by_the_next_set() {
    let input = indoc! {"
        S -> [A] x
        A -> y | e
    "};
    let grammar = Grammar::compile(input).unwrap();
    let table = ParseTable::build(&grammar).unwrap();
    assert_eq!(table.rule_for(1, "y"), Some(0));
    assert_eq!(table.rule_for(1, "x"), Some(1));
}

#[test]
fn shared_first_terminal_is_rejected() {
    let err = ParseTable::build(&Grammar::compile("A -> a x | a y").unwrap()).unwrap_err();
    assert_eq!(
        err,
        Error::GrammarAmbiguous {
            production: "A".to_owned(),
            terminals: vec!["a".to_owned()],
        },
    );
}

#[test]
fn epsilon_overlapping_a_sibling_rule_is_rejected() {
    // NEXT(A) = {a}, which collides with A's own first alternative.
    let input = indoc! {"
        S -> [A] a
        A -> a | e
    "};
    let err = ParseTable::build(&Grammar::compile(input).unwrap()).unwrap_err();
    assert_eq!(
        err,
        Error::GrammarAmbiguous {
            production: "A".to_owned(),
            terminals: vec!["a".to_owned()],
        },
    );
}

#[test]
fn unreachable_alternative_is_rejected() {
    let err = ParseTable::build(&Grammar::compile("A -> [A] x").unwrap()).unwrap_err();
    assert_eq!(
        err,
        Error::GrammarAmbiguous {
            production: "A".to_owned(),
            terminals: Vec::new(),
        },
    );
}

#[test]
fn compilation_is_deterministic() {
    let input = indoc! {"
        S -> [A] x | ( [S] )
        A -> y | z | e
    "};
    let one = ParseTable::build(&Grammar::compile(input).unwrap()).unwrap();
    let two = ParseTable::build(&Grammar::compile(input).unwrap()).unwrap();
    assert_eq!(one, two);
}

#[test]
fn every_row_covers_each_alternative() {
    let input = indoc! {"
        S -> [A] x | ( [S] )
        A -> y | z | e
    "};
    let grammar = Grammar::compile(input).unwrap();
    let table = ParseTable::build(&grammar).unwrap();
    for (production, row) in table.rows().iter().enumerate() {
        let mut selected: Vec<usize> = row.values().copied().collect();
        selected.sort_unstable();
        selected.dedup();
        assert_eq!(
            selected.len(),
            grammar.productions()[production].rules.len(),
            "every alternative of `{}` must be selectable",
            grammar.name(production),
        );
    }
}
