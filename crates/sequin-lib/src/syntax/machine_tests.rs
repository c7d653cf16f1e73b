use indoc::indoc;

use super::machine::Machine;
use super::tree::ParseTree;
use crate::Error;
use crate::analysis::ParseTable;
use crate::grammar::Grammar;

fn parse(grammar_text: &str, input: &str) -> crate::Result<ParseTree> {
    let grammar = Grammar::compile(grammar_text).unwrap();
    let table = ParseTable::build(&grammar).unwrap();
    Machine::new(&grammar, &table).parse(input)
}

#[test]
fn lookahead_selects_between_alternatives() {
    assert!(parse("A -> a | b c", "a").is_ok());
    assert!(parse("A -> a | b c", "b c").is_ok());

    let err = parse("A -> a | b c", "z").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax {
            expected: "A".to_owned(),
            found: "`z`".to_owned(),
            span: 0..1,
        },
    );
}

#[test]
fn tree_mirrors_the_derivation() {
    let input = indoc! {"
        S -> a [B]
        B -> b
    "};
    let tree = parse(input, "a b").unwrap();
    insta::assert_snapshot!(tree.dump(), @r#"
    s
      s
        "a"
        b
          "b"
    "#);
}

#[test]
fn keywords_match_case_insensitively_and_canonicalize() {
    let input = indoc! {"
        S -> SELECT [Id]
        Id -> symbol
    "};
    let tree = parse(input, "select x").unwrap();
    insta::assert_snapshot!(tree.dump(), @r#"
    s
      s
        "SELECT"
        id
          "x"
    "#);
    assert!(parse(input, "SELECT x").is_ok());
}

#[test]
fn category_match_beats_the_keyword_fallback() {
    let input = indoc! {"
        S -> [V]
        V -> symbol | TRUE
    "};
    // lower-case `true` is an ordinary symbol; the literal spelling selects
    // the keyword alternative
    let as_symbol = parse(input, "true").unwrap();
    assert!(as_symbol.dump().contains("\"true\""));
    let as_keyword = parse(input, "TRUE").unwrap();
    assert!(as_keyword.dump().contains("\"TRUE\""));
}

#[test]
fn literal_value_match_beats_the_category() {
    let input = "S -> x end | symbol";
    // `x` selects the first alternative, so `end` becomes mandatory
    assert!(parse(input, "x end").is_ok());
    let err = parse(input, "x").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax {
            expected: "`end`".to_owned(),
            found: "end of input".to_owned(),
            span: 1..1,
        },
    );
    assert!(parse(input, "y").is_ok());
}

#[test]
fn terminal_mismatch_names_both_sides() {
    let err = parse("A -> a b", "a c").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax {
            expected: "`b`".to_owned(),
            found: "`c`".to_owned(),
            span: 2..3,
        },
    );
}

#[test]
fn leftover_input_is_a_syntax_error() {
    let err = parse("A -> a", "a a").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax {
            expected: "end of input".to_owned(),
            found: "`a`".to_owned(),
            span: 2..3,
        },
    );
}

#[test]
fn unbalanced_parentheses_are_syntax_errors() {
    let input = "S -> ( [S] ) | x";
    let err = parse(input, "( x").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax {
            expected: "`)`".to_owned(),
            found: "end of input".to_owned(),
            span: 3..3,
        },
    );
    assert!(matches!(
        parse(input, "x )").unwrap_err(),
        Error::Syntax { .. },
    ));
}

#[test]
fn epsilon_selected_at_end_of_input() {
    let input = indoc! {"
        S -> a [B]
        B -> b | e
    "};
    let tree = parse(input, "a").unwrap();
    insta::assert_snapshot!(tree.dump(), @r#"
    s
      s
        "a"
        b
    "#);
}

#[test]
fn fuel_exhaustion_is_reported_distinctly() {
    let grammar = Grammar::compile("A -> a").unwrap();
    let table = ParseTable::build(&grammar).unwrap();
    let err = Machine::new(&grammar, &table)
        .with_fuel(1)
        .parse("a")
        .unwrap_err();
    assert_eq!(err, Error::IterationLimitExceeded);
}
