//! Tree formatter: annotate, flatten, join.
//!
//! Three passes over a finished parse tree. Annotation computes per-node
//! marks (dropped epsilon subtrees, re-quoted strings, clause line breaks,
//! indent levels, width-based collapsing of parenthesized subtrees) into a
//! vector parallel to the node arena; the tree itself is never mutated.
//! Flattening emits text fragments with break markers folded in, and the
//! join pass reconstructs conventional token spacing from two fixed
//! character classes instead of re-deriving it from the grammar.

mod annotate;
mod flatten;


use crate::syntax::ParseTree;

/// Formatter options. The indent unit is fixed at two spaces.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Parenthesized subtrees whose one-line rendering fits this width are
    /// collapsed onto one line; wider ones keep their breaks and gain an
    /// indent level.
    pub max_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { max_width: 80 }
    }
}

/// Formats a parse tree with default options.
pub fn format(tree: &ParseTree) -> String {
    format_with(tree, &FormatOptions::default())
}

/// Formats a parse tree into canonically spaced text.
pub fn format_with(tree: &ParseTree, options: &FormatOptions) -> String {
    let marks = annotate::annotate(tree, options);
    let fragments = flatten::flatten(tree, &marks);
    join(&fragments)
}

/// Characters that ask for a space when ending the left fragment.
fn wants_space_after(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '=' | ')' | '\'' | '<' | '>' | ',')
}

/// Characters that ask for a space when starting the right fragment.
fn wants_space_before(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '=' | '(' | '\'' | '<' | '>')
}

/// Concatenates fragments, inserting one space only where both sides of
/// the boundary ask for it. Break fragments start with `\n` and end with
/// indent whitespace, so they never attract spaces.
pub(crate) fn join(fragments: &[String]) -> String {
    let mut out = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        out.push_str(fragment);
        let Some(next) = fragments.get(i + 1) else {
            continue;
        };
        if let (Some(last), Some(first)) = (fragment.chars().last(), next.chars().next())
            && wants_space_after(last)
            && wants_space_before(first)
        {
            out.push(' ');
        }
    }
    out
}
