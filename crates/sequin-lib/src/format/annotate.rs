//! Annotation pass: per-node formatting marks.
//!
//! Marks live in a vector parallel to the tree's node arena. A node whose
//! subtree produced no token is omitted entirely, so satisfied epsilon
//! productions emit nothing. Clause-introducing nodes force a preceding
//! line break; the condition subtree of a WHERE/HAVING clause is indented
//! one level with the tail of its top-level OR/AND chain on its own line.

use super::FormatOptions;
use super::flatten;
use super::join;
use crate::syntax::{Child, ParseTree};

/// Productions that start their clause on a fresh line.
const CLAUSE_NODES: &[&str] = &[
    "fromclause",
    "whereclause",
    "groupbyclause",
    "havingclause",
    "orderbyclause",
    "limitclause",
];

/// Clauses whose condition subtree gets the indented multi-line layout.
const CONDITION_CLAUSES: &[&str] = &["whereclause", "havingclause"];

/// Production carrying a clause condition.
const CONDITION_NODE: &str = "boolexpr";

/// Production whose leaf is re-wrapped in quotes.
const STRING_NODE: &str = "string";

/// Productions whose leaves form one operator and must reach the join pass
/// as a single fragment (`<=`, `<>`), not spaced apart.
const FUSED_NODES: &[&str] = &["compareop"];

#[derive(Debug, Clone, Default)]
pub(crate) struct Marks {
    /// Subtree contains no token; emit nothing.
    pub omit: bool,
    /// Single leaf rendered inside single quotes.
    pub quote: bool,
    /// Subtree leaves concatenated into one fragment.
    pub fuse: bool,
    /// Emit `\n` plus indent before the node's first fragment.
    pub newline_before: bool,
    /// Extra indent levels for the node's subtree.
    pub indent: usize,
}

pub(crate) fn annotate(tree: &ParseTree, options: &FormatOptions) -> Vec<Marks> {
    let mut marks = vec![Marks::default(); tree.nodes().len()];
    mark_empty(tree, tree.root(), &mut marks);
    mark_structure(tree, tree.root(), &mut marks);
    collapse_to_width(tree, tree.root(), options, &mut marks);
    marks
}

/// Post-order leaf-presence check; returns whether the subtree emits.
fn mark_empty(tree: &ParseTree, id: usize, marks: &mut [Marks]) -> bool {
    let mut has_leaf = false;
    for child in &tree.node(id).children {
        match child {
            Child::Leaf(_) => has_leaf = true,
            Child::Node(child_id) => has_leaf |= mark_empty(tree, *child_id, marks),
        }
    }
    marks[id].omit = !has_leaf;
    has_leaf
}

fn mark_structure(tree: &ParseTree, id: usize, marks: &mut [Marks]) {
    if marks[id].omit {
        return;
    }
    let node = tree.node(id);
    if node.name == STRING_NODE {
        marks[id].quote = true;
    }
    if FUSED_NODES.contains(&node.name.as_str()) {
        marks[id].fuse = true;
    }
    if CLAUSE_NODES.contains(&node.name.as_str()) {
        marks[id].newline_before = true;
    }
    if CONDITION_CLAUSES.contains(&node.name.as_str()) {
        mark_condition(tree, id, marks);
    }
    for child in &node.children {
        if let Child::Node(child_id) = child {
            mark_structure(tree, *child_id, marks);
        }
    }
}

/// Indents the clause condition and breaks the second operand of its
/// top-level OR chain, and of the AND chain inside the first operand.
fn mark_condition(tree: &ParseTree, clause: usize, marks: &mut [Marks]) {
    let Some(Child::Node(condition)) = tree.node(clause).children.get(1) else {
        return;
    };
    let condition = *condition;
    if tree.node(condition).name != CONDITION_NODE {
        return;
    }
    marks[condition].indent = 1;

    if let Some(Child::Node(or_tail)) = tree.node(condition).children.get(1)
        && !marks[*or_tail].omit
    {
        marks[*or_tail].newline_before = true;
    }
    if let Some(Child::Node(and_expr)) = tree.node(condition).children.first()
        && let Some(Child::Node(and_tail)) = tree.node(*and_expr).children.get(1)
        && !marks[*and_tail].omit
    {
        marks[*and_tail].newline_before = true;
    }
}

/// Top-down width pass over parenthesized subtrees: collapse the ones that
/// fit on one line, indent the ones that do not.
fn collapse_to_width(tree: &ParseTree, id: usize, options: &FormatOptions, marks: &mut [Marks]) {
    if marks[id].omit {
        return;
    }
    let node = tree.node(id);
    if matches!(node.children.first(), Some(Child::Leaf(text)) if text == "(") {
        let oneline = join(&flatten::flatten_oneline(tree, id, marks));
        if oneline.chars().count() <= options.max_width {
            clear_breaks(tree, id, marks);
            return;
        }
        marks[id].indent += 1;
    }
    for child in &node.children {
        if let Child::Node(child_id) = child {
            collapse_to_width(tree, *child_id, options, marks);
        }
    }
}

fn clear_breaks(tree: &ParseTree, id: usize, marks: &mut [Marks]) {
    for child in &tree.node(id).children {
        if let Child::Node(child_id) = child {
            marks[*child_id].newline_before = false;
            marks[*child_id].indent = 0;
            clear_breaks(tree, *child_id, marks);
        }
    }
}
