//! Flatten pass: ordered text fragments per node.
//!
//! The indent context flows down explicitly; fragments flow back up. A
//! break is itself a fragment (`\n` plus the indent whitespace), which the
//! join pass treats like any other; its edge characters never ask for
//! spaces.

use super::annotate::Marks;
use crate::syntax::{Child, ParseTree};

pub(crate) fn flatten(tree: &ParseTree, marks: &[Marks]) -> Vec<String> {
    let mut fragments = Vec::new();
    emit(tree, tree.root(), marks, 0, true, &mut fragments);
    fragments
}

/// One-line rendering of a subtree, used to measure parenthesized
/// subexpressions against the width limit.
pub(crate) fn flatten_oneline(tree: &ParseTree, id: usize, marks: &[Marks]) -> Vec<String> {
    let mut fragments = Vec::new();
    emit(tree, id, marks, 0, false, &mut fragments);
    fragments
}

fn emit(
    tree: &ParseTree,
    id: usize,
    marks: &[Marks],
    indent: usize,
    with_breaks: bool,
    out: &mut Vec<String>,
) {
    if marks[id].omit {
        return;
    }
    let indent = indent + marks[id].indent;
    if with_breaks && marks[id].newline_before {
        out.push(format!("\n{}", "  ".repeat(indent)));
    }

    let node = tree.node(id);
    if marks[id].quote {
        if let Some(Child::Leaf(value)) = node.children.first() {
            out.push(format!("'{value}'"));
        }
        return;
    }
    if marks[id].fuse {
        let mut text = String::new();
        collect_text(tree, id, &mut text);
        out.push(text);
        return;
    }

    for child in &node.children {
        match child {
            Child::Leaf(value) => out.push(value.clone()),
            Child::Node(child_id) => emit(tree, *child_id, marks, indent, with_breaks, out),
        }
    }
}

fn collect_text(tree: &ParseTree, id: usize, out: &mut String) {
    for child in &tree.node(id).children {
        match child {
            Child::Leaf(value) => out.push_str(value),
            Child::Node(child_id) => collect_text(tree, *child_id, out),
        }
    }
}
