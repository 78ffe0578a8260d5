//! Indented AST listing
//!
//! Walks the tree and emits one line per node, indented four spaces per
//! depth level, children in source order. The node kind alone selects the
//! line template; payload fields a kind leaves at their defaults are never
//! displayed.

use crate::parser::ast::{Node, NodeKind};

const INDENT: &str = "    ";

/// Render the tree rooted at `node` as an indented listing.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_node(node, 0, &mut out);
    out
}

/// Print the listing for the tree rooted at `node` to stdout.
pub fn print(node: &Node) {
    print!("{}", render(node));
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }

    match node.kind() {
        NodeKind::Program => out.push_str("Program\n"),
        NodeKind::Package => out.push_str(&format!("Package: {}\n", node.name())),
        NodeKind::Import => out.push_str(&format!("Import: {}\n", node.name())),
        NodeKind::QualifiedName => out.push_str(&format!("Qualified Name: {}\n", node.name())),
        NodeKind::Identifier => out.push_str(&format!("Id: {}\n", node.name())),
        NodeKind::IntValue => out.push_str(&format!("Value: {:.6}\n", node.value())),
    }

    for child in node.children() {
        render_node(child, depth + 1, out);
    }
}
