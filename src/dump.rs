//! Structural debug walk over a query tree.
//!
//! This is the second, visitor-independent way to traverse a tree: plain
//! recursion over the node capability set, collecting each node's value
//! together with its depth. It exists for inspection - showing that a
//! tree is walkable without the double-dispatch machinery - and feeds the
//! CLI's tree display.
//!
//! Collection and presentation are separate: [`dump`] produces the
//! (value, depth) pairs, [`render`] and [`to_json`] format them.

use log::trace;

use crate::ast::NodeRef;

/// One line of dump output: a node's value and its depth in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpLine {
    pub value: String,
    pub depth: usize,
}

/// Walks the tree rooted at `node` pre-order, one [`DumpLine`] per node.
///
/// Children are emitted at `depth + 1`, in the order `children()` reports
/// them (left before right). An absent root yields no lines; a node with
/// no children simply does not recurse.
///
/// # Examples
///
/// ```
/// use adsquery::ast::Node;
/// use adsquery::dump::dump;
///
/// let root = Node::new_value();
/// root.borrow_mut().set_value("female".into());
///
/// let lines = dump(Some(&root), 0);
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].value, "female");
///
/// assert!(dump(None, 0).is_empty());
/// ```
pub fn dump(node: Option<&NodeRef>, depth: usize) -> Vec<DumpLine> {
    let mut lines = Vec::new();
    if let Some(node) = node {
        trace!("dump walk from depth {}", depth);
        collect(node, depth, &mut lines);
    }
    lines
}

fn collect(node: &NodeRef, depth: usize, lines: &mut Vec<DumpLine>) {
    let node = node.borrow();
    lines.push(DumpLine {
        value: node.value().to_string(),
        depth,
    });

    for child in node.children() {
        collect(&child, depth + 1, lines);
    }
}

/// Formats dump lines as indented text, one node per line, the depth
/// shown as a run of dashes.
///
/// ```text
/// AND
/// -female
/// -NOT
/// --vietnamese
/// ```
pub fn render(lines: &[DumpLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}{}", "-".repeat(line.depth), line.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts dump lines to a JSON array for machine-readable output.
///
/// Each line becomes `{"depth": n, "value": s}`; the tree itself has no
/// JSON form, only this walk of it does.
pub fn to_json(lines: &[DumpLine]) -> serde_json::Value {
    serde_json::Value::Array(
        lines
            .iter()
            .map(|line| {
                serde_json::json!({
                    "depth": line.depth,
                    "value": line.value,
                })
            })
            .collect(),
    )
}
