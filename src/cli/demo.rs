//! Build and exercise the sample targeting tree.

use log::debug;

use crate::ast::{Node, NodeRef};
use crate::dump::{DumpLine, dump};
use crate::validate::{ValidationError, validate};

/// Result of the demo command: the built tree, its pre-order walk, and
/// the validation findings.
#[derive(Debug)]
pub struct DemoResult {
    /// Root of the sample tree, for further inspection.
    pub root: NodeRef,
    /// Pre-order walk of the tree.
    pub lines: Vec<DumpLine>,
    /// Findings from the reference validation pass.
    pub errors: Vec<ValidationError>,
}

/// Builds the sample expression `female AND (NOT vietnamese)` through the
/// public setter API, then runs both traversals over it.
///
/// The tree is assembled the way an external producer would: nodes
/// constructed empty, values and parent pointers set per node, child
/// slots assigned on each operator node.
pub fn execute_demo() -> DemoResult {
    let and = Node::new_binary();
    and.borrow_mut().set_value("AND".into());

    let female = Node::new_value();
    female.borrow_mut().set_value("female".into());
    female.borrow_mut().set_parent(&and);
    female.borrow_mut().metadata_mut().segment = true;

    let not = Node::new_unary();
    not.borrow_mut().set_value("NOT".into());

    let vietnamese = Node::new_value();
    vietnamese.borrow_mut().set_parent(&not);
    vietnamese.borrow_mut().set_value("vietnamese".into());
    vietnamese.borrow_mut().metadata_mut().segment = true;

    not.borrow_mut().set_children(&[vietnamese]);
    not.borrow_mut().set_parent(&and);

    and.borrow_mut().set_children(&[female, not]);

    let lines = dump(Some(&and), 0);
    let errors = validate(&and);
    debug!(
        "demo tree: {} node(s) walked, {} validation error(s)",
        lines.len(),
        errors.len()
    );

    DemoResult {
        root: and,
        lines,
        errors,
    }
}
