//! The double-dispatch traversal contract.
//!
//! A semantic pass (validation, optimization, serialization) implements
//! [`Visitor`] and hands itself to [`Node::accept`](crate::ast::Node::accept)
//! on the tree's root. The tree drives the walk: each node calls the
//! visitor method matching its own variant and then recurses into its
//! children, so the pass never needs a type switch or its own recursion.
//!
//! The walk is pre-order and depth-first, left subtree fully before right.
//! There is no cancellation mechanism - every reachable node is visited.
//! A pass that wants to stop reacting tracks its own flag and makes the
//! remaining visit calls no-ops. Whatever state a pass accumulates (an
//! error list, a rewrite plan) is entirely its own concern; the tree only
//! guarantees the dispatch order.

use crate::ast::Node;

/// Per-variant reaction methods for a tree walk.
///
/// Every method defaults to a no-op, so a pass implements only the
/// variants it reacts to.
///
/// # Examples
///
/// A pass counting terminal nodes:
///
/// ```
/// use adsquery::ast::Node;
/// use adsquery::Visitor;
///
/// #[derive(Default)]
/// struct LeafCounter {
///     leaves: usize,
/// }
///
/// impl Visitor for LeafCounter {
///     fn visit_value_node(&mut self, _node: &Node) {
///         self.leaves += 1;
///     }
/// }
///
/// let root = Node::new_value();
/// let mut counter = LeafCounter::default();
/// root.borrow().accept(&mut counter);
/// assert_eq!(counter.leaves, 1);
/// ```
pub trait Visitor {
    /// Generic hook, reserved for cross-cutting behavior.
    ///
    /// Not invoked by `accept` today.
    fn visit(&mut self, _node: &Node) {}

    /// Called for every `ValueNode` reached by the walk.
    fn visit_value_node(&mut self, _node: &Node) {}

    /// Called for every `BinaryNode`, before its subtrees are walked.
    fn visit_binary_op_node(&mut self, _node: &Node) {}

    /// Called for every `UnaryNode`, before its child is walked.
    fn visit_single_op_node(&mut self, _node: &Node) {}
}
