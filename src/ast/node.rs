use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::value::Value;
use crate::visitor::Visitor;

/// Shared handle to a tree node.
///
/// Children are owned through these handles; any holder may mutate the
/// node through `borrow_mut`. A subtree is freed when the last handle to
/// its root is dropped.
pub type NodeRef = Rc<RefCell<Node>>;

/// Flags describing what a node's value semantically represents.
///
/// The two flags are independent and non-exclusive: a value may name an
/// audience segment, a user property, both, or neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metadata {
    /// The value names an audience segment.
    pub segment: bool,
    /// The value names a user property.
    pub property: bool,
}

/// Payload shared by all node variants: value, metadata, and the weak
/// back-reference to the parent.
#[derive(Debug, Default)]
struct NodeCore {
    value: Value,
    metadata: Metadata,
    parent: Option<Weak<RefCell<Node>>>,
}

/// Terminal node: a segment name, property name, or literal. Arity 0.
#[derive(Debug, Default)]
pub struct ValueNode {
    core: NodeCore,
}

/// Single-operand operator node (`NOT`). Arity 1.
#[derive(Debug, Default)]
pub struct UnaryNode {
    core: NodeCore,
    /// The one operand, if populated.
    pub child: Option<NodeRef>,
}

/// Two-operand operator node (`AND`, `OR`, comparisons). Arity 2, ordered.
///
/// The two slots are independently settable; a node with only one side
/// populated is a valid intermediate state while a tree is being built.
#[derive(Debug, Default)]
pub struct BinaryNode {
    core: NodeCore,
    /// Left operand slot.
    pub left: Option<NodeRef>,
    /// Right operand slot. Order is significant: `age >= 18` is not
    /// `18 >= age`.
    pub right: Option<NodeRef>,
}

/// Classification of a node, used for diagnostics and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Value,
    Unary,
    Binary,
}

impl NodeKind {
    /// The number of child slots this kind of node carries.
    pub fn arity(&self) -> usize {
        match self {
            NodeKind::Value => 0,
            NodeKind::Unary => 1,
            NodeKind::Binary => 2,
        }
    }
}

/// A node in a targeting query tree.
///
/// All three variants expose the same capability set - value, parent,
/// children, metadata, and [`accept`](Node::accept) - with each variant
/// enforcing its own arity. None of the operations can fail: any sequence
/// of setter calls is accepted, including ones producing structurally odd
/// trees (a `BinaryNode` with no children, a node with no value). Whether
/// such a tree is *meaningful* is a question for a semantic pass, not for
/// the model.
///
/// # Examples
///
/// ```
/// use adsquery::ast::{Node, NodeKind};
///
/// let not = Node::new_unary();
/// not.borrow_mut().set_value("NOT".into());
///
/// let seg = Node::new_value();
/// seg.borrow_mut().set_value("vietnamese".into());
/// seg.borrow_mut().set_parent(&not);
///
/// not.borrow_mut().set_children(&[seg]);
///
/// assert_eq!(not.borrow().kind(), NodeKind::Unary);
/// assert_eq!(not.borrow().children().len(), 1);
/// ```
#[derive(Debug)]
pub enum Node {
    Value(ValueNode),
    Unary(UnaryNode),
    Binary(BinaryNode),
}

impl Node {
    /// Creates an empty terminal node.
    pub fn new_value() -> NodeRef {
        Rc::new(RefCell::new(Node::Value(ValueNode::default())))
    }

    /// Creates an empty single-operand node.
    pub fn new_unary() -> NodeRef {
        Rc::new(RefCell::new(Node::Unary(UnaryNode::default())))
    }

    /// Creates an empty two-operand node.
    pub fn new_binary() -> NodeRef {
        Rc::new(RefCell::new(Node::Binary(BinaryNode::default())))
    }

    fn core(&self) -> &NodeCore {
        match self {
            Node::Value(n) => &n.core,
            Node::Unary(n) => &n.core,
            Node::Binary(n) => &n.core,
        }
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        match self {
            Node::Value(n) => &mut n.core,
            Node::Unary(n) => &mut n.core,
            Node::Binary(n) => &mut n.core,
        }
    }

    /// The node's value. [`Value::Null`] until `set_value` is called.
    pub fn value(&self) -> &Value {
        &self.core().value
    }

    /// Replaces the node's value. Always succeeds; the latest write wins.
    pub fn set_value(&mut self, value: Value) {
        self.core_mut().value = value;
    }

    /// The node's metadata flags.
    pub fn metadata(&self) -> &Metadata {
        &self.core().metadata
    }

    /// Mutable access to the metadata flags.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.core_mut().metadata
    }

    /// The node's parent, if one was set and is still alive.
    ///
    /// The back-reference is weak: once every owning handle to the parent
    /// is dropped, this returns `None` even though `set_parent` was called.
    pub fn parent(&self) -> Option<NodeRef> {
        self.core().parent.as_ref().and_then(Weak::upgrade)
    }

    /// Replaces the back-reference to the parent.
    ///
    /// This updates only the child-to-parent relation. The parent's own
    /// child slots are untouched; callers building a tree assign both
    /// sides themselves (see [`set_children`](Node::set_children)).
    pub fn set_parent(&mut self, parent: &NodeRef) {
        self.core_mut().parent = Some(Rc::downgrade(parent));
    }

    /// The populated children, in order.
    ///
    /// - `Value`: always empty
    /// - `Unary`: zero or one
    /// - `Binary`: zero to two, left before right; a missing side is
    ///   omitted rather than reported as a placeholder, so a right-only
    ///   node yields a single-element sequence
    pub fn children(&self) -> Vec<NodeRef> {
        match self {
            Node::Value(_) => Vec::new(),
            Node::Unary(n) => n.child.iter().map(Rc::clone).collect(),
            Node::Binary(n) => n
                .left
                .iter()
                .chain(n.right.iter())
                .map(Rc::clone)
                .collect(),
        }
    }

    /// Fills child slots positionally: the first element fills the first
    /// slot, the second element the second.
    ///
    /// Elements beyond the variant's arity are silently ignored. Passing
    /// fewer elements than the arity leaves the remaining slots as they
    /// were - this call fills slots, it does not clear them.
    ///
    /// Like [`set_parent`](Node::set_parent), this updates only one side
    /// of the relation: the children's parent pointers are untouched.
    pub fn set_children(&mut self, nodes: &[NodeRef]) {
        match self {
            Node::Value(_) => {}
            Node::Unary(n) => {
                if let Some(first) = nodes.first() {
                    n.child = Some(Rc::clone(first));
                }
            }
            Node::Binary(n) => {
                if let Some(first) = nodes.first() {
                    n.left = Some(Rc::clone(first));
                }
                if let Some(second) = nodes.get(1) {
                    n.right = Some(Rc::clone(second));
                }
            }
        }
    }

    /// Which variant this node is.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Value(_) => NodeKind::Value,
            Node::Unary(_) => NodeKind::Unary,
            Node::Binary(_) => NodeKind::Binary,
        }
    }

    /// Walks the subtree rooted at this node with a visitor.
    ///
    /// Double dispatch: the node invokes the visitor method matching its
    /// own variant, then recurses into its populated children - for a
    /// `BinaryNode`, the entire left subtree before the right. The walk is
    /// pre-order and visits every reachable node exactly once; a visitor
    /// cannot reorder or cut it short, only react to each node as it is
    /// reached.
    ///
    /// The caller is responsible for not having constructed a cycle via
    /// manual parent/child assignment; recursion depth equals tree depth.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Node::Value(_) => {
                visitor.visit_value_node(self);
            }
            Node::Unary(n) => {
                visitor.visit_single_op_node(self);
                if let Some(child) = &n.child {
                    child.borrow().accept(visitor);
                }
            }
            Node::Binary(n) => {
                visitor.visit_binary_op_node(self);
                if let Some(left) = &n.left {
                    left.borrow().accept(visitor);
                }
                if let Some(right) = &n.right {
                    right.borrow().accept(visitor);
                }
            }
        }
    }
}
