// tests/node_tests.rs

use std::rc::Rc;

use adsquery::ast::{Node, NodeKind, NodeRef, Operator};
use adsquery::value::Value;

// Helper functions to build nodes for testing
fn value_node(token: &str) -> NodeRef {
    let node = Node::new_value();
    node.borrow_mut().set_value(token.into());
    node
}

fn unary_node(token: &str) -> NodeRef {
    let node = Node::new_unary();
    node.borrow_mut().set_value(token.into());
    node
}

fn binary_node(token: &str) -> NodeRef {
    let node = Node::new_binary();
    node.borrow_mut().set_value(token.into());
    node
}

// ============================================================================
// Arity
// ============================================================================

#[test]
fn test_value_node_has_no_children() {
    let node = value_node("female");
    assert!(node.borrow().children().is_empty());
}

#[test]
fn test_value_node_ignores_set_children() {
    let node = value_node("female");
    let orphan = value_node("asian");

    node.borrow_mut().set_children(&[orphan]);
    assert!(node.borrow().children().is_empty());
}

#[test]
fn test_unary_node_keeps_only_first_child() {
    let node = unary_node("NOT");
    let first = value_node("a");
    let second = value_node("b");
    let third = value_node("c");

    node.borrow_mut().set_children(&[first.clone(), second, third]);

    let children = node.borrow().children();
    assert_eq!(children.len(), 1);
    assert!(Rc::ptr_eq(&children[0], &first));
}

#[test]
fn test_binary_node_keeps_only_first_two_children() {
    let node = binary_node("AND");
    let first = value_node("a");
    let second = value_node("b");
    let third = value_node("c");

    node.borrow_mut()
        .set_children(&[first.clone(), second.clone(), third]);

    let children = node.borrow().children();
    assert_eq!(children.len(), 2);
    assert!(Rc::ptr_eq(&children[0], &first));
    assert!(Rc::ptr_eq(&children[1], &second));
}

#[test]
fn test_children_never_exceed_populated_slots() {
    // Freshly constructed operator nodes have slots but no children yet.
    assert!(Node::new_unary().borrow().children().is_empty());
    assert!(Node::new_binary().borrow().children().is_empty());
}

#[test]
fn test_kind_arity() {
    assert_eq!(NodeKind::Value.arity(), 0);
    assert_eq!(NodeKind::Unary.arity(), 1);
    assert_eq!(NodeKind::Binary.arity(), 2);

    assert_eq!(Node::new_value().borrow().kind(), NodeKind::Value);
    assert_eq!(Node::new_unary().borrow().kind(), NodeKind::Unary);
    assert_eq!(Node::new_binary().borrow().kind(), NodeKind::Binary);
}

// ============================================================================
// Positional fill
// ============================================================================

#[test]
fn test_binary_partial_fill_reports_one_child() {
    let node = binary_node("AND");
    let left = value_node("female");

    node.borrow_mut().set_children(&[left.clone()]);

    let children = node.borrow().children();
    assert_eq!(children.len(), 1);
    assert!(Rc::ptr_eq(&children[0], &left));
}

#[test]
fn test_binary_second_fill_overwrites_positionally() {
    let node = binary_node("AND");
    let old_left = value_node("female");
    node.borrow_mut().set_children(&[old_left]);

    let new_left = value_node("asian");
    let new_right = value_node("vietnamese");
    node.borrow_mut()
        .set_children(&[new_left.clone(), new_right.clone()]);

    let children = node.borrow().children();
    assert_eq!(children.len(), 2);
    assert!(Rc::ptr_eq(&children[0], &new_left));
    assert!(Rc::ptr_eq(&children[1], &new_right));
}

#[test]
fn test_fewer_arguments_leave_slots_untouched() {
    let node = binary_node("AND");
    let left = value_node("a");
    let right = value_node("b");
    node.borrow_mut().set_children(&[left, right.clone()]);

    // A later one-argument call replaces left but must not clear right.
    let replacement = value_node("c");
    node.borrow_mut().set_children(&[replacement.clone()]);

    let children = node.borrow().children();
    assert_eq!(children.len(), 2);
    assert!(Rc::ptr_eq(&children[0], &replacement));
    assert!(Rc::ptr_eq(&children[1], &right));
}

#[test]
fn test_empty_fill_is_a_no_op() {
    let node = unary_node("NOT");
    let child = value_node("vietnamese");
    node.borrow_mut().set_children(&[child.clone()]);

    node.borrow_mut().set_children(&[]);

    let children = node.borrow().children();
    assert_eq!(children.len(), 1);
    assert!(Rc::ptr_eq(&children[0], &child));
}

#[test]
fn test_right_only_binary_reports_one_child() {
    // Addressing a single slot goes through the public field.
    let node = binary_node("OR");
    let right = value_node("vietnamese");

    if let Node::Binary(b) = &mut *node.borrow_mut() {
        b.right = Some(right.clone());
    }

    // The missing left side is omitted, not reported as a placeholder.
    let children = node.borrow().children();
    assert_eq!(children.len(), 1);
    assert!(Rc::ptr_eq(&children[0], &right));
}

// ============================================================================
// Values and metadata
// ============================================================================

#[test]
fn test_fresh_node_has_null_value() {
    assert!(Node::new_binary().borrow().value().is_null());
}

#[test]
fn test_set_value_idempotence() {
    let node = value_node("female");
    node.borrow_mut().set_value("female".into());
    assert_eq!(node.borrow().value().as_str(), Some("female"));
}

#[test]
fn test_set_value_latest_wins() {
    let node = value_node("female");
    node.borrow_mut().set_value("male".into());
    node.borrow_mut().set_value(Value::Integer(18));
    assert_eq!(*node.borrow().value(), Value::Integer(18));
}

#[test]
fn test_metadata_flags_are_independent() {
    let node = value_node("age");

    node.borrow_mut().metadata_mut().property = true;
    assert!(node.borrow().metadata().property);
    assert!(!node.borrow().metadata().segment);

    // Non-exclusive: both flags may be set.
    node.borrow_mut().metadata_mut().segment = true;
    assert!(node.borrow().metadata().property);
    assert!(node.borrow().metadata().segment);
}

// ============================================================================
// Parent linkage
// ============================================================================

#[test]
fn test_set_parent_does_not_touch_parents_children() {
    let parent = binary_node("AND");
    let child = value_node("female");

    child.borrow_mut().set_parent(&parent);

    // The relation is one-sided until set_children is called on the parent.
    assert!(parent.borrow().children().is_empty());

    parent.borrow_mut().set_children(&[child.clone()]);
    assert_eq!(parent.borrow().children().len(), 1);
    assert!(Rc::ptr_eq(&child.borrow().parent().unwrap(), &parent));
}

#[test]
fn test_set_children_does_not_touch_childrens_parents() {
    let parent = binary_node("AND");
    let child = value_node("female");

    parent.borrow_mut().set_children(&[child.clone()]);
    assert!(child.borrow().parent().is_none());
}

#[test]
fn test_parent_is_unset_on_fresh_nodes() {
    assert!(Node::new_value().borrow().parent().is_none());
}

#[test]
fn test_parent_reference_does_not_keep_parent_alive() {
    let child = value_node("female");
    {
        let parent = binary_node("AND");
        child.borrow_mut().set_parent(&parent);
        assert!(child.borrow().parent().is_some());
    }
    // Back-references are weak: dropping the owning handle frees the
    // parent even though the child still points at it.
    assert!(child.borrow().parent().is_none());
}

#[test]
fn test_children_outlive_dropped_parent() {
    let child = value_node("female");
    {
        let parent = binary_node("AND");
        parent.borrow_mut().set_children(&[child.clone()]);
        child.borrow_mut().set_parent(&parent);
    }
    assert_eq!(child.borrow().value().as_str(), Some("female"));
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_operator_symbols_round_trip() {
    let ops = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::LessThan,
        Operator::LessEqual,
        Operator::GreaterThan,
        Operator::GreaterEqual,
        Operator::Equal,
        Operator::NotEqual,
    ];

    for op in ops {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
}

#[test]
fn test_operator_lookup_is_case_insensitive() {
    assert_eq!(Operator::from_symbol("AND"), Some(Operator::And));
    assert_eq!(Operator::from_symbol("Not"), Some(Operator::Not));
    assert_eq!(Operator::from_symbol("or"), Some(Operator::Or));
}

#[test]
fn test_operator_lookup_rejects_non_operators() {
    assert_eq!(Operator::from_symbol("female"), None);
    assert_eq!(Operator::from_symbol(""), None);
    assert_eq!(Operator::from_symbol("=="), None);
}

#[test]
fn test_operator_classification() {
    assert!(Operator::And.is_logical());
    assert!(!Operator::And.is_comparison());
    assert!(Operator::LessEqual.is_comparison());
    assert!(!Operator::LessEqual.is_logical());
}

#[test]
fn test_operator_arity_matches_node_variant() {
    assert_eq!(Operator::Not.arity(), 1);
    assert_eq!(Operator::And.arity(), 2);
    assert_eq!(Operator::NotEqual.arity(), 2);
}
