//! Reference validation pass.
//!
//! Demonstrates the visitor contract's fail-soft error model: violations
//! are collected as independent records over a full walk, never thrown,
//! so one bad node cannot hide another. The policy itself is a
//! placeholder - a real rule engine supplies its own visitor with its own
//! rules and only needs the same four methods.

use std::fmt;

use log::debug;

use crate::ast::{Node, NodeRef};
use crate::visitor::Visitor;

/// Errors recorded by [`ValidationVisitor`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A terminal value the validator has no rule for.
    UnsupportedValue(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnsupportedValue(v) => {
                write!(f, "unsupported value: {}", v)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A pass that accumulates one error record per violation found.
///
/// The reference policy flags every terminal node it reaches; operator
/// nodes pass untouched. Errors accumulate across the whole walk rather
/// than aborting at the first finding.
///
/// # Examples
///
/// ```
/// use adsquery::ast::Node;
/// use adsquery::validate::ValidationVisitor;
///
/// let leaf = Node::new_value();
/// leaf.borrow_mut().set_value("female".into());
///
/// let mut visitor = ValidationVisitor::new();
/// leaf.borrow().accept(&mut visitor);
/// assert_eq!(visitor.errors().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ValidationVisitor {
    errors: Vec<ValidationError>,
}

impl ValidationVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The errors recorded so far, in visit order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the visitor, returning the recorded errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl Visitor for ValidationVisitor {
    fn visit_value_node(&mut self, node: &Node) {
        self.errors
            .push(ValidationError::UnsupportedValue(node.value().to_string()));
    }
}

/// Runs a full validation walk over the tree rooted at `root`.
pub fn validate(root: &NodeRef) -> Vec<ValidationError> {
    let mut visitor = ValidationVisitor::new();
    root.borrow().accept(&mut visitor);
    debug!("validation walk finished: {} error(s)", visitor.errors.len());
    visitor.into_errors()
}
