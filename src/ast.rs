//! # Targeting Query Trees
//!
//! This module defines the abstract syntax tree for ad-targeting query
//! expressions: boolean combinations of audience segments and user
//! properties, such as "female AND NOT vietnamese" or "age >= 18".
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[node]** - The three node variants, their linkage, and `accept`
//! - **[operators]** - The operator vocabulary (logical and comparison)
//!
//! ## Core Concepts
//!
//! ### Node Variants
//!
//! A tree is built from three node kinds, distinguished by arity:
//!
//! - [`ValueNode`] - a terminal: a segment name, property name, or literal
//! - [`UnaryNode`] - one operand (`NOT`)
//! - [`BinaryNode`] - two ordered operands (`AND`, `OR`, `<`, `>=`, ...)
//!
//! ### Ownership Direction
//!
//! Parents own their children through shared [`NodeRef`] handles; the
//! child-to-parent link is a weak back-reference used for lookup only.
//! Dropping the last handle to a subtree's root frees the subtree no
//! matter how many back-references point into it.
//!
//! ### Building a Tree
//!
//! Nodes are constructed empty and populated through setters. The parent
//! pointer and the parent's child slots are maintained independently;
//! builders set both sides themselves:
//!
//! ```
//! use adsquery::ast::Node;
//!
//! let and = Node::new_binary();
//! and.borrow_mut().set_value("AND".into());
//!
//! let female = Node::new_value();
//! female.borrow_mut().set_value("female".into());
//! female.borrow_mut().set_parent(&and);
//!
//! and.borrow_mut().set_children(&[female]);
//! ```
//!
//! ### Walking a Tree
//!
//! Two independent mechanisms walk a tree: the double-dispatch visitor
//! protocol ([`Node::accept`] with a [`crate::Visitor`]), and the plain
//! structural recursion in [`crate::dump`]. Both visit pre-order,
//! left before right.
pub mod node;
pub mod operators;

pub use node::{BinaryNode, Metadata, Node, NodeKind, NodeRef, UnaryNode, ValueNode};
pub use operators::Operator;
