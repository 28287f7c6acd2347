pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod dump;
pub mod validate;
pub mod value;
pub mod visitor;

pub use ast::{BinaryNode, Metadata, Node, NodeKind, NodeRef, Operator, UnaryNode, ValueNode};
pub use dump::{DumpLine, dump, render};
pub use validate::{ValidationError, ValidationVisitor, validate};
pub use value::Value;
pub use visitor::Visitor;
