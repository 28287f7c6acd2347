//! Documentation content for the adsq CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Nodes,
    Operators,
    Visitors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "nodes" | "node" | "tree" => Some(Self::Nodes),
            "operators" | "ops" => Some(Self::Operators),
            "visitors" | "visitor" | "passes" => Some(Self::Visitors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"ADSQUERY DOCUMENTATION

adsquery represents boolean ad-targeting expressions - combinations of
audience segments and user properties - as a tree of typed nodes, and lets
semantic passes walk that tree through a visitor protocol.

DOCUMENTATION CATEGORIES

  nodes             The three node variants, arity rules, and tree linkage
  operators         Logical and comparison operators and their tokens
  visitors          The traversal contract for semantic passes

QUICK REFERENCE

  ValueNode         Terminal: segment name, property name, or literal
  UnaryNode         One operand (not)
  BinaryNode        Two ordered operands (and, or, < <= > >= = <>)
  accept(visitor)   Pre-order double-dispatch walk
  dump(root, 0)     Structural walk producing (value, depth) lines

Use 'adsq doc <category>' for details, 'adsq demo' for a worked example.
"#
}

/// Get documentation content for a category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    let category =
        DocCategory::from_str(name).ok_or_else(|| CliError::UnknownCategory(name.to_string()))?;

    Ok(match category {
        DocCategory::Nodes => DOC_NODES,
        DocCategory::Operators => DOC_OPERATORS,
        DocCategory::Visitors => DOC_VISITORS,
    })
}

const DOC_NODES: &str = r#"NODES

A targeting expression is a tree of three node kinds:

  ValueNode         arity 0. A terminal: "female", "age", 18.
  UnaryNode         arity 1. Carries "NOT" and one operand.
  BinaryNode        arity 2. Carries "AND", "OR", or a comparison, with
                    ordered left and right operands.

All kinds share the same capability set: a value, metadata flags
(segment/property), a parent back-reference, child slots up to the arity,
and accept(visitor).

LINKAGE

Parents own children; the child's parent pointer is a weak back-reference.
The two relations are set independently: set_parent never touches the
parent's child slots, and set_children never touches the children's parent
pointers. Builders assign both sides.

set_children fills slots positionally - first argument to the first slot,
second to the second. Extra arguments are ignored; missing arguments leave
slots as they were. Partially filled operator nodes are valid intermediate
states, not errors.
"#;

const DOC_OPERATORS: &str = r#"OPERATORS

Logical:

  not               Single operand (UnaryNode)
  and               Two operands (BinaryNode)
  or                Two operands (BinaryNode)

Comparison (all two operands, order significant):

  <                 Less than
  <=                Less than or equal
  >                 Greater than
  >=                Greater than or equal
  =                 Equal
  <>                Not equal

Tokens are matched case-insensitively; tree builders conventionally use
uppercase keywords ("AND", "NOT") as node values.
"#;

const DOC_VISITORS: &str = r#"VISITORS

A semantic pass implements the Visitor trait - one reaction method per
node variant plus a reserved generic hook - and calls accept on the tree's
root. The tree drives the walk:

  1. The node invokes the visitor method matching its own variant.
  2. The node recurses into its populated children, left before right.

The walk is pre-order and visits every reachable node exactly once. A
visitor cannot reorder the walk or cut it short; a pass that wants to stop
reacting keeps its own flag and ignores the remaining calls.

Failures are data, not exceptions: the bundled ValidationVisitor collects
one error record per finding across the whole walk rather than aborting at
the first.
"#;
