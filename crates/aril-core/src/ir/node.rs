//! IR tree nodes

use serde::{Deserialize, Serialize};

/// A node of the target-IR tree
///
/// Built once by the transducer and never mutated afterwards. `Group`
/// is a structurally transparent sequence: the target has no tuple
/// type, so a group always renders as a flat comma list and never as
/// an aggregate literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrNode {
    /// An atomic piece of text (literal, tagged identifier, keyword)
    Leaf(String),

    /// A call form `head(arg, arg, ...)`; the head is never empty
    Call { head: String, args: Vec<IrNode> },

    /// A transparent sequence, rendered as a bare comma list
    Group(Vec<IrNode>),
}

impl IrNode {
    /// Create a leaf node
    pub fn leaf(text: impl Into<String>) -> Self {
        IrNode::Leaf(text.into())
    }

    /// Create a call node
    pub fn call(head: impl Into<String>, args: Vec<IrNode>) -> Self {
        let head = head.into();
        debug_assert!(!head.is_empty());
        IrNode::Call { head, args }
    }

    /// Create a transparent group
    pub fn group(items: Vec<IrNode>) -> Self {
        IrNode::Group(items)
    }

    /// Create a statement block, the `block(...)` call form
    pub fn block(items: Vec<IrNode>) -> Self {
        IrNode::call("block", items)
    }

    /// The leaf text, if this node is a leaf
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            IrNode::Leaf(text) => Some(text),
            _ => None,
        }
    }

    /// The call head, if this node is a call
    pub fn head(&self) -> Option<&str> {
        match self {
            IrNode::Call { head, .. } => Some(head),
            _ => None,
        }
    }
}
