//! Binary tree node with stable identity
//!
//! Children are owned (`Option<Box<TreeNode>>`), so trees are finite and
//! acyclic by construction. Node ids are assigned once, at build time, and
//! never change: a rendering surface may key its visual elements by id and
//! rely on identity continuity across an animation sequence.

use std::fmt;

/// A node of a binary tree.
///
/// `value` is read-only for source trees; the traversal engines only ever
/// attach children to nodes they synthesized themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Node value.
    pub value: i64,

    /// Stable, unique, debug-readable identifier.
    pub id: String,

    /// Left child, if any.
    pub left: Option<Box<TreeNode>>,

    /// Right child, if any.
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a childless node.
    pub fn leaf(value: i64, id: impl Into<String>) -> Self {
        Self {
            value,
            id: id.into(),
            left: None,
            right: None,
        }
    }

    /// Left child as a plain reference.
    #[inline]
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Right child as a plain reference.
    #[inline]
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Check if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted here (a lone node has height 1).
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, TreeNode::height);
        let right = self.right().map_or(0, TreeNode::height);
        left.max(right) + 1
    }

    /// Number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        let left = self.left().map_or(0, TreeNode::node_count);
        let right = self.right().map_or(0, TreeNode::node_count);
        left + right + 1
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.value, self.id)
    }
}
