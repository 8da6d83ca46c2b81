//! Owned binary tree of integers.
//!
//! Each node owns its children through `Option<Box<TreeNode>>`, so a [`Tree`]
//! is always a strict hierarchy: no shared children and no cycles. Trees are
//! usually written in the LeetCode level-order array form, e.g.
//! `[3,9,20,null,null,15,7]`, which [`Tree::from_level_order`] decodes.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::table::{NodeTable, TableNode};

/// A binary tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The value stored in this node.
    pub val: i32,
    /// Left child, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeNode>>,
    /// Right child, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a leaf node.
    #[must_use]
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Create a node with the given children.
    #[must_use]
    pub fn with_children(val: i32, left: Option<TreeNode>, right: Option<TreeNode>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Check if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Iterate over the present children, left first.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

impl Drop for TreeNode {
    // Unlink descendants onto a heap stack so a deep chain is freed without
    // one stack frame per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// A binary tree: a single optional root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    /// The root node, absent for an empty tree.
    pub root: Option<Box<TreeNode>>,
}

impl From<TreeNode> for Tree {
    fn from(node: TreeNode) -> Self {
        Self {
            root: Some(Box::new(node)),
        }
    }
}

impl Tree {
    /// Create an empty tree.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Borrow the root node.
    #[must_use]
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Check if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Count the nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TreeNode> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Number of levels in the tree (0 for an empty tree).
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&TreeNode, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Parse a tree from its level-order JSON array text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array of integers and
    /// nulls, or if the array does not describe a tree.
    pub fn parse(text: &str) -> Result<Self> {
        let slots: Vec<Option<i32>> = serde_json::from_str(text)?;
        Self::from_level_order(&slots)
    }

    /// Build a tree from the LeetCode level-order array form.
    ///
    /// Each present node consumes the next two slots as its left and right
    /// children; `None` marks an absent child.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLevelOrder`] if the root slot is null but more
    /// values follow, or if a value remains once every parent has been
    /// assigned its children. Trailing nulls are padding and are ignored.
    pub fn from_level_order(slots: &[Option<i32>]) -> Result<Self> {
        let end = slots.iter().rposition(Option::is_some).map_or(0, |last| last + 1);
        let Some((&first, rest)) = slots[..end].split_first() else {
            return Ok(Self::empty());
        };
        let Some(root_val) = first else {
            return Err(Error::invalid_level_order(
                "root is null but the array has more entries",
            ));
        };

        let mut nodes = vec![TableNode::leaf(root_val)];
        let mut parents = VecDeque::from([0usize]);
        let mut pending = rest.iter().copied().enumerate();

        while let Some(parent) = parents.pop_front() {
            for is_left in [true, false] {
                let Some((_, slot)) = pending.next() else {
                    break;
                };
                if let Some(val) = slot {
                    let child = nodes.len();
                    nodes.push(TableNode::leaf(val));
                    if is_left {
                        nodes[parent].left = Some(child);
                    } else {
                        nodes[parent].right = Some(child);
                    }
                    parents.push_back(child);
                }
            }
        }

        if let Some((offset, _)) = pending.find(|(_, slot)| slot.is_some()) {
            return Err(Error::invalid_level_order(format!(
                "entry at position {} has no parent",
                offset + 1
            )));
        }

        trace!(nodes = nodes.len(), "decoded level-order array");
        NodeTable::new(Some(0), nodes).into_tree()
    }

    /// Encode the tree in the LeetCode level-order array form.
    ///
    /// Trailing nulls are trimmed, so the output is the canonical encoding.
    #[must_use]
    pub fn to_level_order(&self) -> Vec<Option<i32>> {
        let mut slots = Vec::new();
        let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(Some(root));
        }
        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    slots.push(Some(node.val));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
                None => slots.push(None),
            }
        }
        while slots.last() == Some(&None) {
            slots.pop();
        }
        slots
    }
}
