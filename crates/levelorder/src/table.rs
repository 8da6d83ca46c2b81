//! Index-based node table.
//!
//! A [`NodeTable`] stores nodes in a flat vector and links them by index. Unlike
//! [`Tree`], it can describe structures that are not trees at all: a node that
//! is its own ancestor, a node with two parents, or a link to a missing index.
//! [`NodeTable::into_tree`] checks for all three and refuses them instead of
//! looping or duplicating nodes.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::tree::{Tree, TreeNode};

/// A node in a [`NodeTable`], linking to its children by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableNode {
    /// The value stored in this node.
    pub val: i32,
    /// Index of the left child.
    #[serde(default)]
    pub left: Option<usize>,
    /// Index of the right child.
    #[serde(default)]
    pub right: Option<usize>,
}

impl TableNode {
    /// Create a node with no children.
    #[must_use]
    pub fn leaf(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }
}

/// A flat table of nodes plus the index of the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTable {
    /// Index of the root node, `None` for an empty tree.
    #[serde(default)]
    pub root: Option<usize>,
    /// All nodes. Entries not reachable from the root are ignored.
    #[serde(default)]
    pub nodes: Vec<TableNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Queued,
    OnPath,
    Done,
}

impl NodeTable {
    /// Create a table from a root index and its nodes.
    #[must_use]
    pub fn new(root: Option<usize>, nodes: Vec<TableNode>) -> Self {
        Self { root, nodes }
    }

    /// Parse a table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid table document.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check that the nodes reachable from the root form a tree.
    ///
    /// Returns the reachable node indices in post-order (children before
    /// their parent).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingChild`] for a link outside the table,
    /// [`Error::CycleDetected`] for a node that is its own ancestor, and
    /// [`Error::SharedNode`] for a node with more than one parent.
    pub fn validate(&self) -> Result<Vec<usize>> {
        let Some(root) = self.root else {
            return Ok(Vec::new());
        };
        if root >= self.nodes.len() {
            return Err(Error::DanglingChild {
                parent: None,
                child: root,
            });
        }

        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut post_order = Vec::new();
        // (node, children already pushed)
        let mut stack = vec![(root, false)];
        marks[root] = Mark::Queued;

        while let Some((index, expanded)) = stack.pop() {
            if expanded {
                marks[index] = Mark::Done;
                post_order.push(index);
                continue;
            }
            marks[index] = Mark::OnPath;
            stack.push((index, true));

            let node = self.nodes[index];
            for child in [node.right, node.left].into_iter().flatten() {
                match marks.get(child).copied() {
                    None => {
                        return Err(Error::DanglingChild {
                            parent: Some(index),
                            child,
                        })
                    }
                    Some(Mark::OnPath) => return Err(Error::CycleDetected { node: child }),
                    Some(Mark::Queued | Mark::Done) => {
                        return Err(Error::SharedNode { node: child })
                    }
                    Some(Mark::Unvisited) => {
                        marks[child] = Mark::Queued;
                        stack.push((child, false));
                    }
                }
            }
        }

        trace!(reachable = post_order.len(), "node table validated");
        Ok(post_order)
    }

    /// Validate the table and convert it into an owned [`Tree`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`NodeTable::validate`].
    pub fn into_tree(self) -> Result<Tree> {
        let post_order = self.validate()?;
        let Some(root) = self.root else {
            return Ok(Tree::empty());
        };

        let mut built: Vec<Option<TreeNode>> = vec![None; self.nodes.len()];
        for index in post_order {
            let node = self.nodes[index];
            let left = node.left.and_then(|child| built[child].take());
            let right = node.right.and_then(|child| built[child].take());
            built[index] = Some(TreeNode::with_children(node.val, left, right));
        }

        debug!(nodes = self.nodes.len(), "built tree from node table");
        Ok(Tree {
            root: built[root].take().map(Box::new),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(val: i32, left: Option<usize>, right: Option<usize>) -> TableNode {
        TableNode { val, left, right }
    }

    #[test]
    fn test_empty_table() {
        let table = NodeTable::default();
        assert!(table.validate().unwrap().is_empty());
        assert!(table.into_tree().unwrap().is_empty());
    }

    #[test]
    fn test_into_tree_sample() {
        let table = NodeTable::new(
            Some(0),
            vec![
                node(3, Some(1), Some(2)),
                TableNode::leaf(9),
                node(20, Some(3), Some(4)),
                TableNode::leaf(15),
                TableNode::leaf(7),
            ],
        );
        let tree = table.into_tree().unwrap();
        assert_eq!(tree, Tree::parse("[3,9,20,null,null,15,7]").unwrap());
    }

    #[test]
    fn test_validate_post_order() {
        let table = NodeTable::new(
            Some(0),
            vec![node(1, Some(1), Some(2)), TableNode::leaf(2), TableNode::leaf(3)],
        );
        assert_eq!(table.validate().unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn test_root_not_first() {
        let table = NodeTable::new(
            Some(2),
            vec![TableNode::leaf(7), TableNode::leaf(8), node(1, None, Some(0))],
        );
        let tree = table.into_tree().unwrap();
        assert_eq!(tree.to_level_order(), vec![Some(1), None, Some(7)]);
    }

    #[test]
    fn test_unreachable_nodes_ignored() {
        let table = NodeTable::new(Some(0), vec![TableNode::leaf(1), node(2, Some(1), None)]);
        let tree = table.into_tree().unwrap();
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let table = NodeTable::new(Some(0), vec![node(1, Some(0), None)]);
        let err = table.into_tree().unwrap_err();
        assert!(matches!(err, Error::CycleDetected { node: 0 }));
    }

    #[test]
    fn test_back_edge_is_cycle() {
        let table = NodeTable::new(
            Some(0),
            vec![node(1, Some(1), None), node(2, None, Some(2)), node(3, Some(0), None)],
        );
        let err = table.validate().unwrap_err();
        assert!(matches!(err, Error::CycleDetected { node: 0 }));
    }

    #[test]
    fn test_shared_child_rejected() {
        let table = NodeTable::new(
            Some(0),
            vec![
                node(1, Some(1), Some(2)),
                node(2, Some(3), None),
                node(3, Some(3), None),
                TableNode::leaf(4),
            ],
        );
        let err = table.validate().unwrap_err();
        assert!(matches!(err, Error::SharedNode { node: 3 }));
    }

    #[test]
    fn test_same_child_twice_rejected() {
        let table = NodeTable::new(Some(0), vec![node(1, Some(1), Some(1)), TableNode::leaf(2)]);
        let err = table.validate().unwrap_err();
        assert!(err.is_malformed_tree());
    }

    #[test]
    fn test_link_to_pending_sibling_is_shared_not_cycle() {
        let table = NodeTable::new(
            Some(0),
            vec![node(1, Some(1), Some(2)), node(2, Some(2), None), TableNode::leaf(3)],
        );
        let err = table.validate().unwrap_err();
        assert!(matches!(err, Error::SharedNode { node: 2 }));
    }

    #[test]
    fn test_dangling_child() {
        let table = NodeTable::new(Some(0), vec![node(1, None, Some(5))]);
        let err = table.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingChild {
                parent: Some(0),
                child: 5
            }
        ));
    }

    #[test]
    fn test_dangling_root() {
        let table = NodeTable::new(Some(1), vec![TableNode::leaf(1)]);
        let err = table.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingChild {
                parent: None,
                child: 1
            }
        ));
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let depth = 100_000;
        let nodes = (0..depth)
            .map(|i| {
                let next = if i + 1 < depth { Some(i + 1) } else { None };
                node(i32::try_from(i).unwrap(), next, None)
            })
            .collect();
        let table = NodeTable::new(Some(0), nodes);
        assert_eq!(table.validate().unwrap().len(), depth);

        let tree = table.into_tree().unwrap();
        assert_eq!(tree.height(), depth);
    }

    #[test]
    fn test_parse_table_json() {
        let table = NodeTable::parse(
            r#"{"root": 0, "nodes": [{"val": 1, "left": 1}, {"val": 2}]}"#,
        )
        .unwrap();
        assert_eq!(table.root, Some(0));
        assert_eq!(table.nodes[0].left, Some(1));
        assert_eq!(table.nodes[1].right, None);
    }

    #[test]
    fn test_parse_cyclic_table_json() {
        let table = NodeTable::parse(r#"{"root": 0, "nodes": [{"val": 1, "right": 0}]}"#).unwrap();
        assert!(matches!(
            table.into_tree().unwrap_err(),
            Error::CycleDetected { .. }
        ));
    }
}
