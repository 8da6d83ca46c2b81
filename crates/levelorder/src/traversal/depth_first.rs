//! Depth-first traversals.
//!
//! Both variants visit a node before its children and the left subtree before
//! the right one, so values reach each level in left-to-right order even
//! though levels fill up in interleaved fashion.

use super::{Algorithm, LevelOrder, Levels};
use crate::tree::TreeNode;

fn record(levels: &mut Levels, depth: usize, val: i32) {
    // Pre-order reaches depth d only after depth d - 1 has a level.
    if levels.len() == depth {
        levels.push(Vec::new());
    }
    levels[depth].push(val);
}

/// Recursive depth-first traversal.
///
/// Recursion depth equals tree height, so a very deep, unbalanced tree can
/// exhaust the thread's stack. Use [`IterativeDepthFirst`] or
/// [`BreadthFirst`](super::BreadthFirst) for such inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveDepthFirst;

impl RecursiveDepthFirst {
    fn visit(node: &TreeNode, depth: usize, mut levels: Levels) -> Levels {
        record(&mut levels, depth, node.val);
        node.children()
            .fold(levels, |levels, child| Self::visit(child, depth + 1, levels))
    }
}

impl LevelOrder for RecursiveDepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RecursiveDepthFirst
    }

    fn collect_levels(&self, root: &TreeNode) -> Levels {
        Self::visit(root, 0, Levels::new())
    }
}

/// Depth-first traversal with an explicit stack of `(node, depth)` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeDepthFirst;

impl LevelOrder for IterativeDepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::IterativeDepthFirst
    }

    fn collect_levels(&self, root: &TreeNode) -> Levels {
        let mut levels = Levels::new();
        let mut stack = vec![(root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            record(&mut levels, depth, node.val);
            // Right first so the left child is popped first.
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
        }

        levels
    }
}
