//! Queue-based breadth-first traversal.

use std::collections::VecDeque;

use super::{Algorithm, LevelOrder, Levels};
use crate::tree::TreeNode;

/// Breadth-first traversal.
///
/// The queue holds exactly one level at the start of each pass. Draining that
/// many nodes yields the level while their children, left then right, queue
/// up as the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl LevelOrder for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn collect_levels(&self, root: &TreeNode) -> Levels {
        let mut levels = Levels::new();
        let mut queue = VecDeque::from([root]);

        while !queue.is_empty() {
            let width = queue.len();
            let mut level = Vec::with_capacity(width);
            for _ in 0..width {
                let Some(node) = queue.pop_front() else {
                    break;
                };
                level.push(node.val);
                queue.extend(node.children());
            }
            levels.push(level);
        }

        levels
    }
}
