//! Level-order traversal of binary trees.
//!
//! Three interchangeable algorithms produce the same grouping of node values
//! by depth:
//!
//! - **Breadth-first** with a FIFO queue, one level per drain.
//! - **Recursive depth-first**, threading the accumulated levels through each call.
//! - **Iterative depth-first** with an explicit `(node, depth)` stack.
//!
//! Every algorithm accumulates levels root-first. [`Order::BottomUp`] is
//! produced by reversing the finished result once.
//!
//! # Example
//!
//! ```
//! use levelorder::{traverse, Algorithm, Order, Tree};
//!
//! let tree = Tree::parse("[3,9,20,null,null,15,7]").unwrap();
//!
//! assert_eq!(traverse(tree.root(), false), vec![vec![3], vec![9, 20], vec![15, 7]]);
//! assert_eq!(
//!     Algorithm::IterativeDepthFirst.traverse(tree.root(), Order::BottomUp),
//!     vec![vec![15, 7], vec![9, 20], vec![3]]
//! );
//! ```

mod breadth_first;
mod depth_first;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::tree::TreeNode;

pub use breadth_first::BreadthFirst;
pub use depth_first::{IterativeDepthFirst, RecursiveDepthFirst};

/// Node values grouped by level, each level ordered left to right.
pub type Levels = Vec<Vec<i32>>;

/// Order in which levels appear in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Root level first.
    #[default]
    TopDown,
    /// Deepest level first.
    BottomUp,
}

impl Order {
    /// Select the order from a `bottom_up` flag.
    #[must_use]
    pub fn from_bottom_up(bottom_up: bool) -> Self {
        if bottom_up {
            Self::BottomUp
        } else {
            Self::TopDown
        }
    }

    /// Check if this is the deepest-first order.
    #[must_use]
    pub fn is_bottom_up(self) -> bool {
        self == Self::BottomUp
    }

    /// Arrange root-first levels in this order.
    #[must_use]
    pub fn arrange(self, mut levels: Levels) -> Levels {
        if self.is_bottom_up() {
            levels.reverse();
        }
        levels
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopDown => write!(f, "top-down"),
            Self::BottomUp => write!(f, "bottom-up"),
        }
    }
}

/// A level-order traversal algorithm.
///
/// Implementations are stateless; every call is independent.
pub trait LevelOrder {
    /// The algorithm this implementation provides.
    fn algorithm(&self) -> Algorithm;

    /// Collect the values of the tree rooted at `root`, grouped by depth,
    /// root level first.
    fn collect_levels(&self, root: &TreeNode) -> Levels;
}

/// Selects one of the traversal algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Queue-based breadth-first traversal.
    #[default]
    #[serde(rename = "bfs")]
    BreadthFirst,
    /// Recursive depth-first traversal.
    #[serde(rename = "recursive-dfs")]
    RecursiveDepthFirst,
    /// Stack-based depth-first traversal.
    #[serde(rename = "iterative-dfs")]
    IterativeDepthFirst,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BreadthFirst => write!(f, "bfs"),
            Self::RecursiveDepthFirst => write!(f, "recursive-dfs"),
            Self::IterativeDepthFirst => write!(f, "iterative-dfs"),
        }
    }
}

impl Algorithm {
    /// All algorithms, the default first.
    pub const ALL: [Self; 3] = [
        Self::BreadthFirst,
        Self::RecursiveDepthFirst,
        Self::IterativeDepthFirst,
    ];

    fn implementation(self) -> &'static dyn LevelOrder {
        match self {
            Self::BreadthFirst => &BreadthFirst,
            Self::RecursiveDepthFirst => &RecursiveDepthFirst,
            Self::IterativeDepthFirst => &IterativeDepthFirst,
        }
    }

    /// Traverse the tree rooted at `root` with this algorithm.
    ///
    /// An absent root is an empty tree and yields no levels.
    #[must_use]
    pub fn traverse(self, root: Option<&TreeNode>, order: Order) -> Levels {
        traverse_with(self.implementation(), root, order)
    }
}

/// Traverse the tree rooted at `root` with any [`LevelOrder`] implementation.
///
/// This is the single place where an absent root is handled, so
/// implementations only ever see a present node.
#[must_use]
pub fn traverse_with(
    implementation: &dyn LevelOrder,
    root: Option<&TreeNode>,
    order: Order,
) -> Levels {
    let Some(root) = root else {
        return Levels::new();
    };
    let levels = order.arrange(implementation.collect_levels(root));
    debug!(
        algorithm = %implementation.algorithm(),
        %order,
        levels = levels.len(),
        "traversal complete"
    );
    levels
}

/// Group the tree's values by level, deepest level first if `bottom_up`.
///
/// Uses the default algorithm, [`Algorithm::BreadthFirst`].
#[must_use]
pub fn traverse(root: Option<&TreeNode>, bottom_up: bool) -> Levels {
    Algorithm::default().traverse(root, Order::from_bottom_up(bottom_up))
}

/// Run every algorithm on the same tree and check that they agree.
///
/// Returns the shared result.
///
/// # Errors
///
/// Returns [`Error::AlgorithmMismatch`] if any algorithm's output differs
/// from the default algorithm's.
pub fn compare(root: Option<&TreeNode>, order: Order) -> Result<Levels> {
    let [reference, others @ ..] = Algorithm::ALL;
    let expected = reference.traverse(root, order);
    for algorithm in others {
        let actual = algorithm.traverse(root, order);
        if actual != expected {
            warn!(%reference, %algorithm, "traversal algorithms disagree");
            return Err(Error::AlgorithmMismatch { expected, actual });
        }
    }
    Ok(expected)
}
