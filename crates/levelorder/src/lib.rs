//! `levelorder` - Level-order traversal of binary trees
//!
//! This library groups the values of a binary tree by depth, root level first
//! or deepest level first, using any of three interchangeable algorithms. It
//! also decodes trees from the LeetCode level-order array form and from
//! index-based node tables, rejecting tables that contain cycles.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod digits;
pub mod error;
pub mod logging;
pub mod table;
pub mod traversal;
pub mod tree;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use table::{NodeTable, TableNode};
pub use traversal::{traverse, traverse_with, Algorithm, LevelOrder, Levels, Order};
pub use tree::{Tree, TreeNode};
