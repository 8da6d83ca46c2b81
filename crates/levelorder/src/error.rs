//! Error types for levelorder.
//!
//! Traversal of an owned [`TreeNode`](crate::tree::TreeNode) cannot fail. Errors
//! arise at the boundaries: decoding tree input, validating an index-based
//! [`NodeTable`](crate::table::NodeTable), and loading configuration.

use thiserror::Error;

use crate::traversal::Levels;

/// The main error type for levelorder operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Malformed Tree Errors ===
    /// A node was reached again from one of its own descendants.
    #[error("cycle detected: node {node} is its own ancestor")]
    CycleDetected {
        /// Index of the node that closes the cycle.
        node: usize,
    },

    /// A node is the child of more than one parent.
    #[error("node {node} is shared by more than one parent")]
    SharedNode {
        /// Index of the shared node.
        node: usize,
    },

    /// A child (or root) index points outside the node table.
    #[error("{} refers to missing node {child}", describe_parent(.parent))]
    DanglingChild {
        /// Index of the referring node, `None` for the root reference.
        parent: Option<usize>,
        /// The out-of-range index.
        child: usize,
    },

    /// A level-order array does not describe a tree.
    #[error("invalid level-order array: {message}")]
    InvalidLevelOrder {
        /// Description of the problem.
        message: String,
    },

    // === Traversal Errors ===
    /// Two traversal algorithms disagreed on the same input.
    #[error("traversal mismatch: expected {expected:?}, got {actual:?}")]
    AlgorithmMismatch {
        /// Output of the reference algorithm.
        expected: Levels,
        /// Output of the disagreeing algorithm.
        actual: Levels,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for levelorder operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

fn describe_parent(parent: &Option<usize>) -> String {
    match parent {
        Some(index) => format!("node {index}"),
        None => "root".to_string(),
    }
}

impl Error {
    /// Create an invalid level-order error.
    #[must_use]
    pub fn invalid_level_order(message: impl Into<String>) -> Self {
        Self::InvalidLevelOrder {
            message: message.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error reports input that violates the tree invariant.
    #[must_use]
    pub fn is_malformed_tree(&self) -> bool {
        matches!(
            self,
            Self::CycleDetected { .. }
                | Self::SharedNode { .. }
                | Self::DanglingChild { .. }
                | Self::InvalidLevelOrder { .. }
        )
    }
}
