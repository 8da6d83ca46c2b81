//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::table::NodeTable;
use crate::traversal::{Algorithm, Order};
use crate::tree::Tree;

/// Tree input shared by the traversal commands.
#[derive(Debug, Args)]
pub struct TreeInput {
    /// Level-order JSON array, e.g. "[3,9,20,null,null,15,7]" ("-" reads stdin)
    pub tree: String,

    /// Read TREE as a node table: {"root": 0, "nodes": [{"val": 3, "left": 1}, ...]}
    #[arg(long)]
    pub table: bool,
}

impl TreeInput {
    /// Read the raw input text, from stdin when the argument is `-`.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin cannot be read.
    pub fn text(&self) -> Result<String> {
        self.text_from(std::io::stdin().lock())
    }

    /// Read the raw input text, from `reader` when the argument is `-`.
    ///
    /// # Errors
    ///
    /// Returns an error if `reader` cannot be read.
    pub fn text_from(&self, mut reader: impl Read) -> Result<String> {
        if self.tree == "-" {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            Ok(text)
        } else {
            Ok(self.tree.clone())
        }
    }

    /// Decode the input into a tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or does not describe a
    /// tree (including cyclic or shared node tables).
    pub fn load(&self) -> Result<Tree> {
        self.load_from(std::io::stdin().lock())
    }

    /// Decode the input into a tree, reading `reader` when the argument is `-`.
    ///
    /// # Errors
    ///
    /// Same as [`TreeInput::load`].
    pub fn load_from(&self, reader: impl Read) -> Result<Tree> {
        let text = self.text_from(reader)?;
        let tree = if self.table {
            NodeTable::parse(&text)?.into_tree()?
        } else {
            Tree::parse(&text)?
        };
        debug!(nodes = tree.node_count(), table = self.table, "loaded tree");
        Ok(tree)
    }
}

/// Traverse command arguments.
#[derive(Debug, Args)]
pub struct TraverseCommand {
    /// The tree to traverse
    #[command(flatten)]
    pub input: TreeInput,

    /// Traversal algorithm (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Level order (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub order: Option<OrderArg>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Compare command arguments.
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// The tree to traverse with every algorithm
    #[command(flatten)]
    pub input: TreeInput,

    /// Level order (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub order: Option<OrderArg>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Confusing-number command arguments.
#[derive(Debug, Args)]
pub struct ConfusingCommand {
    /// Numbers to check
    #[arg(required = true)]
    pub numbers: Vec<u64>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Algorithm argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Queue-based breadth-first
    Bfs,
    /// Recursive depth-first
    RecursiveDfs,
    /// Stack-based depth-first
    IterativeDfs,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bfs => Self::BreadthFirst,
            AlgorithmArg::RecursiveDfs => Self::RecursiveDepthFirst,
            AlgorithmArg::IterativeDfs => Self::IterativeDepthFirst,
        }
    }
}

/// Level order argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Root level first
    TopDown,
    /// Deepest level first
    BottomUp,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::TopDown => Self::TopDown,
            OrderArg::BottomUp => Self::BottomUp,
        }
    }
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One line per level
    Plain,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => Self::Plain,
            FormatArg::Json => Self::Json,
        }
    }
}
