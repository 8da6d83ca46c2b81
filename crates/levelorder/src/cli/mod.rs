//! Command-line interface for levelorder.
//!
//! This module provides the CLI structure and result rendering for the
//! `levelorder` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AlgorithmArg, CompareCommand, ConfigCommand, ConfusingCommand, FormatArg, OrderArg,
    TraverseCommand, TreeInput,
};

use crate::logging::Verbosity;

/// levelorder - Group binary tree values by depth
///
/// Traverses a binary tree level by level with a choice of breadth-first or
/// depth-first algorithms, top-down or bottom-up.
#[derive(Debug, Parser)]
#[command(name = "levelorder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Group a tree's values by level
    Traverse(TraverseCommand),

    /// Run every algorithm on a tree and check that they agree
    Compare(CompareCommand),

    /// Check whether numbers are confusing (valid but different upside down)
    Confusing(ConfusingCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
