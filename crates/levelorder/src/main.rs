//! `levelorder` - CLI for level-order tree traversal
//!
//! This binary decodes a tree from the command line, traverses it with the
//! configured or requested algorithm, and prints the levels.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use levelorder::cli::output::{
    render_comparison, render_confusing, render_levels, ConfusingReport,
};
use levelorder::cli::{
    Cli, Command, CompareCommand, ConfigCommand, ConfusingCommand, FormatArg, TraverseCommand,
};
use levelorder::config::OutputFormat;
use levelorder::{init_logging, traversal, Algorithm, Config, Order};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match cli.command {
        Command::Traverse(cmd) => handle_traverse(&load_config(cli.config)?, &cmd),
        Command::Compare(cmd) => handle_compare(&load_config(cli.config)?, &cmd),
        Command::Confusing(cmd) => handle_confusing(&load_config(cli.config)?, &cmd),
        Command::Config(cmd) => handle_config(cli.config, cmd),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(path).context("loading configuration")
}

fn output_format(config: &Config, requested: Option<FormatArg>) -> OutputFormat {
    requested.map_or(config.output.format, OutputFormat::from)
}

fn handle_traverse(config: &Config, cmd: &TraverseCommand) -> anyhow::Result<()> {
    let tree = cmd.input.load().context("reading tree")?;
    let algorithm = cmd
        .algorithm
        .map_or(config.traversal.algorithm, Algorithm::from);
    let order = cmd.order.map_or(config.traversal.order, Order::from);

    let levels = algorithm.traverse(tree.root(), order);
    info!(%algorithm, %order, nodes = tree.node_count(), "traversed tree");

    let format = output_format(config, cmd.format);
    println!("{}", render_levels(&levels, format, config.output.pretty)?);
    Ok(())
}

fn handle_compare(config: &Config, cmd: &CompareCommand) -> anyhow::Result<()> {
    let tree = cmd.input.load().context("reading tree")?;
    let order = cmd.order.map_or(config.traversal.order, Order::from);

    let levels = traversal::compare(tree.root(), order)?;

    let format = output_format(config, cmd.format);
    println!("{}", render_comparison(&levels, format, config.output.pretty)?);
    Ok(())
}

fn handle_confusing(config: &Config, cmd: &ConfusingCommand) -> anyhow::Result<()> {
    let reports: Vec<ConfusingReport> = cmd
        .numbers
        .iter()
        .copied()
        .map(ConfusingReport::check)
        .collect();

    let format = output_format(config, cmd.format);
    println!("{}", render_confusing(&reports, format, config.output.pretty)?);
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Traversal]");
                println!("  Algorithm:          {}", config.traversal.algorithm);
                println!("  Order:              {}", config.traversal.order);
                println!();
                println!("[Output]");
                println!("  Format:             {:?}", config.output.format);
                println!("  Pretty JSON:        {}", config.output.pretty);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        // Checks the named file only; a broken active config must not mask it.
        ConfigCommand::Validate { file } => handle_validate(file.or(config_path))?,
    }
    Ok(())
}

fn handle_validate(file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    Config::load_from(Some(path.clone()))
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    println!("Configuration is valid.");
    Ok(())
}
