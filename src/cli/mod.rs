//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// cartwise - shopping cart, budget and bundle optimizer
#[derive(Parser, Debug)]
#[command(name = "cartwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON on stdout for machine consumption
    #[arg(long, global = true, env = "CARTWISE_ROBOT")]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/cartwise/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract structured specs from product text
    Specs(commands::specs::SpecsArgs),

    /// Inspect and edit the cart
    Cart(commands::cart::CartArgs),

    /// Show or change the budget ceiling
    Budget(commands::budget::BudgetArgs),

    /// Cart total, budget tier and quality score
    Status(commands::status::StatusArgs),

    /// Request an optimized bundle, optionally swap and apply it
    Optimize(commands::optimize::OptimizeArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
