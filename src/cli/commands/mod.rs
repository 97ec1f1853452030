//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::Path;

use serde::Deserialize;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::core::Product;
use crate::error::{CartwiseError, Result};

pub mod budget;
pub mod cart;
pub mod completions;
pub mod optimize;
pub mod specs;
pub mod status;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Specs(args) => specs::run(ctx, args),
        Commands::Cart(args) => cart::run(ctx, args),
        Commands::Budget(args) => budget::run(ctx, args),
        Commands::Status(args) => status::run(ctx, args),
        Commands::Optimize(args) => optimize::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductsFile {
    Many(Vec<Product>),
    One(Box<Product>),
}

/// Read one product or an array of products from a JSON file.
pub(crate) fn read_products(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        CartwiseError::NotFound(format!("product file {}: {err}", path.display()))
    })?;
    let parsed: ProductsFile = serde_json::from_str(&raw)?;
    Ok(match parsed {
        ProductsFile::Many(products) => products,
        ProductsFile::One(product) => vec![*product],
    })
}
