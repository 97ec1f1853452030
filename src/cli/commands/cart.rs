//! cartwise cart - Inspect and edit the cart

use std::path::PathBuf;

use clap::{Args, Subcommand};
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::bundle::BundleState;
use crate::cli::output::{emit_human, emit_json, format_money, robot_ok, HumanLayout};
use crate::core::{CartItem, Product};
use crate::error::{CartwiseError, Result};

#[derive(Args, Debug)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Add a product (from flags or a JSON file)
    Add(AddArgs),
    /// Remove a product by id
    Remove(RemoveArgs),
    /// List cart contents
    List,
    /// Remove everything from the cart
    Clear,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// JSON file holding one product or an array of products
    #[arg(long, conflicts_with_all = ["id", "name", "price"])]
    pub file: Option<PathBuf>,

    #[arg(long, requires_all = ["name", "price"])]
    pub id: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Rating between 0 and 5
    #[arg(long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    pub id: String,
}

#[derive(Serialize)]
struct CartView<'a> {
    items: &'a [CartItem],
    item_count: u32,
    total: f64,
    budget: f64,
}

pub fn run(ctx: &AppContext, args: &CartArgs) -> Result<()> {
    let mut state = ctx.load_state()?;
    match &args.command {
        CartCommand::Add(add) => run_add(ctx, &mut state, add),
        CartCommand::Remove(remove) => {
            let removed = state.remove_from_cart(&remove.id);
            if removed {
                ctx.save_state(&state)?;
            }
            if ctx.robot_mode {
                return emit_json(&robot_ok(serde_json::json!({
                    "id": remove.id,
                    "removed": removed,
                })));
            }
            if removed {
                println!("{} {}", "Removed".green(), remove.id);
            } else {
                println!("{} {} is not in the cart", "Skipped".yellow(), remove.id);
            }
            Ok(())
        }
        CartCommand::List => emit_cart(ctx, &state),
        CartCommand::Clear => {
            let count = state.cart().len();
            state.clear_cart();
            ctx.save_state(&state)?;
            if ctx.robot_mode {
                return emit_json(&robot_ok(serde_json::json!({ "cleared": count })));
            }
            println!("{} {count} item(s)", "Cleared".green());
            Ok(())
        }
    }
}

fn run_add(ctx: &AppContext, state: &mut BundleState, args: &AddArgs) -> Result<()> {
    let products = match &args.file {
        Some(path) => super::read_products(path)?,
        None => vec![product_from_flags(args)?],
    };

    // Validate everything before the first insert so a bad file adds nothing.
    for product in &products {
        product.validate()?;
    }

    let mut added = Vec::new();
    let mut skipped = Vec::new();
    for product in products {
        let id = product.id.clone();
        if state.add_to_cart(product)? {
            added.push(id);
        } else {
            skipped.push(id);
        }
    }
    if !added.is_empty() {
        ctx.save_state(state)?;
    }

    if ctx.robot_mode {
        return emit_json(&robot_ok(serde_json::json!({
            "added": added,
            "already_present": skipped,
            "total": state.cart_total(),
        })));
    }
    for id in &added {
        println!("{} {id}", "Added".green());
    }
    for id in &skipped {
        println!("{} {id} is already in the cart", "Skipped".yellow());
    }
    println!("Cart total: {}", format_money(state.cart_total()).bold());
    Ok(())
}

fn product_from_flags(args: &AddArgs) -> Result<Product> {
    let (Some(id), Some(name), Some(price)) = (&args.id, &args.name, args.price) else {
        return Err(CartwiseError::Validation(
            "cart add needs --file or --id, --name and --price".to_string(),
        ));
    };
    let mut product = Product::new(id.as_str(), name.as_str(), price);
    if let Some(brand) = &args.brand {
        product = product.with_brand(brand.as_str());
    }
    if let Some(category) = &args.category {
        product = product.with_category(category.as_str());
    }
    if let Some(rating) = args.rating {
        product = product.with_rating(rating);
    }
    if let Some(description) = &args.description {
        product = product.with_description(description.as_str());
    }
    Ok(product)
}

fn emit_cart(ctx: &AppContext, state: &BundleState) -> Result<()> {
    if ctx.robot_mode {
        return emit_json(&robot_ok(CartView {
            items: state.cart(),
            item_count: state.item_count(),
            total: state.cart_total(),
            budget: state.budget(),
        }));
    }

    let mut layout = HumanLayout::new();
    layout.title("Cart");
    if state.cart().is_empty() {
        layout.push_line("The cart is empty.".dimmed().to_string());
    }
    for item in state.cart() {
        let quantity = if item.quantity > 1 {
            format!(" x{}", item.quantity)
        } else {
            String::new()
        };
        layout.bullet(&format!(
            "{} {}{quantity}  {}",
            item.product.id.cyan(),
            item.product.name,
            format_money(item.line_total())
        ));
    }
    layout.blank();
    layout.kv("Items", &state.item_count().to_string());
    layout.kv("Total", &format_money(state.cart_total()));
    emit_human(layout);
    Ok(())
}
