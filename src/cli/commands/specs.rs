//! cartwise specs - Extract structured specs from product text

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_json, robot_ok, HumanLayout};
use crate::core::Product;
use crate::error::{CartwiseError, Result};
use crate::specs::{compare_specs, extract_specs, SpecComparisonRow, SpecMap};

#[derive(Args, Debug)]
pub struct SpecsArgs {
    /// Free product text to analyze
    #[arg(conflicts_with_all = ["product", "file", "compare"])]
    pub text: Vec<String>,

    /// Analyze a product already in the cart
    #[arg(long)]
    pub product: Option<String>,

    /// Analyze products from a JSON file (object or array)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Compare two cart products side by side
    #[arg(long, num_args = 2, value_names = ["LEFT", "RIGHT"])]
    pub compare: Vec<String>,
}

#[derive(Serialize)]
struct ProductSpecs {
    id: String,
    name: String,
    specs: SpecMap,
}

pub fn run(ctx: &AppContext, args: &SpecsArgs) -> Result<()> {
    if !args.compare.is_empty() {
        return run_compare(ctx, &args.compare[0], &args.compare[1]);
    }

    if let Some(id) = &args.product {
        let state = ctx.load_state()?;
        let product = find_in_cart(&state, id)?;
        let specs = state.specs_for(&product);
        return emit_products(ctx, vec![ProductSpecs {
            id: product.id,
            name: product.name,
            specs,
        }]);
    }

    if let Some(path) = &args.file {
        let products = super::read_products(path)?;
        let rows = products
            .into_iter()
            .map(|product| ProductSpecs {
                specs: extract_specs(&product.spec_text()),
                id: product.id,
                name: product.name,
            })
            .collect();
        return emit_products(ctx, rows);
    }

    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err(CartwiseError::Validation(
            "provide product text, --product, --file or --compare".to_string(),
        ));
    }
    let specs = extract_specs(&text);
    if ctx.robot_mode {
        return emit_json(&robot_ok(&specs));
    }
    emit_human(spec_layout(&text, &specs));
    Ok(())
}

fn run_compare(ctx: &AppContext, left_id: &str, right_id: &str) -> Result<()> {
    let state = ctx.load_state()?;
    let left = find_in_cart(&state, left_id)?;
    let right = find_in_cart(&state, right_id)?;
    let rows = compare_specs(&state.specs_for(&left), &state.specs_for(&right));

    if ctx.robot_mode {
        return emit_json(&robot_ok(serde_json::json!({
            "left": left.id,
            "right": right.id,
            "rows": rows,
        })));
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("{} vs {}", left.name, right.name));
    if rows.is_empty() {
        layout.push_line("No specs detected for either product.".dimmed().to_string());
    }
    for row in &rows {
        layout.push_line(comparison_line(row));
    }
    emit_human(layout);
    Ok(())
}

fn comparison_line(row: &SpecComparisonRow) -> String {
    let left = row.left.as_deref().unwrap_or("-");
    let right = row.right.as_deref().unwrap_or("-");
    let line = format!("{:<14} {left:<28} {right}", row.label);
    if row.differs() {
        line.yellow().to_string()
    } else {
        line
    }
}

fn emit_products(ctx: &AppContext, rows: Vec<ProductSpecs>) -> Result<()> {
    if ctx.robot_mode {
        return emit_json(&robot_ok(rows));
    }
    for row in rows {
        emit_human(spec_layout(&format!("{} ({})", row.name, row.id), &row.specs));
    }
    Ok(())
}

fn spec_layout(heading: &str, specs: &SpecMap) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(heading);
    if specs.is_empty() {
        layout.push_line("No specs detected.".dimmed().to_string());
    }
    for (key, value) in specs.iter() {
        layout.kv(key.label(), value);
    }
    layout
}

fn find_in_cart(state: &crate::bundle::BundleState, id: &str) -> Result<Product> {
    state
        .cart()
        .iter()
        .find(|item| item.product.id == id)
        .map(|item| item.product.clone())
        .ok_or_else(|| CartwiseError::NotFound(format!("product '{id}' is not in the cart")))
}
