//! cartwise optimize - Request an optimized bundle, swap slots and apply it
//!
//! The bundle lives only for one invocation: swaps and `--apply` are given
//! together with the request. Only an applied bundle reaches the saved cart.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::bundle::{BundleState, OptimizationResult, SlotOrigin};
use crate::cli::output::{emit_human, emit_json, format_money, robot_ok, tier_badge, HumanLayout};
use crate::error::{CartwiseError, Result};
use crate::optimizer::{run_optimize, CannedOptimizer, HttpOptimizer, OptimizeResponse, OptimizerService};
use crate::quality::{budget_status, BudgetStatus};

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Use a recorded optimizer response instead of calling the service
    #[arg(long)]
    pub response: Option<PathBuf>,

    /// Swap a slot to one of its alternatives (slot id or index = product id)
    #[arg(long = "swap", value_name = "SLOT=ID")]
    pub swaps: Vec<SwapSpec>,

    /// Replace the cart with the resulting bundle
    #[arg(long)]
    pub apply: bool,

    /// Override the configured user id
    #[arg(long)]
    pub user_id: Option<String>,
}

/// `SLOT=PRODUCT_ID` as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapSpec {
    pub slot: String,
    pub product_id: String,
}

impl FromStr for SwapSpec {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let (slot, product_id) = value
            .split_once('=')
            .ok_or_else(|| format!("expected SLOT=ID, got '{value}'"))?;
        let (slot, product_id) = (slot.trim(), product_id.trim());
        if slot.is_empty() || product_id.is_empty() {
            return Err(format!("expected SLOT=ID, got '{value}'"));
        }
        Ok(Self {
            slot: slot.to_string(),
            product_id: product_id.to_string(),
        })
    }
}

#[derive(Serialize)]
struct OptimizeReport {
    bundle: OptimizationResult,
    budget: BudgetStatus,
    swaps: usize,
    applied: bool,
}

pub fn run(ctx: &AppContext, args: &OptimizeArgs) -> Result<()> {
    let mut state = ctx.load_state()?;
    let service = service_for(ctx, args)?;
    let user_id = args
        .user_id
        .as_deref()
        .unwrap_or(&ctx.config.optimizer.user_id);

    run_optimize(&mut state, service.as_ref(), user_id)?;

    for swap in &args.swaps {
        apply_swap(&mut state, swap)?;
    }

    let bundle = state.optimization().cloned().ok_or(CartwiseError::NoOptimization)?;
    let report = OptimizeReport {
        budget: budget_status(bundle.optimized_total(), state.budget()),
        bundle,
        swaps: args.swaps.len(),
        applied: args.apply,
    };

    if args.apply {
        state.apply_optimized_bundle()?;
        ctx.save_state(&state)?;
        tracing::info!(items = state.cart().len(), "applied optimized bundle");
    }

    if ctx.robot_mode {
        let mut response = robot_ok(&report);
        if report.budget.over_budget {
            response = response.with_warning(format!(
                "bundle total {} exceeds budget {}",
                format_money(report.bundle.optimized_total()),
                format_money(report.budget.budget)
            ));
        }
        return emit_json(&response);
    }
    emit_human(bundle_layout(&report));
    Ok(())
}

fn service_for(ctx: &AppContext, args: &OptimizeArgs) -> Result<Box<dyn OptimizerService>> {
    if let Some(path) = &args.response {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            CartwiseError::NotFound(format!("response file {}: {err}", path.display()))
        })?;
        let response: OptimizeResponse = serde_json::from_str(&raw)?;
        return Ok(Box::new(CannedOptimizer::new(response)));
    }
    Ok(Box::new(HttpOptimizer::from_config(&ctx.config.optimizer)?))
}

fn apply_swap(state: &mut BundleState, swap: &SwapSpec) -> Result<()> {
    let bundle = state.optimization().ok_or(CartwiseError::NoOptimization)?;
    let index = match swap.slot.parse::<usize>() {
        Ok(index) => index,
        Err(_) => bundle
            .slot_index(&swap.slot)
            .ok_or_else(|| CartwiseError::NotFound(format!("slot '{}'", swap.slot)))?,
    };
    let slot = bundle.slots().get(index).ok_or(CartwiseError::SlotOutOfRange {
        index,
        len: bundle.len(),
    })?;
    let product = bundle
        .alternatives(&slot.slot.slot_id)
        .iter()
        .find(|product| product.id == swap.product_id)
        .cloned()
        .ok_or_else(|| {
            CartwiseError::NotFound(format!(
                "'{}' is not an alternative for slot '{}'",
                swap.product_id, slot.slot.slot_id
            ))
        })?;
    state.swap(index, product)
}

fn bundle_layout(report: &OptimizeReport) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Optimized bundle");
    for (index, slot) in report.bundle.slots().iter().enumerate() {
        let origin = match slot.slot.origin {
            SlotOrigin::FromCart => "cart".dimmed(),
            SlotOrigin::Suggestion => "new".cyan(),
        };
        layout.push_line(format!(
            "{index:>2}. [{}] {} {}  {}",
            slot.slot.slot_id,
            slot.product.name.bold(),
            origin,
            format_money(slot.product.price)
        ));
        for alternative in report.bundle.alternatives(&slot.slot.slot_id) {
            layout.push_line(format!(
                "      alt {} {}  {}",
                alternative.id.dimmed(),
                alternative.name,
                format_money(alternative.price)
            ));
        }
    }
    layout.blank();
    layout.kv("Bundle total", &format_money(report.bundle.optimized_total()));
    layout.kv("Budget", &format_money(report.budget.budget));
    layout.kv("Tier", &tier_badge(report.budget.tier));
    if report.applied {
        layout.blank();
        layout.push_line("Bundle applied to cart.".green().to_string());
    }
    layout
}
