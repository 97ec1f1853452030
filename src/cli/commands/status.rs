//! cartwise status - Cart total, budget tier and quality score

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_json, format_money, robot_ok, HumanLayout};
use crate::error::Result;
use crate::quality::{BudgetStatus, QualityScore};

#[derive(Args, Debug)]
pub struct StatusArgs {}

#[derive(Serialize)]
struct StatusReport {
    line_count: usize,
    item_count: u32,
    cart_total: f64,
    budget: BudgetStatus,
    quality: QualityScore,
}

pub fn run(ctx: &AppContext, _args: &StatusArgs) -> Result<()> {
    let state = ctx.load_state()?;
    let report = StatusReport {
        line_count: state.cart().len(),
        item_count: state.item_count(),
        cart_total: state.cart_total(),
        budget: state.budget_status(),
        quality: state.quality_score(),
    };

    if ctx.robot_mode {
        return emit_json(&robot_ok(&report));
    }

    let mut layout = HumanLayout::new();
    layout.title("Cart status");
    layout.kv("Lines", &report.line_count.to_string());
    layout.kv("Items", &report.item_count.to_string());
    layout.kv("Total", &format_money(report.cart_total));
    layout.blank();
    emit_human(layout);

    emit_human(super::budget::budget_layout(&report.budget));

    let mut quality = HumanLayout::new();
    quality.blank();
    quality.section("Quality");
    quality.kv(
        "Score",
        &format!("{:.1}/10 ({})", report.quality.overall, report.quality.grade.label()),
    );
    quality.kv("Avg rating", &format!("{:.2}", report.quality.average_rating));
    quality.kv("Categories", &report.quality.distinct_categories.to_string());
    emit_human(quality);
    Ok(())
}
