//! cartwise budget - Show or change the budget ceiling

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_json, format_money, robot_ok, tier_badge, HumanLayout};
use crate::error::Result;
use crate::quality::BudgetStatus;

#[derive(Args, Debug)]
pub struct BudgetArgs {
    #[command(subcommand)]
    pub command: BudgetCommand,
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommand {
    /// Show how much of the budget the cart uses
    Show,
    /// Set the budget ceiling
    Set {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

pub fn run(ctx: &AppContext, args: &BudgetArgs) -> Result<()> {
    let mut state = ctx.load_state()?;
    if let BudgetCommand::Set { amount } = &args.command {
        state.set_budget(*amount)?;
        ctx.save_state(&state)?;
        if !ctx.robot_mode {
            println!("{} {}", "Budget set to".green(), format_money(*amount).bold());
        }
    }

    let status = state.budget_status();
    if ctx.robot_mode {
        return emit_json(&robot_ok(&status));
    }
    emit_human(budget_layout(&status));
    Ok(())
}

pub(crate) fn budget_layout(status: &BudgetStatus) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.section("Budget");
    layout.kv("Ceiling", &format_money(status.budget));
    layout.kv("Spent", &format_money(status.total));
    layout.kv("Remaining", &format_money(status.remaining));
    if status.invalid_budget {
        layout.kv("Used", &"n/a (budget must be above zero)".red().to_string());
    } else {
        layout.kv("Used", &format!("{:.1}%", status.raw_percentage));
    }
    layout.kv("Tier", &tier_badge(status.tier));
    layout
}
