//! Budget tracking.
//!
//! One threshold table is used everywhere:
//!
//! | percentage of budget | tier        |
//! |----------------------|-------------|
//! | `<= 60`              | comfortable |
//! | `60 < p <= 85`       | tight       |
//! | `> 85`               | over        |
//!
//! A budget that is zero, negative or not finite cannot be divided by; such
//! a budget is reported as tier `Over` with `invalid_budget` set, whatever
//! the total.

use serde::Serialize;

pub const COMFORTABLE_MAX_PERCENT: f64 = 60.0;
pub const TIGHT_MAX_PERCENT: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Comfortable,
    Tight,
    Over,
}

impl BudgetTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= COMFORTABLE_MAX_PERCENT {
            Self::Comfortable
        } else if percentage <= TIGHT_MAX_PERCENT {
            Self::Tight
        } else {
            Self::Over
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Comfortable => "comfortable",
            Self::Tight => "tight",
            Self::Over => "over",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub total: f64,
    pub budget: f64,
    /// Share of the budget used, capped at 100.
    pub percentage: f64,
    /// Share of the budget used, uncapped.
    pub raw_percentage: f64,
    /// `budget - total`; negative when over budget.
    pub remaining: f64,
    pub tier: BudgetTier,
    pub over_budget: bool,
    pub invalid_budget: bool,
}

/// Classify `total` against `budget`.
///
/// Monotone in `total` for a fixed `budget`. Negative totals count as zero.
#[must_use]
pub fn budget_status(total: f64, budget: f64) -> BudgetStatus {
    let total = if total.is_finite() { total.max(0.0) } else { f64::INFINITY };

    if !budget.is_finite() || budget <= 0.0 {
        return BudgetStatus {
            total,
            budget,
            percentage: 100.0,
            raw_percentage: f64::INFINITY,
            remaining: if budget.is_finite() { budget - total } else { 0.0 },
            tier: BudgetTier::Over,
            over_budget: true,
            invalid_budget: true,
        };
    }

    let raw_percentage = total / budget * 100.0;
    BudgetStatus {
        total,
        budget,
        percentage: raw_percentage.min(100.0),
        raw_percentage,
        remaining: budget - total,
        tier: BudgetTier::from_percentage(raw_percentage),
        over_budget: total > budget,
        invalid_budget: false,
    }
}
