//! Cart quality and budget scoring.

pub mod budget;
pub mod score;

pub use budget::{budget_status, BudgetStatus, BudgetTier};
pub use score::{quality_score, QualityGrade, QualityScore, DEFAULT_RATING};
