//! Cart quality scoring.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::{CartItem, MAX_RATING};

/// Rating assumed for products the catalog has not rated.
pub const DEFAULT_RATING: f64 = 4.0;

/// Upper bound of the quality scale.
pub const MAX_QUALITY: f64 = 10.0;

const RATING_WEIGHT: f64 = 8.0;
const VARIETY_WEIGHT: f64 = 2.0;
const VARIETY_PER_CATEGORY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityGrade {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 4.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Quality of a cart on a 0-10 scale with its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityScore {
    pub overall: f64,
    pub average_rating: f64,
    pub distinct_categories: usize,
    pub variety_bonus: f64,
    pub grade: QualityGrade,
}

impl QualityScore {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            overall: 0.0,
            average_rating: 0.0,
            distinct_categories: 0,
            variety_bonus: 0.0,
            grade: QualityGrade::Poor,
        }
    }
}

/// Score a cart.
///
/// `(avg_rating / 5) * 8 + min(categories * 0.3, 1) * 2`, clamped to 0-10.
/// Every line counts once regardless of quantity.
#[must_use]
pub fn quality_score(cart: &[CartItem]) -> QualityScore {
    if cart.is_empty() {
        return QualityScore::empty();
    }

    #[allow(clippy::cast_precision_loss)]
    let average_rating = cart
        .iter()
        .map(|item| item.product.rating.unwrap_or(DEFAULT_RATING))
        .sum::<f64>()
        / cart.len() as f64;

    let distinct_categories = cart
        .iter()
        .map(|item| item.product.category.trim().to_lowercase())
        .filter(|category| !category.is_empty())
        .collect::<HashSet<_>>()
        .len();

    #[allow(clippy::cast_precision_loss)]
    let variety_bonus = (distinct_categories as f64 * VARIETY_PER_CATEGORY).min(1.0) * VARIETY_WEIGHT;
    let overall = ((average_rating / MAX_RATING) * RATING_WEIGHT + variety_bonus).clamp(0.0, MAX_QUALITY);

    QualityScore {
        overall,
        average_rating,
        distinct_categories,
        variety_bonus,
        grade: QualityGrade::from_score(overall),
    }
}
