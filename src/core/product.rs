//! Product and cart item types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CartwiseError, Result};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A catalog product as handed to us by search or the optimizer.
///
/// Products are immutable once validated; containers own their copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: u64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Utility score assigned by the search/optimizer backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Product {
    /// Minimal product with an id, name and price. Other fields default.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: String::new(),
            price,
            rating: None,
            rating_count: 0,
            category: String::new(),
            image_url: None,
            description: String::new(),
            score: None,
        }
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Reject products that must never reach cart or bundle state.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CartwiseError::invalid_product(
                "<missing>",
                format!("product '{}' has no id", self.name),
            ));
        }
        if !self.price.is_finite() {
            return Err(CartwiseError::invalid_product(&self.id, "price is not a finite number"));
        }
        if self.price < 0.0 {
            return Err(CartwiseError::invalid_product(
                &self.id,
                format!("price {} is negative", self.price),
            ));
        }
        if let Some(rating) = self.rating {
            if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
                return Err(CartwiseError::invalid_product(
                    &self.id,
                    format!("rating {rating} outside 0-5"),
                ));
            }
        }
        Ok(())
    }

    /// Free text fed to spec extraction.
    #[must_use]
    pub fn spec_text(&self) -> String {
        let mut text = String::with_capacity(
            self.brand.len() + self.name.len() + self.description.len() + 2,
        );
        for part in [&self.brand, &self.name, &self.description] {
            if part.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(part);
        }
        text
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }

    pub fn validate(&self) -> Result<()> {
        self.product.validate()?;
        if self.quantity == 0 {
            return Err(CartwiseError::invalid_product(
                &self.product.id,
                "quantity must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Sum of line totals.
#[must_use]
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}
